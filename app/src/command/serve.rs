use healthbot_config::Config;
use healthbot_server::{ChatServer, shutdown_signal};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use super::build_chatbot;

/// Input parameters for the Serve command strategy.
#[derive(Debug, Clone)]
pub struct ServeInput {
    pub config_path: Option<PathBuf>,
    /// Overrides `server.host`
    pub host: Option<String>,
    /// Overrides `server.port`
    pub port: Option<u16>,
}

/// Strategy for running the HTTP chat service.
///
/// Records are loaded once before the listener opens. If neither the database
/// nor the spreadsheet can be read the service still starts and answers with
/// the data-unavailable notice.
#[derive(Debug, Clone, Copy)]
pub struct ServeStrategy;

impl super::CommandStrategy for ServeStrategy {
    type Input = ServeInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut config = Config::load_or_default(input.config_path.as_deref())?;
        if let Some(host) = input.host {
            config.server.host = host;
        }
        if let Some(port) = input.port {
            config.server.port = port;
        }

        let (chatbot, database) = build_chatbot(&config).await;

        info!("Starting chat service...");
        let server = ChatServer::new(Arc::new(chatbot), config.server.clone());
        let served = server.run(shutdown_signal()).await;

        if let Err(e) = database.close().await {
            warn!("Failed to close database connection: {e}");
        }

        served?;
        Ok(())
    }
}
