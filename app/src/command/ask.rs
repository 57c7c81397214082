use healthbot_config::Config;
use std::path::PathBuf;
use tracing::warn;

use super::build_chatbot;

/// Input parameters for the Ask command strategy.
#[derive(Debug, Clone)]
pub struct AskInput {
    pub config_path: Option<PathBuf>,
    pub message: String,
}

/// Strategy for answering a single message from the command line.
///
/// Runs the same pipeline as the HTTP service, including recording unmatched
/// queries, and prints the reply.
#[derive(Debug, Clone, Copy)]
pub struct AskStrategy;

impl super::CommandStrategy for AskStrategy {
    type Input = AskInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default(input.config_path.as_deref())?;
        let (chatbot, database) = build_chatbot(&config).await;

        let reply = chatbot.reply(&input.message).await;
        println!("{reply}");

        if let Err(e) = database.close().await {
            warn!("Failed to close database connection: {e}");
        }
        Ok(())
    }
}
