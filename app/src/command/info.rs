use healthbot_config::Config;
use healthbot_core::RecordSource;
use std::path::PathBuf;
use tracing::info;

use super::{database_source, spreadsheet_source};

/// Strategy for displaying configuration information.
///
/// This strategy outputs:
/// - Database URL (password masked) and whether it can be read
/// - Spreadsheet path and whether it can be read
/// - Server and lookup settings
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = Option<PathBuf>;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default(input.as_deref())?;

        println!("=== healthbot Configuration ===\n");

        println!("Database:");
        println!("  Enabled: {}", config.database.enabled);
        println!("  URL: {}", mask_database_url(&config.database.url));
        println!(
            "  Connect Timeout: {}s",
            config.database.connect_timeout_secs
        );

        info!("Testing database source");
        let database = database_source(&config);
        match database.load().await {
            Ok(records) => println!("  Status: Connected ({} diseases)", records.len()),
            Err(e) => {
                println!("  Status: Unavailable");
                println!("  Error: {e}");
            }
        }
        database.close().await?;
        println!();

        println!("Spreadsheet:");
        println!("  Path: {}", config.spreadsheet.path.display());
        if let Some(ref sheet) = config.spreadsheet.sheet {
            println!("  Sheet: {sheet}");
        }
        match spreadsheet_source(&config).load().await {
            Ok(records) => println!("  Status: Readable ({} diseases)", records.len()),
            Err(e) => {
                println!("  Status: Unavailable");
                println!("  Error: {e}");
            }
        }
        println!();

        println!("Server:");
        println!("  Bind: {}", config.server.bind_address());
        if config.server.allowed_origins.is_empty() {
            println!("  Allowed Origins: (empty - all origins allowed)");
        } else {
            println!(
                "  Allowed Origins: {}",
                config.server.allowed_origins.join(", ")
            );
        }
        println!();

        println!("Lookup:");
        println!(
            "  Log Unmatched Queries: {}",
            config.lookup.log_unmatched_queries
        );

        Ok(())
    }
}

fn mask_database_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };

    let Some((credentials, after_at)) = rest.rsplit_once('@') else {
        return url.to_string();
    };

    let Some((username, _password)) = credentials.split_once(':') else {
        return url.to_string();
    };

    format!("{scheme}://{username}:***@{after_at}")
}
