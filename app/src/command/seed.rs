use healthbot_config::Config;
use healthbot_core::RecordSource;
use healthbot_store::{connect, create_tables, drop_tables, seed_records};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use super::spreadsheet_source;

/// Input parameters for the Seed command strategy.
#[derive(Debug, Clone)]
pub struct SeedInput {
    pub config_path: Option<PathBuf>,
    /// Drop the existing tables before importing
    pub reset: bool,
}

/// Strategy for importing the spreadsheet into MySQL.
///
/// Creates the schema if needed and inserts every named row, in sheet order,
/// in one transaction.
#[derive(Debug, Clone, Copy)]
pub struct SeedStrategy;

impl super::CommandStrategy for SeedStrategy {
    type Input = SeedInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default(input.config_path.as_deref())?;

        let spreadsheet = spreadsheet_source(&config);
        let records = spreadsheet.load().await?;
        info!(
            "Read {} diseases from {}",
            records.len(),
            spreadsheet.path().display()
        );

        let db = connect(
            &config.database.url,
            Duration::from_secs(config.database.connect_timeout_secs),
        )
        .await?;

        if input.reset {
            drop_tables(&db).await?;
        }
        create_tables(&db).await?;
        let report = seed_records(&db, &records).await?;
        db.close().await?;

        println!(
            "✅ Imported {} diseases ({} precautions) into MySQL",
            report.diseases, report.precautions
        );
        Ok(())
    }
}
