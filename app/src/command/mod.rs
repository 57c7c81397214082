//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input, dispatched
//! statically from `main`.

use healthbot_config::Config;
use healthbot_core::{Chatbot, RecordStore};
use healthbot_store::{DatabaseSource, SpreadsheetSource};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod ask;
mod info;
mod init;
mod seed;
mod serve;
mod version;

pub use ask::{AskInput, AskStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use seed::{SeedInput, SeedStrategy};
pub use serve::{ServeInput, ServeStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

fn database_source(config: &Config) -> DatabaseSource {
    DatabaseSource::new(
        config.database.url.clone(),
        Duration::from_secs(config.database.connect_timeout_secs),
    )
    .enabled(config.database.enabled)
}

fn spreadsheet_source(config: &Config) -> SpreadsheetSource {
    SpreadsheetSource::new(config.spreadsheet.path.clone())
        .with_sheet(config.spreadsheet.sheet.clone())
}

/// Load the record store (database first, then spreadsheet) and wire up the
/// chatbot.
///
/// The database source is returned so the caller can close its connection
/// once it is done.
async fn build_chatbot(config: &Config) -> (Chatbot, DatabaseSource) {
    let database = database_source(config);
    let spreadsheet = spreadsheet_source(config);

    let store = RecordStore::load_first_available(&[&database, &spreadsheet]).await;
    let mut chatbot = Chatbot::new(store);

    let sink = config
        .lookup
        .log_unmatched_queries
        .then(|| database.query_sink())
        .flatten();
    if let Some(sink) = sink {
        info!("Unmatched queries will be recorded in the database");
        chatbot = chatbot.with_sink(Arc::new(sink));
    }

    (chatbot, database)
}
