use healthbot_config::Config;
use std::path::PathBuf;

/// Strategy for initializing the configuration.
///
/// Creates the default configuration file at `~/healthbot/config.json`, or at
/// the path given with `--config`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = Option<PathBuf>;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        Config::create_config(input.as_deref())
    }
}
