use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub spreadsheet: SpreadsheetConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    #[serde(default = "DatabaseConfig::default_enabled")]
    pub enabled: bool,
    #[serde(default = "DatabaseConfig::default_url")]
    pub url: String,
    #[serde(default = "DatabaseConfig::default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            url: Self::default_url(),
            connect_timeout_secs: Self::default_connect_timeout_secs(),
        }
    }
}

impl DatabaseConfig {
    const fn default_enabled() -> bool {
        true
    }

    fn default_url() -> String {
        "mysql://root:@localhost:3306/healthbot".to_string()
    }

    const fn default_connect_timeout_secs() -> u64 {
        5
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SpreadsheetConfig {
    #[serde(default = "SpreadsheetConfig::default_path")]
    pub path: PathBuf,
    /// Worksheet to read; the first one when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet: Option<String>,
}

impl Default for SpreadsheetConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
            sheet: None,
        }
    }
}

impl SpreadsheetConfig {
    fn default_path() -> PathBuf {
        PathBuf::from("Health Data Sheet.xlsx")
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "ServerConfig::default_host")]
    pub host: String,
    #[serde(default = "ServerConfig::default_port")]
    pub port: u16,
    /// CORS allow-list. Empty means any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            allowed_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    const fn default_port() -> u16 {
        5000
    }

    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LookupConfig {
    #[serde(default = "LookupConfig::default_log_unmatched")]
    pub log_unmatched_queries: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            log_unmatched_queries: Self::default_log_unmatched(),
        }
    }
}

impl LookupConfig {
    const fn default_log_unmatched() -> bool {
        true
    }
}

const CONFIG_TEMPLATE: &str = r#"{
  "database": {
    "enabled": true,
    "url": "mysql://root:@localhost:3306/healthbot",
    "connect_timeout_secs": 5
  },
  "spreadsheet": {
    "path": "Health Data Sheet.xlsx"
  },
  "server": {
    "host": "0.0.0.0",
    "port": 5000,
    "allowed_origins": []
  },
  "lookup": {
    "log_unmatched_queries": true
  }
}"#;

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("healthbot"))
    }

    pub fn default_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    fn resolve_path(path: Option<&Path>) -> anyhow::Result<PathBuf> {
        path.map_or_else(Self::default_path, |p| Ok(p.to_path_buf()))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load the config file, failing if it does not exist.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config_path = Self::resolve_path(path)?;

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'healthbot init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config = Self::parse(&content)?.with_env_overrides();
        info!("Loaded config from {}", config_path.display());

        Ok(config)
    }

    /// Load the config file, or run on defaults when there is none.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        let config_path = Self::resolve_path(path)?;

        if config_path.exists() {
            return Self::load(Some(&config_path));
        }

        warn!(
            "No config file at {}, using defaults",
            config_path.display()
        );
        Ok(Self::default().with_env_overrides())
    }

    pub fn create_config(path: Option<&Path>) -> anyhow::Result<()> {
        let config_path = Self::resolve_path(path)?;

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&config_path, CONFIG_TEMPLATE)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Point database.url at your MySQL instance (or set DATABASE_URL)");
        println!("   2. Point spreadsheet.path at the fallback workbook");
        println!("   3. Run 'healthbot seed' to import the workbook into MySQL");
        println!("   4. Run 'healthbot serve' to start the chat service");
        println!();
        Ok(())
    }
}
