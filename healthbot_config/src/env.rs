//! Environment variable overrides for deployments without a config file.

use anyhow::anyhow;
use std::net::Ipv6Addr;
use std::path::PathBuf;
use tracing::{debug, warn};
use url::Url;

use crate::schema::Config;

const DATABASE_URL: &str = "DATABASE_URL";
const DB_HOST: &str = "DB_HOST";
const DB_USER: &str = "DB_USER";
const DB_PASSWORD: &str = "DB_PASSWORD";
const DB_NAME: &str = "DB_NAME";
const PORT: &str = "PORT";
const HEALTH_DATA_SHEET: &str = "HEALTH_DATA_SHEET";

const BASE_MYSQL_URL: &str = "mysql://localhost:3306/healthbot";

impl Config {
    /// Apply overrides from the process environment.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// `DATABASE_URL` wins over the `DB_*` parts. Blank values count as unset.
    #[must_use]
    pub fn with_overrides<F>(mut self, var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| var(key).filter(|value| !value.trim().is_empty());

        if let Some(url) = var(DATABASE_URL) {
            debug!("Database URL taken from {DATABASE_URL}");
            self.database.url = url;
        } else if [DB_HOST, DB_USER, DB_PASSWORD, DB_NAME]
            .iter()
            .any(|key| var(*key).is_some())
        {
            match mysql_url(
                &var(DB_HOST).unwrap_or_else(|| "localhost".to_string()),
                &var(DB_USER).unwrap_or_else(|| "root".to_string()),
                &var(DB_PASSWORD).unwrap_or_default(),
                &var(DB_NAME).unwrap_or_else(|| "healthbot".to_string()),
            ) {
                Ok(url) => {
                    debug!("Database URL composed from DB_* variables");
                    self.database.url = url.into();
                }
                Err(e) => warn!("Ignoring DB_* variables: {e}"),
            }
        }

        if let Some(port) = var(PORT) {
            match port.trim().parse() {
                Ok(port) => self.server.port = port,
                Err(e) => debug!("Ignoring {PORT}={port}: {e}"),
            }
        }

        if let Some(path) = var(HEALTH_DATA_SHEET) {
            self.spreadsheet.path = PathBuf::from(path);
        }

        self
    }
}

fn mysql_url(host: &str, user: &str, password: &str, database: &str) -> anyhow::Result<Url> {
    let mut url = Url::parse(BASE_MYSQL_URL)?;
    let (host, port) = split_host_port(host);

    url.set_host(Some(host.as_str()))?;
    if let Some(port) = port {
        url.set_port(Some(port))
            .map_err(|()| anyhow!("cannot set port on {url}"))?;
    }
    url.set_username(user)
        .map_err(|()| anyhow!("cannot set user on {url}"))?;
    url.set_password(Some(password))
        .map_err(|()| anyhow!("cannot set password on {url}"))?;
    url.set_path(&format!("/{database}"));

    Ok(url)
}

/// Split `host[:port]`. A bare IPv6 literal is bracketed and keeps the default
/// port.
fn split_host_port(host: &str) -> (String, Option<u16>) {
    if host.parse::<Ipv6Addr>().is_ok() {
        return (format!("[{host}]"), None);
    }

    match host.rsplit_once(':') {
        Some((name, port)) => port
            .parse()
            .map_or_else(|_| (host.to_string(), None), |port| (name.to_string(), Some(port))),
        None => (host.to_string(), None),
    }
}
