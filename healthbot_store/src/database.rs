//! MySQL-backed record source and unmatched-query sink.

use async_trait::async_trait;
use chrono::Utc;
use healthbot_core::{DiseaseRecord, LoadError, RecordSource, UnmatchedQuerySink};
use healthbot_entities::{diseases, unknown_queries};
use sea_orm::{
    ConnectOptions, Database, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::convert;

/// Open a connection pool with the given timeout for connect and acquire.
pub async fn connect(url: &str, timeout: Duration) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(url.to_owned());
    options
        .connect_timeout(timeout)
        .acquire_timeout(timeout)
        .sqlx_logging(false);

    info!("Connecting to database");
    let db = Database::connect(options).await?;
    info!("Database connection established");
    Ok(db)
}

/// Loads records from the `diseases` table.
///
/// The connection is opened on the first load and kept for the process
/// lifetime so the unmatched-query sink can reuse it. Call [`Self::close`] on
/// shutdown.
pub struct DatabaseSource {
    url: String,
    timeout: Duration,
    enabled: bool,
    conn: OnceCell<DatabaseConnection>,
}

impl DatabaseSource {
    #[must_use]
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
            enabled: true,
            conn: OnceCell::new(),
        }
    }

    /// Wrap an already open connection.
    #[must_use]
    pub fn from_connection(conn: DatabaseConnection) -> Self {
        Self {
            url: String::new(),
            timeout: Duration::ZERO,
            enabled: true,
            conn: OnceCell::new_with(Some(conn)),
        }
    }

    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// The connection, if a previous load opened one.
    #[must_use]
    pub fn connection(&self) -> Option<&DatabaseConnection> {
        self.conn.get()
    }

    /// A sink sharing this source's connection, if it is open.
    #[must_use]
    pub fn query_sink(&self) -> Option<DatabaseQuerySink> {
        self.connection().cloned().map(DatabaseQuerySink::new)
    }

    pub async fn close(self) -> anyhow::Result<()> {
        if let Some(conn) = self.conn.into_inner() {
            conn.close().await?;
            info!("Database connection closed");
        }
        Ok(())
    }

    async fn open(&self) -> Result<&DatabaseConnection, DbErr> {
        self.conn
            .get_or_try_init(|| connect(&self.url, self.timeout))
            .await
    }
}

#[async_trait]
impl RecordSource for DatabaseSource {
    fn name(&self) -> &str {
        "MySQL"
    }

    async fn load(&self) -> Result<Vec<DiseaseRecord>, LoadError> {
        if !self.enabled {
            return Err(LoadError::Disabled);
        }

        let db = self
            .open()
            .await
            .map_err(|e| LoadError::Database(e.to_string()))?;

        let models = diseases::Entity::find()
            .order_by_asc(diseases::Column::Id)
            .all(db)
            .await
            .map_err(|e| LoadError::Database(e.to_string()))?;

        let records = models
            .into_iter()
            .filter_map(|model| {
                let id = model.id;
                convert::record_from_model(model)
                    .inspect_err(|e| debug!("Skipping disease row {id}: {e}"))
                    .ok()
            })
            .collect();

        Ok(records)
    }
}

/// Writes unmatched queries to the `unknown_queries` table.
#[derive(Clone)]
pub struct DatabaseQuerySink {
    db: DatabaseConnection,
}

impl DatabaseQuerySink {
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UnmatchedQuerySink for DatabaseQuerySink {
    async fn record(&self, query: &str) -> anyhow::Result<()> {
        let model = unknown_queries::ActiveModel {
            query_text: Set(query.to_string()),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        unknown_queries::Entity::insert(model).exec(&self.db).await?;

        debug!("Recorded unmatched query: {query}");
        Ok(())
    }
}
