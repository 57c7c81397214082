use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::record::DiseaseRecord;

/// Why a backing source could not produce records.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("source disabled in configuration")]
    Disabled,

    #[error("database error: {0}")]
    Database(String),

    #[error("spreadsheet not found at {}", .0.display())]
    MissingFile(PathBuf),

    #[error("spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("required column '{0}' not found")]
    MissingColumn(&'static str),
}

/// A loader strategy for the record store.
///
/// Implementations return records in source order and skip rows without a
/// usable name.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Human readable name used in logs.
    fn name(&self) -> &str;

    async fn load(&self) -> Result<Vec<DiseaseRecord>, LoadError>;
}
