//! In-memory record store and the lookup over it.

use tracing::{error, info, warn};

use crate::record::DiseaseRecord;
use crate::source::RecordSource;

/// Result of looking a query up in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The store holds no records at all.
    DataUnavailable,
    /// The whole store was scanned without a match.
    NoMatch,
    /// Formatted reply of the first matching record.
    Found(String),
}

/// Ordered, read-only collection of disease records.
///
/// Built once before any request is served and shared by reference afterwards.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<DiseaseRecord>,
}

impl RecordStore {
    #[must_use]
    pub const fn new(records: Vec<DiseaseRecord>) -> Self {
        Self { records }
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a free-text query.
    ///
    /// The query is trimmed and lowercased, then compared against each name in
    /// store order. The first record whose name equals or contains the query
    /// wins.
    #[must_use]
    pub fn respond(&self, query: &str) -> Lookup {
        if self.records.is_empty() {
            return Lookup::DataUnavailable;
        }

        let query = query.trim().to_lowercase();

        self.records
            .iter()
            .find(|record| record.matches(&query))
            .map_or(Lookup::NoMatch, |record| Lookup::Found(record.reply_text()))
    }

    /// Build the store from the first source that loads successfully.
    ///
    /// Sources are tried in order. Every failure is logged and the next source
    /// is tried. When none succeeds the store is empty and the service runs in
    /// degraded mode.
    pub async fn load_first_available(sources: &[&dyn RecordSource]) -> Self {
        for source in sources {
            match source.load().await {
                Ok(records) => {
                    info!("Loaded {} diseases from {}", records.len(), source.name());
                    return Self::new(records);
                }
                Err(e) => {
                    warn!("{} not available: {e}", source.name());
                }
            }
        }

        error!("No disease data source available, serving without records");
        Self::empty()
    }
}
