//! Message handling in front of the record store.

use std::fmt;
use std::sync::Arc;

use crate::sink::{UnmatchedQuerySink, record_best_effort};
use crate::store::{Lookup, RecordStore};

pub const INVALID_INPUT_TEXT: &str = "Please enter a valid message.";
pub const DATA_UNAVAILABLE_TEXT: &str = "Medical database is not available right now.";
pub const NO_MATCH_TEXT: &str = "Sorry, I don't have information on that disease.";
pub const SERVER_ERROR_TEXT: &str = "Server error occurred.";

/// Every reply the bot can give.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatReply {
    InvalidInput,
    DataUnavailable,
    NoMatch,
    Found(String),
    /// The request itself could not be read.
    ServerError,
}

impl ChatReply {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::InvalidInput => INVALID_INPUT_TEXT,
            Self::DataUnavailable => DATA_UNAVAILABLE_TEXT,
            Self::NoMatch => NO_MATCH_TEXT,
            Self::ServerError => SERVER_ERROR_TEXT,
            Self::Found(reply) => reply,
        }
    }

    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Found(reply) => reply,
            other => other.text().to_string(),
        }
    }
}

impl fmt::Display for ChatReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl From<Lookup> for ChatReply {
    fn from(lookup: Lookup) -> Self {
        match lookup {
            Lookup::DataUnavailable => Self::DataUnavailable,
            Lookup::NoMatch => Self::NoMatch,
            Lookup::Found(reply) => Self::Found(reply),
        }
    }
}

/// Validates incoming messages, runs the lookup and records misses.
pub struct Chatbot {
    store: RecordStore,
    sink: Option<Arc<dyn UnmatchedQuerySink>>,
}

impl Chatbot {
    #[must_use]
    pub const fn new(store: RecordStore) -> Self {
        Self { store, sink: None }
    }

    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn UnmatchedQuerySink>) -> Self {
        self.sink = Some(sink);
        self
    }

    #[must_use]
    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    pub async fn reply(&self, message: &str) -> ChatReply {
        let message = message.trim();
        if message.is_empty() {
            return ChatReply::InvalidInput;
        }

        let lookup = self.store.respond(message);
        if let (Lookup::NoMatch, Some(sink)) = (&lookup, &self.sink) {
            record_best_effort(sink.as_ref(), message).await;
        }

        lookup.into()
    }
}
