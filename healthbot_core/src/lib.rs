#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod chat;
pub mod record;
pub mod sink;
pub mod source;
pub mod store;

pub use chat::{ChatReply, Chatbot};
pub use record::{DiseaseRecord, InvalidRecord, NOTE_SLOTS, normalize_field};
pub use sink::{SinkOutcome, UnmatchedQuerySink, record_best_effort};
pub use source::{LoadError, RecordSource};
pub use store::{Lookup, RecordStore};
