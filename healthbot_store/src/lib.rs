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

mod convert;
mod database;
mod seed;
mod spreadsheet;

pub use database::{DatabaseQuerySink, DatabaseSource, connect};
pub use seed::{SeedError, SeedReport, create_tables, drop_tables, seed_records};
pub use spreadsheet::{ColumnMap, SpreadsheetSource, records_from_rows};
