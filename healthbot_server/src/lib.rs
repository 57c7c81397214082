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

mod error;
pub mod handler;
mod server;

pub use error::{Error, Result};
pub use handler::{AppState, ChatRequest, ChatResponse, HealthResponse};
pub use server::{ChatServer, cors_layer, shutdown_signal};
