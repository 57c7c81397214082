use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid CORS origin: {0}")]
    InvalidOrigin(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
