#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] confique::Error),

    #[error("Invalid mode: {0:?} (expected one of highlight, format, pretty)")]
    InvalidMode(String),
}

pub type Result<T = ()> = std::result::Result<T, Error>;
