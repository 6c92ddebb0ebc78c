use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrteliusError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] crate::client::FetchError),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Init Logging error: {0}")]
    InitLoggingError(#[from] tracing_subscriber::filter::ParseError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, OrteliusError>;
