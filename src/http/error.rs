use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to read response body: {0}")]
    Body(String),

    #[error("Failed to set up HTTP client: {0}")]
    Setup(String),
}
