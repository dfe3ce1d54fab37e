use serde_json::Value;
use thiserror::Error;

use crate::http::TransportError;
use crate::session::SessionError;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// An authenticated call was attempted without a usable session.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Non-2xx response; `body` is the server's error payload unchanged.
    #[error("Server rejected request with status {status}: {body}")]
    Server { status: u16, body: Value },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Failed to encode request: {0}")]
    Encode(String),

    #[error("Cannot update {0} route without an id")]
    MissingRouteId(&'static str),
}

impl ApiError {
    /// Error payload returned by the server, if this is a server failure.
    pub fn server_body(&self) -> Option<&Value> {
        match self {
            ApiError::Server { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn is_session_error(&self) -> bool {
        matches!(self, ApiError::Session(_))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Encode(err.to_string())
    }
}
