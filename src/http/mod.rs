pub mod client;
pub mod error;

use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::instrument;

pub use client::ReqwestTransport;
pub use error::TransportError;

use crate::service::{ApiError, ApiResult};
use crate::session::Session;

pub type TransportResult<T> = std::result::Result<T, TransportError>;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
const APPLICATION_JSON: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request descriptor handed to an [`HttpTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestInit {
    pub method: Method,
    pub headers: BTreeMap<String, String>,
    /// Serialized JSON payload, never set for GET.
    pub body: Option<String>,
}

impl RequestInit {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn is_authenticated(&self) -> bool {
        self.headers.contains_key(AUTHORIZATION)
    }
}

/// Raw response as returned by the transport, before any decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network seam of the client.
///
/// Implementations perform exactly one HTTP exchange per call and report the
/// status and body as received. Status interpretation happens in
/// [`perform_request`], so a non-2xx response is still `Ok` here.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, url: &str, request: &RequestInit) -> TransportResult<HttpResponse>;
}

/// Builds the request descriptor for a JSON API call.
///
/// The `Authorization` header is only present when a session is given.
pub fn build_request<B>(
    method: Method,
    session: Option<&Session>,
    body: Option<&B>,
) -> Result<RequestInit, serde_json::Error>
where
    B: Serialize + ?Sized,
{
    let mut headers = BTreeMap::new();
    headers.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());
    if let Some(session) = session {
        headers.insert(AUTHORIZATION.to_string(), session.bearer());
    }

    let body = match (method, body) {
        (Method::Get, _) | (_, None) => None,
        (_, Some(payload)) => Some(serde_json::to_string(payload)?),
    };

    Ok(RequestInit {
        method,
        headers,
        body,
    })
}

/// Executes a request and decodes the outcome.
///
/// A 2xx body is decoded into `T`. Any other status yields
/// [`ApiError::Server`] carrying the server's error payload as-is.
#[instrument(skip(transport, request), fields(method = %request.method), err)]
pub async fn perform_request<T>(
    transport: &dyn HttpTransport,
    url: &str,
    request: &RequestInit,
) -> ApiResult<T>
where
    T: DeserializeOwned,
{
    let response = transport.execute(url, request).await?;

    if response.is_success() {
        return serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Decode(format!("Invalid response body from {url}: {e}")));
    }

    let body = serde_json::from_str::<Value>(&response.body)
        .unwrap_or_else(|_| Value::String(response.body.clone()));

    tracing::warn!(status = response.status, "Request rejected by server");

    Err(ApiError::Server {
        status: response.status,
        body,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn session() -> Session {
        Session::new("token-123", "8FhuD4a7HvR9ad6Ywbcmd5kDxnYhhW3m8Y")
    }

    #[test]
    fn test_build_request_without_session_has_no_authorization() {
        let request = build_request::<()>(Method::Get, None, None).unwrap();

        assert!(!request.is_authenticated());
        assert_eq!(request.header(CONTENT_TYPE), Some("application/json"));
        assert_eq!(request.body, None);
    }

    #[test]
    fn test_build_request_with_session_sets_bearer_token() {
        let session = session();
        let request = build_request::<()>(Method::Get, Some(&session), None).unwrap();

        assert_eq!(request.header(AUTHORIZATION), Some("Bearer token-123"));
        assert_eq!(request.header(CONTENT_TYPE), Some("application/json"));
    }

    #[test]
    fn test_build_request_serializes_body() {
        let payload = json!({ "iban": "DE89370400440532013000" });
        let request = build_request(Method::Post, None, Some(&payload)).unwrap();

        assert_eq!(request.method, Method::Post);
        assert_eq!(
            request.body.as_deref(),
            Some(r#"{"iban":"DE89370400440532013000"}"#)
        );
    }

    #[test]
    fn test_build_request_drops_body_for_get() {
        let payload = json!({ "ignored": true });
        let request = build_request(Method::Get, None, Some(&payload)).unwrap();

        assert_eq!(request.body, None);
    }

    #[test]
    fn test_http_response_success_range() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(201, "").is_success());
        assert!(!HttpResponse::new(199, "").is_success());
        assert!(!HttpResponse::new(302, "").is_success());
        assert!(!HttpResponse::new(400, "").is_success());
    }
}
