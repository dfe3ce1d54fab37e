use async_trait::async_trait;
use reqwest::Client;
use tracing::instrument;

use super::error::TransportError;
use super::{HttpResponse, HttpTransport, Method, RequestInit, TransportResult};

/// [`HttpTransport`] backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> TransportResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| TransportError::Setup(e.to_string()))?;

        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method))]
    async fn execute(&self, url: &str, request: &RequestInit) -> TransportResult<HttpResponse> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
        };

        let mut builder = self.client.request(method, url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(error = %e, "Request failed before a response was received");
            TransportError::Network(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        tracing::debug!(status, "Response received");

        Ok(HttpResponse { status, body })
    }
}
