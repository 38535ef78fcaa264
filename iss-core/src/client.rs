use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt::Debug;

/// Minimal GET capability injected into the API clients.
///
/// The production implementation wraps [`reqwest::Client`]; tests swap in
/// a canned implementation instead of intercepting a shared client.
#[async_trait]
pub trait HttpGet: Send + Sync + Debug {
    /// Issue a GET and return the status together with the raw body.
    ///
    /// Returns `Err` only when transport fails; non-success statuses come
    /// back as `Ok` so callers can inspect the error body.
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Network-level failure: the request never produced an HTTP response.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// [`HttpGet`] backed by a [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttp {
    http: reqwest::Client,
}

impl ReqwestHttp {
    pub fn new() -> Self {
        Self { http: reqwest::Client::new() }
    }
}

#[async_trait]
impl HttpGet for ReqwestHttp {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::new(format!("Failed to send GET request: {e}")))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| TransportError::new(format!("Failed to read response body: {e}")))?;

        Ok(HttpResponse { status, body })
    }
}
