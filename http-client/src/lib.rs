//! Private HTTP transport for SoundTouch device communication
//!
//! This crate performs the raw round trips against a speaker's embedded web
//! server (port 8090 by default) and classifies every failure into one of the
//! [`TransportError`] kinds. It does not interpret successful bodies; decoding
//! is left to the caller.

mod classify;
mod error;

pub use error::TransportError;

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::classify::{classify, from_reqwest, Failure};

/// Content type sent with every command body
pub const XML_CONTENT_TYPE: &str = "application/xml";

/// A single-request transport against one device
///
/// Implementations must be safe to share between tasks: the façade issues
/// calls concurrently without any coordination.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Issue a GET and return the response body as text
    async fn get(&self, path: &str) -> Result<String, TransportError>;

    /// Issue a POST with the given XML body; a successful response body is discarded
    async fn post(&self, path: &str, body: Option<&str>) -> Result<(), TransportError>;
}

/// reqwest-backed [`Transport`] bound to one `host:port`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for `http://host:port` with a per-request timeout
    ///
    /// IPv6 literals are bracketed automatically.
    pub fn new(host: &str, port: u16, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Connection(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url(host, port),
        })
    }

    /// Absolute base URL, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn finish(response: reqwest::Response) -> Result<String, TransportError> {
        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return Err(classify(from_reqwest(&e))),
        };

        if status.is_success() {
            return Ok(body);
        }

        Err(classify(Failure {
            body: Some(&body),
            message: format!("HTTP {}", status),
            ..Failure::default()
        }))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<String, TransportError> {
        let url = self.url(path);
        debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| classify(from_reqwest(&e)))?;

        Self::finish(response).await
    }

    async fn post(&self, path: &str, body: Option<&str>) -> Result<(), TransportError> {
        let url = self.url(path);
        debug!(%url, body_len = body.map_or(0, str::len), "POST");

        let mut request = self.client.post(&url);
        if let Some(body) = body {
            request = request
                .header(reqwest::header::CONTENT_TYPE, XML_CONTENT_TYPE)
                .body(body.to_string());
        }

        let response = request.send().await.map_err(|e| classify(from_reqwest(&e)))?;

        Self::finish(response).await.map(|_| ())
    }
}

fn base_url(host: &str, port: u16) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("http://[{}]:{}", host, port)
    } else {
        format!("http://{}:{}", host, port)
    }
}
