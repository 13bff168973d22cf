//! HTTP transport seam.
//!
//! The client talks to the network through the [`Transport`] trait so the
//! request/response contract stays testable without a live service. The
//! production implementation wraps `reqwest::blocking`. One send per call:
//! no retry, no backoff, no per-call timeout override.

use std::time::Duration;

use columna_core::constants::DEFAULT_TIMEOUT_SECS;
use columna_core::errors::RequestError;

use crate::protocol::PredictRequest;

/// Status and raw body of an HTTP exchange that reached the server.
#[derive(Debug, Clone)]
pub struct TransportReply {
    pub status: u16,
    pub body: String,
}

impl TransportReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Configuration for the HTTP transport.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Request timeout (transport default; never overridden per call).
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// The one suspension point in the submission flow.
pub trait Transport: Send + Sync {
    /// POST `body` as JSON to `url` and return the reply. Errors only for
    /// failures below the HTTP layer (refused connection, timeout, ...);
    /// non-2xx statuses come back as a normal [`TransportReply`].
    fn post_json(&self, url: &str, body: &PredictRequest) -> Result<TransportReply, RequestError>;
}

/// Production transport over `reqwest::blocking`.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(config: TransportConfig) -> Result<Self, RequestError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RequestError::Network {
                reason: e.to_string(),
            })?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, url: &str, body: &PredictRequest) -> Result<TransportReply, RequestError> {
        tracing::debug!("POST {url}");

        // `.json()` serializes the body and sets `Content-Type: application/json`.
        let resp = self
            .client
            .post(url)
            .json(body)
            .send()
            .map_err(|e| RequestError::Network {
                reason: e.to_string(),
            })?;

        let status = resp.status().as_u16();
        let body = resp.text().map_err(|e| RequestError::Network {
            reason: e.to_string(),
        })?;

        Ok(TransportReply { status, body })
    }
}
