//! Transport port - the wire-level POST, behind a trait.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// A raw HTTP response: status code plus the unparsed body.
///
/// Interpretation (JSON parsing, `error`/`url` field precedence) belongs to
/// the domain, not the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// Failures where no usable response was received at all.
///
/// An HTTP error *status* is not a transport failure: the response still came
/// back and may carry a server-supplied error payload, so it is returned as a
/// [`TransportResponse`] and classified downstream.
#[derive(Debug, Error)]
pub enum TransportFailure {
    #[error("connection error: {0}")]
    Connect(String),

    #[error("connection timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Other(String),
}

/// One form-encoded POST against an endpoint, bounded by `timeout`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_form(
        &self,
        endpoint: &str,
        fields: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<TransportResponse, TransportFailure>;
}
