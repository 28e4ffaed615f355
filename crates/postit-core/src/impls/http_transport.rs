//! HttpTransport - reqwest-backed Transport implementation.

use std::time::Duration;

use async_trait::async_trait;

use crate::ports::{Transport, TransportFailure, TransportResponse};

/// Production transport: one form-encoded POST per call, bounded by a
/// per-request timeout.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

/// Classify a reqwest failure into the transport taxonomy.
///
/// Any error reaching here means no usable response came back; HTTP error
/// statuses are returned as responses, not errors.
fn classify(e: reqwest::Error) -> TransportFailure {
    if e.is_timeout() {
        TransportFailure::Timeout
    } else if e.is_connect() {
        TransportFailure::Connect(e.to_string())
    } else {
        TransportFailure::Other(e.to_string())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_form(
        &self,
        endpoint: &str,
        fields: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<TransportResponse, TransportFailure> {
        let response = self
            .client
            .post(endpoint)
            .form(fields)
            .timeout(timeout)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify)?;

        Ok(TransportResponse { status, body })
    }
}
