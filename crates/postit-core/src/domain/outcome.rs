//! Outcome model: the terminal result of one upload attempt.
//!
//! This module is transport-agnostic: it only defines the "shape" of results
//! and the rules for reading a server response into one. The HTTP call itself
//! lives behind the `Transport` port.

use serde::{Deserialize, Serialize};

/// The terminal result of one upload attempt. Exactly one variant is ever
/// recorded per attempt, and it never changes once written.
///
/// `ServerError` and `TransportError` are rendered identically to the user;
/// the distinction is internal bookkeeping (did the endpoint speak, or did we
/// fail to hear it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum UploadOutcome {
    /// Server acknowledged the upload and returned a location.
    Success { url: String },

    /// The endpoint explicitly reported an application-level failure.
    ServerError { message: String },

    /// Network, timeout, or protocol failure, including a malformed body.
    TransportError { message: String },
}

impl UploadOutcome {
    pub fn success(url: impl Into<String>) -> Self {
        Self::Success { url: url.into() }
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        Self::ServerError {
            message: message.into(),
        }
    }

    pub fn transport_error(message: impl Into<String>) -> Self {
        Self::TransportError {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Interpret an HTTP response into a terminal outcome.
    ///
    /// The body is parsed before the status is consulted, so a non-2xx
    /// response carrying a valid `{"error": ...}` payload still surfaces the
    /// server's own message instead of a generic HTTP failure.
    ///
    /// Rules, in order:
    /// 1. Body that is not a JSON object → `TransportError`.
    /// 2. Payload `error` field → `ServerError` with that message, regardless
    ///    of status code.
    /// 3. Non-2xx status without an `error` field → generic `ServerError`
    ///    naming the status.
    /// 4. Missing `url` field → `TransportError` (protocol violation).
    /// 5. Otherwise → `Success` with the returned URL.
    pub fn from_http(status: u16, body: &str) -> Self {
        let payload: serde_json::Value = match serde_json::from_str(body) {
            Ok(value) => value,
            Err(e) => return Self::transport_error(format!("malformed response body: {e}")),
        };

        if let Some(message) = payload.get("error").and_then(|v| v.as_str()) {
            return Self::server_error(message);
        }

        if !(200..300).contains(&status) {
            return Self::server_error(format!("server returned HTTP {status}"));
        }

        match payload.get("url").and_then(|v| v.as_str()) {
            Some(url) => Self::success(url),
            None => Self::transport_error("response missing expected field \"url\""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn ok_response_with_url_is_success() {
        let outcome = UploadOutcome::from_http(200, r#"{"url": "http://localhost:9157/f/42"}"#);
        assert_eq!(outcome, UploadOutcome::success("http://localhost:9157/f/42"));
    }

    #[rstest]
    #[case::ok_status(200)]
    #[case::client_error(403)]
    #[case::server_error(500)]
    fn error_payload_wins_over_any_status(#[case] status: u16) {
        let outcome = UploadOutcome::from_http(status, r#"{"error": "quota exceeded"}"#);
        assert_eq!(outcome, UploadOutcome::server_error("quota exceeded"));
    }

    #[test]
    fn failure_status_without_error_payload_is_generic_server_error() {
        let outcome = UploadOutcome::from_http(503, r#"{"detail": "try later"}"#);
        assert_eq!(outcome, UploadOutcome::server_error("server returned HTTP 503"));
    }

    #[test]
    fn ok_response_missing_url_is_a_protocol_violation() {
        let outcome = UploadOutcome::from_http(200, r#"{"id": 7}"#);
        assert_eq!(
            outcome,
            UploadOutcome::transport_error("response missing expected field \"url\"")
        );
    }

    #[rstest]
    #[case::html("<html>502 Bad Gateway</html>")]
    #[case::empty("")]
    #[case::truncated(r#"{"url": "#)]
    fn non_json_body_is_transport_error_not_a_panic(#[case] body: &str) {
        let outcome = UploadOutcome::from_http(200, body);
        assert!(matches!(outcome, UploadOutcome::TransportError { .. }));
    }

    #[test]
    fn outcome_serializes_as_tagged_json() {
        let s = serde_json::to_string(&UploadOutcome::success("http://x/1")).unwrap();
        let v: serde_json::Value = serde_json::from_str(&s).unwrap();
        assert_eq!(v["kind"], "success");
        assert_eq!(v["value"]["url"], "http://x/1");
    }
}
