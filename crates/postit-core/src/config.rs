//! Upload configuration, injected into the coordinator.

use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:9157";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Configuration for one coordinator.
///
/// Passed in explicitly (no globals), so tests can point the coordinator at a
/// fake transport with a short timeout.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Base URL the upload is POSTed to.
    pub endpoint: String,

    /// Hard bound on the network call. A task never outlives this by more
    /// than a scheduling tick.
    pub request_timeout: Duration,

    /// Cadence of the progress ticker.
    pub poll_interval: Duration,

    /// Static upload credential, if configured.
    pub api_key: Option<String>,

    /// When true, a missing or empty `api_key` is a precondition failure and
    /// no network call is made. When false, the credential is silently
    /// omitted from the wire body.
    pub require_api_key: bool,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            api_key: None,
            require_api_key: false,
        }
    }
}

impl UploadConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn require_api_key(mut self) -> Self {
        self.require_api_key = true;
        self
    }
}
