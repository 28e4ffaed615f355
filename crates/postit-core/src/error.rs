use thiserror::Error;

/// Failures caught before any network activity begins.
///
/// Transport and server failures are not Rust errors: they are recorded as
/// `UploadOutcome` variants and rendered by the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("document has no saved file path")]
    UnsavedDocument,

    #[error("upload api key is required but not configured")]
    MissingApiKey,
}
