//! DocumentSource port - the host editor, behind a trait.
//!
//! The editor integration (buffer access, settings storage) is an external
//! collaborator; the coordinator only needs a snapshot of the active document.

/// Snapshot of the active document at invocation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDocument {
    /// Saved file path, `None` when the buffer has never been saved.
    pub file_name: Option<String>,

    /// Full buffer text.
    pub contents: String,
}

/// Supplies the active document for one invocation.
pub trait DocumentSource: Send + Sync {
    fn active_document(&self) -> ActiveDocument;
}
