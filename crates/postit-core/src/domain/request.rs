//! Upload request: the payload for one POST.

/// Everything one upload needs: the resolved file path, the full buffer text,
/// and an optional credential. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    /// Resolved path of the file being uploaded. Callers validate non-empty
    /// before construction (the unsaved-document case never reaches here).
    pub file_name: String,

    /// Raw buffer contents. May be empty.
    pub contents: String,

    /// Static upload credential, omitted from the wire when absent.
    pub api_key: Option<String>,
}

impl UploadRequest {
    pub fn new(
        file_name: impl Into<String>,
        contents: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            contents: contents.into(),
            api_key,
        }
    }

    /// Wire body as form field pairs.
    ///
    /// `api_key` is omitted entirely (not sent empty) when no credential is
    /// configured, so the credential-less variant produces a two-field body.
    pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![
            ("filename", self.file_name.as_str()),
            ("contents", self.contents.as_str()),
        ];
        if let Some(key) = &self.api_key {
            fields.push(("api_key", key.as_str()));
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_fields_without_credential() {
        let req = UploadRequest::new("/tmp/notes.txt", "hello", None);
        assert_eq!(
            req.form_fields(),
            vec![("filename", "/tmp/notes.txt"), ("contents", "hello")]
        );
    }

    #[test]
    fn form_fields_with_credential() {
        let req = UploadRequest::new("/tmp/notes.txt", "", Some("secret".to_string()));
        assert_eq!(
            req.form_fields(),
            vec![
                ("filename", "/tmp/notes.txt"),
                ("contents", ""),
                ("api_key", "secret"),
            ]
        );
    }
}
