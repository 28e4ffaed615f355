//! postit - upload one file to the local PostIt endpoint.
//!
//! Usage: `postit <file>`. The endpoint defaults to `http://localhost:9157`
//! (override with `POSTIT_ENDPOINT`); an optional credential is taken from
//! `POSTIT_API_KEY`. Invoking with no argument exercises the same
//! "save before uploading" precondition an unsaved editor buffer would.

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use postit_core::app::{CommandResult, UploadCoordinator};
use postit_core::config::UploadConfig;
use postit_core::domain::UploadOutcome;
use postit_core::impls::HttpTransport;
use postit_core::ports::{ActiveDocument, DocumentSource, Notifier, SystemClock};

/// Document source backed by a file read at startup. `None` contents means
/// the path argument was missing, mirroring an unsaved buffer.
struct FileDocument {
    file_name: Option<String>,
    contents: String,
}

impl FileDocument {
    fn from_args() -> Result<Self, String> {
        let Some(path) = std::env::args().nth(1) else {
            return Ok(Self {
                file_name: None,
                contents: String::new(),
            });
        };
        let contents =
            std::fs::read_to_string(&path).map_err(|e| format!("cannot read {path}: {e}"))?;
        Ok(Self {
            file_name: Some(path),
            contents,
        })
    }
}

impl DocumentSource for FileDocument {
    fn active_document(&self) -> ActiveDocument {
        ActiveDocument {
            file_name: self.file_name.clone(),
            contents: self.contents.clone(),
        }
    }
}

/// Terminal rendering of the editor's dialogs and status line.
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn error_dialog(&self, message: &str) {
        eprintln!("error: {message}");
    }

    fn message_dialog(&self, message: &str) {
        println!("{message}");
    }

    fn status_line(&self, message: &str) {
        eprintln!("[postit] {message}");
    }

    fn set_progress(&self, message: &str) {
        eprintln!("[postit] {message}");
    }

    fn clear_progress(&self) {}
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let document = match FileDocument::from_args() {
        Ok(document) => document,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };

    let mut config = UploadConfig::default();
    if let Ok(endpoint) = std::env::var("POSTIT_ENDPOINT") {
        config = config.with_endpoint(endpoint);
    }
    if let Ok(api_key) = std::env::var("POSTIT_API_KEY") {
        config = config.with_api_key(api_key);
    }

    let coordinator = UploadCoordinator::new(
        config,
        Arc::new(HttpTransport::new()),
        Arc::new(TerminalNotifier),
        Arc::new(SystemClock),
    );

    match coordinator.run(&document).await {
        CommandResult::Finished(UploadOutcome::Success { .. }) => ExitCode::SUCCESS,
        CommandResult::Finished(_) | CommandResult::PrecheckFailed(_) => ExitCode::FAILURE,
    }
}
