//! Upload coordinator: drives one invocation end to end.

use std::sync::Arc;

use crate::config::UploadConfig;
use crate::domain::{AttemptId, AttemptRecord, UploadOutcome, UploadRequest};
use crate::error::PreconditionError;
use crate::ports::{Clock, DocumentSource, Notifier, Transport};

use super::task::spawn_upload;
use super::ticker::spawn_progress_ticker;

/// Status-line text shown whenever an upload does not go through.
pub const UPLOAD_FAILED_STATUS: &str = "PostIt could not upload your file";

/// Status-line text shown after a confirmed upload.
pub const UPLOAD_SENT_STATUS: &str = "Your file has been sent";

/// How one invocation ended. Both variants mean the user has already been
/// notified; callers only inspect this for exit codes and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// A precondition check failed; no network activity happened.
    PrecheckFailed(PreconditionError),

    /// The upload task ran to its terminal outcome.
    Finished(UploadOutcome),
}

/// Coordinates one upload: precondition checks, task + ticker lifecycle, and
/// exactly one final notification.
pub struct UploadCoordinator {
    config: UploadConfig,
    transport: Arc<dyn Transport>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
}

impl UploadCoordinator {
    pub fn new(
        config: UploadConfig,
        transport: Arc<dyn Transport>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            transport,
            notifier,
            clock,
        }
    }

    /// Run one invocation against the active document.
    ///
    /// Every path out of this function has produced exactly one user-visible
    /// notification, and each invocation is independent: running it again
    /// starts an unrelated task with its own terminal outcome.
    pub async fn run(&self, source: &dyn DocumentSource) -> CommandResult {
        let document = source.active_document();

        let Some(file_name) = document.file_name else {
            self.notifier
                .error_dialog("Please save this file before uploading");
            self.notifier.status_line(UPLOAD_FAILED_STATUS);
            return CommandResult::PrecheckFailed(PreconditionError::UnsavedDocument);
        };

        let api_key = self.config.api_key.clone().filter(|k| !k.is_empty());
        if self.config.require_api_key && api_key.is_none() {
            self.notifier
                .error_dialog("Please set an upload api key in your settings");
            self.notifier.status_line(UPLOAD_FAILED_STATUS);
            return CommandResult::PrecheckFailed(PreconditionError::MissingApiKey);
        }

        let attempt_id = AttemptId::generate_at(self.clock.now());
        let request = UploadRequest::new(file_name.clone(), document.contents, api_key);

        let started_at = self.clock.now();
        let handle = spawn_upload(
            Arc::clone(&self.transport),
            self.config.endpoint.clone(),
            request,
            self.config.request_timeout,
        );
        let ticker = spawn_progress_ticker(
            Arc::clone(&self.notifier),
            handle.subscribe(),
            self.config.poll_interval,
        );

        let outcome = handle.outcome().await;
        // ticker は Completed を観測して indicator を消してから終わる。
        // 最終通知の前にそれを待つ。
        let _ = ticker.await;

        let record = AttemptRecord::new(
            attempt_id,
            file_name,
            outcome.clone(),
            started_at,
            self.clock.now(),
        );
        tracing::debug!(
            attempt = %record.attempt_id,
            file = %record.file_name,
            outcome = ?record.outcome,
            "upload attempt finished"
        );

        match &outcome {
            UploadOutcome::Success { url } => {
                self.notifier
                    .message_dialog(&format!("File uploaded to {url}"));
                self.notifier.status_line(UPLOAD_SENT_STATUS);
            }
            UploadOutcome::ServerError { message } | UploadOutcome::TransportError { message } => {
                self.notifier.error_dialog(message);
                self.notifier.status_line(UPLOAD_FAILED_STATUS);
            }
        }

        CommandResult::Finished(outcome)
    }
}
