//! Upload task: one POST, run off the caller's control flow.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::domain::{TaskPhase, UploadOutcome, UploadRequest};
use crate::ports::Transport;

/// Handle to one in-flight upload.
///
/// The phase channel transitions `Running -> Completed` exactly once, just
/// before the task finishes; observers (the progress ticker) subscribe to it
/// instead of polling the task for aliveness. The terminal outcome is
/// produced exactly once and consumed by [`UploadHandle::outcome`].
///
/// There is no cancellation: once spawned, the task runs to completion or to
/// its timeout.
pub struct UploadHandle {
    phase_rx: watch::Receiver<TaskPhase>,
    join: JoinHandle<UploadOutcome>,
}

impl UploadHandle {
    /// Current phase.
    pub fn phase(&self) -> TaskPhase {
        *self.phase_rx.borrow()
    }

    /// Subscribe to phase transitions.
    pub fn subscribe(&self) -> watch::Receiver<TaskPhase> {
        self.phase_rx.clone()
    }

    /// Wait for the terminal outcome.
    ///
    /// A join failure (the task panicked or was aborted) is folded into a
    /// `TransportError` so no fault escapes to the caller.
    pub async fn outcome(self) -> UploadOutcome {
        match self.join.await {
            Ok(outcome) => outcome,
            Err(e) => UploadOutcome::transport_error(format!("upload task failed: {e}")),
        }
    }
}

/// Spawn one upload against `endpoint`, bounded by `timeout`.
///
/// Returns immediately; the POST runs on the runtime in parallel with the
/// caller.
pub fn spawn_upload(
    transport: Arc<dyn Transport>,
    endpoint: String,
    request: UploadRequest,
    timeout: Duration,
) -> UploadHandle {
    let (phase_tx, phase_rx) = watch::channel(TaskPhase::Running);

    let join = tokio::spawn(async move {
        let outcome = run_upload(transport.as_ref(), &endpoint, &request, timeout).await;
        // 受信側が全員 drop していても完了通知の失敗は問題にならない
        let _ = phase_tx.send(TaskPhase::Completed);
        outcome
    });

    UploadHandle { phase_rx, join }
}

/// Perform the POST and classify the result.
///
/// The transport is asked to honor `timeout` itself, but the call is wrapped
/// in an outer `tokio::time::timeout` as well so a misbehaving transport can
/// never leave the task running indefinitely.
async fn run_upload(
    transport: &dyn Transport,
    endpoint: &str,
    request: &UploadRequest,
    timeout: Duration,
) -> UploadOutcome {
    let fields = request.form_fields();
    match tokio::time::timeout(timeout, transport.post_form(endpoint, &fields, timeout)).await {
        Ok(Ok(response)) => UploadOutcome::from_http(response.status, &response.body),
        Ok(Err(failure)) => UploadOutcome::transport_error(failure.to_string()),
        Err(_elapsed) => UploadOutcome::transport_error("connection timed out"),
    }
}
