//! Notifier port - user-visible output, behind a trait.

/// The five user-visible outputs of one invocation.
///
/// Dialogs are modal one-shot notifications; the status line is a transient
/// one-line message; progress is the animated "Working ..." indicator that the
/// ticker drives while the upload runs.
pub trait Notifier: Send + Sync {
    /// Modal error dialog.
    fn error_dialog(&self, message: &str);

    /// Modal confirmation dialog.
    fn message_dialog(&self, message: &str);

    /// One-line transient status message.
    fn status_line(&self, message: &str);

    /// Replace the animated progress indicator text.
    fn set_progress(&self, message: &str);

    /// Remove the progress indicator. Called exactly once per invocation that
    /// started a task.
    fn clear_progress(&self);
}
