//! Task phase: the externally observable lifecycle of one upload task.

/// Phase of an upload task as seen from outside.
///
/// Transitions `Running -> Completed` exactly once and never reverses. Only
/// the task itself writes the phase; the coordinator and the progress ticker
/// observe it through a watch channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskPhase {
    Running,
    Completed,
}

impl TaskPhase {
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}
