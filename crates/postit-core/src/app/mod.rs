//! Application logic: one upload task, its progress ticker, and the
//! coordinator that wires them to the editor-facing ports.

pub mod coordinator;
pub mod task;
pub mod ticker;

pub use self::coordinator::{CommandResult, UploadCoordinator};
pub use self::task::{UploadHandle, spawn_upload};
pub use self::ticker::{progress_frame, spawn_progress_ticker};
