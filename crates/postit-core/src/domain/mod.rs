//! Domain model for a single upload invocation.

pub mod attempt;
pub mod ids;
pub mod outcome;
pub mod request;
pub mod state;

pub use self::attempt::AttemptRecord;
pub use self::ids::AttemptId;
pub use self::outcome::UploadOutcome;
pub use self::request::UploadRequest;
pub use self::state::TaskPhase;
