//! Attempt record: what one invocation did and how it ended.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::AttemptId;
use super::outcome::UploadOutcome;

/// A record of a single upload attempt, emitted to the diagnostic log once
/// the task reaches its terminal outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub attempt_id: AttemptId,

    /// The file the attempt uploaded (contents are not recorded).
    pub file_name: String,

    /// The terminal result.
    pub outcome: UploadOutcome,

    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl AttemptRecord {
    pub fn new(
        attempt_id: AttemptId,
        file_name: impl Into<String>,
        outcome: UploadOutcome,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            attempt_id,
            file_name: file_name.into(),
            outcome,
            started_at,
            completed_at,
        }
    }
}
