//! Domain identifiers (strongly-typed IDs).
//!
//! Each upload invocation gets an `AttemptId` so log lines from overlapping
//! invocations can be told apart. IDs are ULID-based:
//! - 時刻でソート可能（timestamp が先頭にあるため）
//! - 調整なしで複数タスクから生成できる

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Identifier for one upload attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct AttemptId(Ulid);

impl AttemptId {
    /// Create an AttemptId from an existing ULID.
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    /// Generate a fresh AttemptId whose timestamp component comes from `now`.
    ///
    /// Taking the time as an argument (instead of reading the system clock
    /// here) keeps generation deterministic under a fixed test clock.
    pub fn generate_at(now: DateTime<Utc>) -> Self {
        let timestamp_ms = now.timestamp_millis().max(0) as u64;
        Self(Ulid::from_parts(timestamp_ms, rand::random()))
    }

    /// Access the underlying ULID.
    pub fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl fmt::Display for AttemptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "upload-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn generated_ids_are_unique() {
        let now = Utc::now();
        let a = AttemptId::generate_at(now);
        let b = AttemptId::generate_at(now);
        assert_ne!(a, b);
    }

    #[test]
    fn timestamp_component_comes_from_the_given_time() {
        let fixed = Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap();
        let id = AttemptId::generate_at(fixed);
        assert_eq!(id.as_ulid().timestamp_ms(), fixed.timestamp_millis() as u64);
    }

    #[test]
    fn display_uses_upload_prefix() {
        let id = AttemptId::generate_at(Utc::now());
        assert!(id.to_string().starts_with("upload-"));
    }
}
