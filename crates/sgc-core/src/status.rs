//! Verification status shared by accounts (SMTP connectivity) and jobs
//! (extraction pattern), encoded on the wire as a small integer.

use serde::{Deserialize, Serialize};

/// Outcome of the most recent connectivity / pattern check.
///
/// Transitions: `{Untested|Verified|Failed} -> Testing` only through an
/// explicit test action, and `Testing -> {Verified|Failed}` once the request
/// settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum CheckStatus {
    #[default]
    Untested,
    Verified,
    Failed,
    Testing,
}

/// Connectivity status of a notification account
pub type AccountStatus = CheckStatus;

/// Test status of a job's extraction pattern
pub type PatternStatus = CheckStatus;

impl CheckStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CheckStatus::Untested => "Untested",
            CheckStatus::Verified => "Available",
            CheckStatus::Failed => "Unavailable",
            CheckStatus::Testing => "Testing",
        }
    }

    pub fn is_testing(&self) -> bool {
        matches!(self, CheckStatus::Testing)
    }

    /// Status after a test request settles
    pub fn settled(success: bool) -> Self {
        if success {
            CheckStatus::Verified
        } else {
            CheckStatus::Failed
        }
    }
}

impl From<i64> for CheckStatus {
    fn from(value: i64) -> Self {
        match value {
            1 => CheckStatus::Verified,
            2 => CheckStatus::Failed,
            3 => CheckStatus::Testing,
            _ => CheckStatus::Untested,
        }
    }
}

impl From<CheckStatus> for i64 {
    fn from(status: CheckStatus) -> Self {
        match status {
            CheckStatus::Untested => 0,
            CheckStatus::Verified => 1,
            CheckStatus::Failed => 2,
            CheckStatus::Testing => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_values() {
        assert_eq!(serde_json::to_string(&CheckStatus::Verified).unwrap(), "1");
        assert_eq!(
            serde_json::from_str::<CheckStatus>("3").unwrap(),
            CheckStatus::Testing
        );
    }

    #[test]
    fn test_unknown_status_decodes_as_untested() {
        assert_eq!(
            serde_json::from_str::<CheckStatus>("42").unwrap(),
            CheckStatus::Untested
        );
        assert_eq!(
            serde_json::from_str::<CheckStatus>("-1").unwrap(),
            CheckStatus::Untested
        );
    }

    #[test]
    fn test_settled_never_testing() {
        assert_eq!(CheckStatus::settled(true), CheckStatus::Verified);
        assert_eq!(CheckStatus::settled(false), CheckStatus::Failed);
        assert!(!CheckStatus::settled(true).is_testing());
        assert!(!CheckStatus::settled(false).is_testing());
    }
}
