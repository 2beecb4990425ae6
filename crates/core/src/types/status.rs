//! Status values reported by the ordering service.

use serde::{Deserialize, Serialize};

/// Outcome of a validate, price, or place call.
///
/// The service encodes it as a bare integer: `0`, `1`, or `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ReplyStatus {
    /// The document was accepted as-is.
    Success,
    /// Accepted, with status items worth surfacing.
    Warning,
    /// Rejected; status items carry the reasons.
    Failure,
}

impl ReplyStatus {
    /// Whether the service accepted the document.
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        !matches!(self, Self::Failure)
    }
}

impl TryFrom<i64> for ReplyStatus {
    type Error = String;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Success),
            1 => Ok(Self::Warning),
            -1 => Ok(Self::Failure),
            _ => Err(format!("invalid reply status: {code}")),
        }
    }
}

impl From<ReplyStatus> for i64 {
    fn from(status: ReplyStatus) -> Self {
        match status {
            ReplyStatus::Success => 0,
            ReplyStatus::Warning => 1,
            ReplyStatus::Failure => -1,
        }
    }
}

impl std::fmt::Display for ReplyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Warning => write!(f, "warning"),
            Self::Failure => write!(f, "failure"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_codes() {
        assert_eq!(serde_json::from_str::<ReplyStatus>("0").unwrap(), ReplyStatus::Success);
        assert_eq!(serde_json::from_str::<ReplyStatus>("1").unwrap(), ReplyStatus::Warning);
        assert_eq!(serde_json::from_str::<ReplyStatus>("-1").unwrap(), ReplyStatus::Failure);
        assert!(serde_json::from_str::<ReplyStatus>("2").is_err());
    }

    #[test]
    fn test_accepted() {
        assert!(ReplyStatus::Warning.is_accepted());
        assert!(!ReplyStatus::Failure.is_accepted());
    }
}
