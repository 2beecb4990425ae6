//! Error type shared by every stage of order assembly.

use thiserror::Error;

/// Errors produced while building, defaulting, or assembling an order.
///
/// Assembly never wraps these: the first failing step's error is returned
/// as-is and no document is produced.
#[derive(Debug, Error)]
pub enum OrderError {
    /// A required field is empty or an enumerated field holds an unknown value.
    #[error("invalid {field}: {reason}")]
    Validation {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable cause.
        reason: String,
    },

    /// A default policy entry cannot be applied to its field.
    ///
    /// This is a defect in a policy table, not something the caller can fix.
    #[error("cannot default {field}: {reason}")]
    Defaulting {
        /// Name of the field the policy targets.
        field: &'static str,
        /// Human-readable cause.
        reason: String,
    },

    /// The store locator returned no store for the address.
    #[error("no store delivers to this address")]
    NoStores,

    /// The ordering service rejected the document.
    #[error("order rejected: {}", reasons.join("; "))]
    Rejected {
        /// Rejection reasons reported by the service.
        reasons: Vec<String>,
    },

    /// A collaborator reply did not have the expected shape.
    #[error("JSON decoding failed: {0}")]
    Decode(#[from] serde_json::Error),
}

impl OrderError {
    /// Shorthand for a [`OrderError::Validation`] error.
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Shorthand for a [`OrderError::Defaulting`] error.
    pub fn defaulting(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Defaulting {
            field,
            reason: reason.into(),
        }
    }

    /// The field this error is about, if it names one.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } | Self::Defaulting { field, .. } => Some(field),
            Self::NoStores | Self::Rejected { .. } | Self::Decode(_) => None,
        }
    }
}
