//! Replies from the validate, price, and place calls.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::OrderError;
use crate::types::ReplyStatus;

/// One status item attached to a reply.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusItem {
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Message", default)]
    pub message: Option<String>,
}

impl StatusItem {
    /// The message if present, otherwise the code.
    #[must_use]
    pub fn reason(&self) -> &str {
        self.message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(&self.code)
    }
}

/// A classified service reply.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceReply {
    #[serde(rename = "Status")]
    pub status: ReplyStatus,
    #[serde(rename = "StatusItems", default)]
    pub status_items: Vec<StatusItem>,
}

impl ServiceReply {
    /// Decode a reply from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Decode`] if the JSON has the wrong shape or the
    /// status is not `0`, `1` or `-1`.
    pub fn from_json(json: &str) -> Result<Self, OrderError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Status item reasons, in reply order.
    #[must_use]
    pub fn reasons(&self) -> Vec<String> {
        self.status_items.iter().map(|item| item.reason().to_owned()).collect()
    }

    /// Return the reply's status unless the service rejected the document.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Rejected`] carrying every status item reason
    /// when the status is failure.
    pub fn ensure_accepted(&self) -> Result<ReplyStatus, OrderError> {
        match self.status {
            ReplyStatus::Failure => Err(OrderError::Rejected {
                reasons: self.reasons(),
            }),
            ReplyStatus::Warning => {
                warn!(reasons = ?self.reasons(), "accepted with warnings");
                Ok(self.status)
            }
            ReplyStatus::Success => {
                debug!("accepted");
                Ok(self.status)
            }
        }
    }
}
