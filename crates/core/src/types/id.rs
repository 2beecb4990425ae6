//! Store identifier.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OrderError;

/// Identifier of the store an order is placed with.
///
/// Store locator replies carry it as decimal text (`"StoreID": "4336"`) and
/// the order document echoes it back as text, so [`Display`](fmt::Display)
/// and [`FromStr`] are the wire forms.
///
/// ```
/// use pie_order_core::StoreId;
///
/// let id: StoreId = "4336".parse().unwrap();
/// assert_eq!(id.as_i64(), 4336);
/// assert_eq!(id.to_string(), "4336");
/// assert!("store-1".parse::<StoreId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreId(i64);

impl StoreId {
    /// Create a store ID from its numeric value.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying numeric value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StoreId {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|e| OrderError::validation("StoreID", format!("{s:?} is not numeric: {e}")))
    }
}

impl From<i64> for StoreId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<StoreId> for i64 {
    fn from(id: StoreId) -> Self {
        id.0
    }
}
