//! Store-locator replies.

use serde::Deserialize;
use tracing::debug;

use crate::error::OrderError;
use crate::types::StoreId;

/// A store-locator reply: stores ordered nearest first.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreLocatorReply {
    #[serde(rename = "Stores", default)]
    pub stores: Vec<StoreEntry>,
}

/// One store in a locator reply.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreEntry {
    /// Numeric id, sent as text.
    #[serde(rename = "StoreID")]
    pub store_id: String,
    #[serde(rename = "ServiceMethodEstimatedWaitMinutes", default)]
    pub wait_minutes: WaitMinutes,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct WaitMinutes {
    #[serde(rename = "Delivery", default)]
    pub delivery: WaitRange,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct WaitRange {
    #[serde(rename = "Min", default)]
    pub min: u32,
}

/// The store an order goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreMatch {
    pub store_id: StoreId,
    /// Lower bound of the estimated delivery wait.
    pub delivery_minutes: u32,
}

impl StoreLocatorReply {
    /// Decode a reply from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Decode`] if the JSON has the wrong shape.
    pub fn from_json(json: &str) -> Result<Self, OrderError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The nearest store.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NoStores`] if the reply lists no store, or
    /// [`OrderError::Validation`] naming `StoreID` if its id is not numeric.
    pub fn nearest(&self) -> Result<StoreMatch, OrderError> {
        let store = self.stores.first().ok_or(OrderError::NoStores)?;
        let store_id: StoreId = store.store_id.parse()?;
        let delivery_minutes = store.wait_minutes.delivery.min;
        debug!(%store_id, delivery_minutes, candidates = self.stores.len(), "picked nearest store");
        Ok(StoreMatch {
            store_id,
            delivery_minutes,
        })
    }
}

/// Decode a store-locator reply and pick the nearest store.
///
/// # Errors
///
/// See [`StoreLocatorReply::from_json`] and [`StoreLocatorReply::nearest`].
pub fn pick_store(json: &str) -> Result<StoreMatch, OrderError> {
    StoreLocatorReply::from_json(json)?.nearest()
}
