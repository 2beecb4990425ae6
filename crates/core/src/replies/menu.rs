//! Catalog replies and name search.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::OrderError;
use crate::types::{CurrencyCode, Price};

/// One orderable catalog variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    /// Catalog code, the value an order line's `Code` carries.
    pub code: String,
    /// Human-readable name. Not usable for ordering.
    pub name: String,
    pub price: Price,
}

#[derive(Debug, Deserialize)]
struct MenuReply {
    #[serde(rename = "Variants", default)]
    variants: BTreeMap<String, Variant>,
}

#[derive(Debug, Deserialize)]
struct Variant {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Price", default)]
    price: Option<String>,
}

/// Decode every priced variant in a catalog reply, sorted by code.
///
/// Variants whose price is missing or not a decimal number are skipped.
///
/// # Errors
///
/// Returns [`OrderError::Decode`] if the JSON has the wrong shape.
pub fn parse_menu(json: &str) -> Result<Vec<MenuItem>, OrderError> {
    let reply: MenuReply = serde_json::from_str(json)?;
    let total = reply.variants.len();

    let items: Vec<MenuItem> = reply
        .variants
        .into_iter()
        .filter_map(|(code, variant)| {
            let price = Price::parse(variant.price.as_deref()?, CurrencyCode::USD)?;
            Some(MenuItem {
                code,
                name: variant.name,
                price,
            })
        })
        .collect();

    debug!(total, priced = items.len(), "decoded menu");
    Ok(items)
}

/// Items whose name contains every query, ignoring case.
///
/// An empty query list matches everything.
#[must_use]
pub fn search<'a>(items: &'a [MenuItem], queries: &[impl AsRef<str>]) -> Vec<&'a MenuItem> {
    let queries: Vec<String> = queries.iter().map(|q| q.as_ref().to_lowercase()).collect();
    items
        .iter()
        .filter(|item| {
            let name = item.name.to_lowercase();
            queries.iter().all(|q| name.contains(q.as_str()))
        })
        .collect()
}
