//! Order lines and the builder that produces them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::defaults::{self, DefaultPolicy, Defaults, FieldDefault, FieldSlot};
use crate::error::OrderError;
use crate::options::{self, CustomizationRequest, EncodedOption, RawCustomization};

/// Defaults for every order line. `isNew` and `ShowBestPriceMessage` are
/// fixed protocol flags.
pub static ORDER_LINE_DEFAULTS: DefaultPolicy = DefaultPolicy {
    name: "order_line",
    fields: &[
        FieldDefault::value("Qty", "1"),
        FieldDefault::unset("ID"),
        FieldDefault::value("isNew", "true"),
        FieldDefault::value("ShowBestPriceMessage", "false"),
    ],
};

/// One purchasable item in an order.
///
/// Lines are only produced by [`build`] (or by decoding a document) and are
/// never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(rename = "Code")]
    code: String,
    #[serde(rename = "Qty")]
    qty: i64,
    #[serde(rename = "ID")]
    id: i64,
    #[serde(rename = "isNew")]
    is_new: bool,
    #[serde(rename = "ShowBestPriceMessage")]
    show_best_price_message: bool,
    #[serde(rename = "Options")]
    options: BTreeMap<String, EncodedOption>,
}

impl OrderLine {
    /// Catalog code (size followed by variant).
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Quantity ordered, at least 1.
    #[must_use]
    pub const fn qty(&self) -> i64 {
        self.qty
    }

    /// Whether the line is flagged as a new item.
    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.is_new
    }

    /// Encoded toppings keyed by ingredient code.
    #[must_use]
    pub const fn options(&self) -> &BTreeMap<String, EncodedOption> {
        &self.options
    }
}

impl Defaults for OrderLine {
    fn slot(&mut self, field: &str) -> Option<FieldSlot<'_>> {
        match field {
            "Code" => Some(FieldSlot::Text(&mut self.code)),
            "Qty" => Some(FieldSlot::Integer(&mut self.qty)),
            "ID" => Some(FieldSlot::Integer(&mut self.id)),
            "isNew" => Some(FieldSlot::Flag(&mut self.is_new)),
            "ShowBestPriceMessage" => Some(FieldSlot::Flag(&mut self.show_best_price_message)),
            _ => None,
        }
    }
}

/// Everything needed to build one [`OrderLine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRequest {
    /// Size selector, e.g. `"14"`.
    pub size: String,
    /// Crust or preparation selector, e.g. `"SCREEN"`.
    pub variant: String,
    /// Quantity; `None` means 1.
    pub quantity: Option<i64>,
    /// Toppings, applied in order.
    pub customizations: Vec<CustomizationRequest>,
}

impl ItemRequest {
    /// A single item with no toppings.
    #[must_use]
    pub fn new(size: impl Into<String>, variant: impl Into<String>) -> Self {
        Self {
            size: size.into(),
            variant: variant.into(),
            quantity: None,
            customizations: Vec::new(),
        }
    }

    /// Set an explicit quantity.
    #[must_use]
    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Add a topping.
    #[must_use]
    pub fn customize(mut self, customization: CustomizationRequest) -> Self {
        self.customizations.push(customization);
        self
    }
}

/// An item as it appears in order files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawItem {
    pub size: String,
    pub variant: String,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub options: Vec<RawCustomization>,
}

impl TryFrom<&RawItem> for ItemRequest {
    type Error = OrderError;

    fn try_from(raw: &RawItem) -> Result<Self, Self::Error> {
        Ok(Self {
            size: raw.size.clone(),
            variant: raw.variant.clone(),
            quantity: raw.quantity,
            customizations: raw
                .options
                .iter()
                .map(CustomizationRequest::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

/// Build one order line.
///
/// The size/variant pair is not checked against the store's catalog; the
/// ordering service rejects unknown codes during validation. A topping that
/// appears twice keeps its last setting.
///
/// # Errors
///
/// Returns [`OrderError::Validation`] naming `size` or `variant` when either
/// is blank, or `quantity` when an explicit quantity is below 1.
#[instrument(level = "debug", skip(request), fields(size = %request.size, variant = %request.variant))]
pub fn build(request: &ItemRequest) -> Result<OrderLine, OrderError> {
    let size = request.size.trim();
    if size.is_empty() {
        return Err(OrderError::validation("size", "must not be empty"));
    }
    let variant = request.variant.trim();
    if variant.is_empty() {
        return Err(OrderError::validation("variant", "must not be empty"));
    }

    let qty = match request.quantity {
        Some(qty) if qty < 1 => {
            return Err(OrderError::validation(
                "quantity",
                format!("must be at least 1, got {qty}"),
            ));
        }
        Some(qty) => qty,
        None => 0,
    };

    let mut options = BTreeMap::new();
    for customization in &request.customizations {
        let encoded = options::encode(customization);
        if options
            .insert(customization.ingredient.clone(), encoded)
            .is_some()
        {
            debug!(ingredient = %customization.ingredient, "topping repeated, keeping the later one");
        }
    }

    let mut line = OrderLine {
        code: format!("{size}{variant}"),
        qty,
        id: 0,
        is_new: false,
        show_best_price_message: false,
        options,
    };
    defaults::fill(&mut line, &ORDER_LINE_DEFAULTS)?;

    debug!(code = %line.code, qty = line.qty, toppings = line.options.len(), "built order line");
    Ok(line)
}
