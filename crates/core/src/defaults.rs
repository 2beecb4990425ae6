//! Policy-driven defaulting of zero-valued fields.
//!
//! A [`DefaultPolicy`] is a static table pairing wire field names with the
//! default declared for them. A record implementing [`Defaults`] hands out a
//! typed [`FieldSlot`] for each field it owns, and [`fill`] writes the
//! declared default into every slot that still holds its zero value
//! (`""`, `0` or `false`). Fields the caller already set are never touched,
//! so filling the same record twice changes nothing the second time.
//!
//! ```
//! use pie_order_core::defaults::{self, DefaultPolicy, Defaults, FieldDefault, FieldSlot};
//!
//! #[derive(Default)]
//! struct Crust {
//!     style: String,
//!     slices: i64,
//! }
//!
//! impl Defaults for Crust {
//!     fn slot(&mut self, field: &str) -> Option<FieldSlot<'_>> {
//!         match field {
//!             "Style" => Some(FieldSlot::Text(&mut self.style)),
//!             "Slices" => Some(FieldSlot::Integer(&mut self.slices)),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! static CRUST: DefaultPolicy = DefaultPolicy {
//!     name: "crust",
//!     fields: &[
//!         FieldDefault::value("Style", "HANDTOSS"),
//!         FieldDefault::value("Slices", "8"),
//!     ],
//! };
//!
//! let mut crust = Crust { slices: 6, ..Crust::default() };
//! defaults::fill(&mut crust, &CRUST).unwrap();
//! assert_eq!(crust.style, "HANDTOSS");
//! assert_eq!(crust.slices, 6);
//! ```

use tracing::trace;

use crate::error::OrderError;

/// The default declared for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declared {
    /// Text to parse into the field's type when the field is zero-valued.
    Value(&'static str),
    /// The field is listed but intentionally never defaulted.
    Unset,
}

/// One row of a [`DefaultPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefault {
    /// Wire name of the field.
    pub field: &'static str,
    /// What to write when the field is zero-valued.
    pub declared: Declared,
}

impl FieldDefault {
    /// A field defaulted to `value`.
    #[must_use]
    pub const fn value(field: &'static str, value: &'static str) -> Self {
        Self {
            field,
            declared: Declared::Value(value),
        }
    }

    /// A field with no default.
    #[must_use]
    pub const fn unset(field: &'static str) -> Self {
        Self {
            field,
            declared: Declared::Unset,
        }
    }
}

/// A named table of field defaults for one record type.
#[derive(Debug)]
pub struct DefaultPolicy {
    /// Policy name, used in logs and error messages.
    pub name: &'static str,
    /// The policy rows, in declaration order.
    pub fields: &'static [FieldDefault],
}

/// Mutable access to one field, tagged with its underlying type.
#[derive(Debug)]
pub enum FieldSlot<'a> {
    /// A text field; zero value is `""`.
    Text(&'a mut String),
    /// An integer field; zero value is `0`.
    Integer(&'a mut i64),
    /// A boolean flag; zero value is `false`.
    Flag(&'a mut bool),
}

/// A record whose fields can be defaulted by name.
pub trait Defaults {
    /// Writable slot for `field`, or `None` if the record has no such field.
    fn slot(&mut self, field: &str) -> Option<FieldSlot<'_>>;
}

/// Fill every zero-valued field of `record` from `policy`.
///
/// # Errors
///
/// Returns [`OrderError::Defaulting`] naming the field if the record exposes
/// no slot for a policy row, or if a declared default does not parse into
/// the slot's type. Both indicate a broken policy table.
pub fn fill<T: Defaults>(record: &mut T, policy: &DefaultPolicy) -> Result<(), OrderError> {
    for row in policy.fields {
        let Declared::Value(text) = row.declared else {
            continue;
        };

        let slot = record.slot(row.field).ok_or_else(|| {
            OrderError::defaulting(
                row.field,
                format!("policy `{}` targets a field the record cannot write", policy.name),
            )
        })?;

        if apply(slot, row.field, text)? {
            trace!(policy = policy.name, field = row.field, value = text, "filled default");
        }
    }

    Ok(())
}

/// Write `text` into `slot` if it is zero-valued. Returns whether it wrote.
///
/// The default is parsed before the zero check so a bad table is reported
/// even when the caller supplied every field.
fn apply(slot: FieldSlot<'_>, field: &'static str, text: &'static str) -> Result<bool, OrderError> {
    match slot {
        FieldSlot::Text(value) => {
            if value.is_empty() && !text.is_empty() {
                *value = text.to_owned();
                return Ok(true);
            }
            Ok(false)
        }
        FieldSlot::Integer(value) => {
            let parsed: i64 = text.parse().map_err(|e| {
                OrderError::defaulting(field, format!("{text:?} is not an integer: {e}"))
            })?;
            if *value == 0 && parsed != 0 {
                *value = parsed;
                return Ok(true);
            }
            Ok(false)
        }
        FieldSlot::Flag(value) => {
            let parsed: bool = text.parse().map_err(|e| {
                OrderError::defaulting(field, format!("{text:?} is not a boolean: {e}"))
            })?;
            if !*value && parsed {
                *value = parsed;
                return Ok(true);
            }
            Ok(false)
        }
    }
}
