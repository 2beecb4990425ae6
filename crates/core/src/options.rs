//! Topping customizations and their two-axis wire encoding.
//!
//! The ordering API describes a topping as a single-entry map from the
//! portion of the pie it covers to how much of it to use:
//!
//! | Placement    | Key     |   | Intensity | Magnitude |
//! |--------------|---------|---|-----------|-----------|
//! | `whole`      | `"1/1"` |   | `light`   | `"0.5"`   |
//! | `left-half`  | `"1/2"` |   | `normal`  | `"1"`     |
//! | `right-half` | `"2/2"` |   | `extra`   | `"1.5"`   |
//!
//! Raw text is parsed into [`Placement`] and [`Intensity`] when a
//! [`CustomizationRequest`] is built, so [`encode`] itself cannot fail.

use core::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::OrderError;

/// Which portion of the item a topping covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Placement {
    /// The whole pie, key `"1/1"`.
    #[default]
    Whole,
    /// Left half only, key `"1/2"`.
    LeftHalf,
    /// Right half only, key `"2/2"`.
    RightHalf,
}

impl Placement {
    /// All placements, in wire-key order.
    pub const ALL: [Self; 3] = [Self::Whole, Self::LeftHalf, Self::RightHalf];

    /// The portion key used on the wire.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Whole => "1/1",
            Self::LeftHalf => "1/2",
            Self::RightHalf => "2/2",
        }
    }

    /// Inverse of [`Placement::key`].
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Whole => "whole",
            Self::LeftHalf => "left-half",
            Self::RightHalf => "right-half",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Placement {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| {
                OrderError::validation(
                    "placement",
                    format!("{s:?} is not one of whole, left-half, right-half"),
                )
            })
    }
}

/// How much of a topping to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Intensity {
    /// Half the usual amount, magnitude `"0.5"`.
    Light,
    /// The usual amount, magnitude `"1"`.
    #[default]
    Normal,
    /// One and a half times the usual amount, magnitude `"1.5"`.
    Extra,
}

impl Intensity {
    /// All intensities, lightest first.
    pub const ALL: [Self; 3] = [Self::Light, Self::Normal, Self::Extra];

    /// The multiplier string used on the wire.
    #[must_use]
    pub const fn magnitude(self) -> &'static str {
        match self {
            Self::Light => "0.5",
            Self::Normal => "1",
            Self::Extra => "1.5",
        }
    }

    /// Inverse of [`Intensity::magnitude`].
    #[must_use]
    pub fn from_magnitude(magnitude: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.magnitude() == magnitude)
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Normal => "normal",
            Self::Extra => "extra",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Intensity {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|i| i.name() == s)
            .ok_or_else(|| {
                OrderError::validation(
                    "intensity",
                    format!("{s:?} is not one of light, normal, extra"),
                )
            })
    }
}

/// Known topping display names and their API codes.
const INGREDIENTS: &[(&str, &str)] = &[
    ("Cheese", "C"),
    ("PizzaSauce", "X"),
    ("BBQSauce", "Q"),
    ("AlfredoSauce", "Xf"),
    ("HeartyMarinaraSauce", "Xm"),
    ("RanchDressing", "Rd"),
    ("GarlicParmesanSauce", "Xw"),
    ("Bacon", "K"),
    ("BeefCrumble", "B"),
    ("BrooklynPepperoni", "Xp"),
    ("Chicken", "D"),
    ("Ham", "H"),
    ("Pepperoni", "P"),
    ("PhillySteak", "St"),
    ("Salami", "L"),
    ("Sausage", "S"),
    ("BabySpinach", "Sp"),
    ("BlackOlives", "R"),
    ("Cheddar", "E"),
    ("Feta", "Fe"),
    ("GreenOlives", "V"),
    ("GreenPepper", "G"),
    ("HotBananaPeppers", "Z"),
    ("JalapenoPeppers", "J"),
    ("Mushroom", "M"),
    ("Onion", "O"),
    ("ParmesanAsiago", "Pa"),
    ("Pineapple", "N"),
    ("Provolone", "Cp"),
    ("RoastedRedPeppers", "Rp"),
    ("Tomatoes", "T"),
];

/// Map a topping display name to its code. Unknown input is returned as-is.
///
/// Codes are not checked against any catalog; the ordering service rejects
/// ones it does not know.
#[must_use]
pub fn ingredient_code(name_or_code: &str) -> &str {
    INGREDIENTS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(name_or_code))
        .map_or(name_or_code, |&(_, code)| code)
}

/// One requested topping customization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomizationRequest {
    /// Topping code the customization applies to (e.g. `"Sp"`).
    pub ingredient: String,
    /// Portion of the item; `None` means the whole item.
    pub placement: Option<Placement>,
    /// Amount; `None` means normal.
    pub intensity: Option<Intensity>,
}

impl CustomizationRequest {
    /// A whole-item, normal-intensity customization.
    #[must_use]
    pub fn new(ingredient: impl Into<String>) -> Self {
        Self {
            ingredient: ingredient.into(),
            placement: None,
            intensity: None,
        }
    }

    /// Set the placement.
    #[must_use]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }

    /// Set the intensity.
    #[must_use]
    pub fn intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = Some(intensity);
        self
    }

    /// Build a request from loosely typed text.
    ///
    /// Display names such as `"BabySpinach"` are normalised to their code.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Validation`] naming `ingredient`, `placement`,
    /// or `intensity` when a value is empty or unrecognised.
    pub fn parse(
        ingredient: &str,
        placement: Option<&str>,
        intensity: Option<&str>,
    ) -> Result<Self, OrderError> {
        let ingredient = ingredient.trim();
        if ingredient.is_empty() {
            return Err(OrderError::validation("ingredient", "must not be empty"));
        }

        Ok(Self {
            ingredient: ingredient_code(ingredient).to_owned(),
            placement: placement.map(str::parse).transpose()?,
            intensity: intensity.map(str::parse).transpose()?,
        })
    }
}

/// A loosely typed customization as it appears in order files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawCustomization {
    pub ingredient: String,
    #[serde(default)]
    pub placement: Option<String>,
    #[serde(default)]
    pub intensity: Option<String>,
}

impl TryFrom<&RawCustomization> for CustomizationRequest {
    type Error = OrderError;

    fn try_from(raw: &RawCustomization) -> Result<Self, Self::Error> {
        Self::parse(
            &raw.ingredient,
            raw.placement.as_deref(),
            raw.intensity.as_deref(),
        )
    }
}

/// A topping encoded for the wire: exactly one placement key set to one
/// magnitude, e.g. `{"1/2": "0.5"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodedOption {
    placement: Placement,
    intensity: Intensity,
}

impl EncodedOption {
    /// The populated placement.
    #[must_use]
    pub const fn placement(&self) -> Placement {
        self.placement
    }

    /// The magnitude stored under the placement key.
    #[must_use]
    pub const fn intensity(&self) -> Intensity {
        self.intensity
    }

    /// Magnitude stored under `key`, or `None` for the two unpopulated keys.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'static str> {
        (self.placement.key() == key).then(|| self.intensity.magnitude())
    }
}

impl Serialize for EncodedOption {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.placement.key(), self.intensity.magnitude())?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for EncodedOption {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(EncodedOptionVisitor)
    }
}

/// Reads the map entry by entry so a repeated key is reported, not merged.
struct EncodedOptionVisitor;

impl<'de> Visitor<'de> for EncodedOptionVisitor {
    type Value = EncodedOption;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map with exactly one placement key")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let Some((key, magnitude)) = map.next_entry::<String, String>()? else {
            return Err(de::Error::custom("expected exactly one placement key, found none"));
        };
        if let Some(extra) = map.next_key::<String>()? {
            return Err(de::Error::custom(if extra == key {
                format!("duplicate placement key {key:?}")
            } else {
                format!("expected exactly one placement key, found {key:?} and {extra:?}")
            }));
        }

        let placement = Placement::from_key(&key)
            .ok_or_else(|| de::Error::custom(format!("unknown placement key {key:?}")))?;
        let intensity = Intensity::from_magnitude(&magnitude)
            .ok_or_else(|| de::Error::custom(format!("unknown magnitude {magnitude:?}")))?;

        Ok(EncodedOption {
            placement,
            intensity,
        })
    }
}

/// Encode one customization, resolving absent placement to whole and
/// absent intensity to normal.
#[must_use]
pub fn encode(request: &CustomizationRequest) -> EncodedOption {
    EncodedOption {
        placement: request.placement.unwrap_or_default(),
        intensity: request.intensity.unwrap_or_default(),
    }
}
