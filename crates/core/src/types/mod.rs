//! Core types for Pie Order.
//!
//! Type-safe wrappers for values that cross the ordering service boundary.

pub mod email;
pub mod id;
pub mod price;
pub mod status;

pub use email::{Email, EmailError};
pub use id::StoreId;
pub use price::{CurrencyCode, Price};
pub use status::ReplyStatus;
