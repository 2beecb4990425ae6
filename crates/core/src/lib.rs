//! Pie Order Core - order document assembly engine.
//!
//! Turns loosely specified pizza-order inputs into the complete JSON order
//! document the ordering service expects:
//! - [`item`] builds order lines from size, variant and toppings
//! - [`options`] encodes topping placement and intensity
//! - [`assembler`] composes address, customer, store, lines and payments
//! - [`replies`] decodes store-locator, catalog and service replies
//!
//! # Architecture
//!
//! No I/O, no HTTP clients. Callers fetch collaborator replies and transmit
//! the assembled document themselves. Every unset field is filled from an
//! explicit static [`defaults::DefaultPolicy`] table, and assembly either
//! produces a whole document or returns the first error.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod assembler;
pub mod defaults;
pub mod document;
pub mod error;
pub mod item;
pub mod options;
pub mod profile;
pub mod replies;
pub mod types;

pub use assembler::{OrderAssembler, OrderRequest};
pub use document::{Address, AddressInput, LocatorLines, OrderDocument, PaymentRecord};
pub use error::OrderError;
pub use item::{ItemRequest, OrderLine, RawItem};
pub use options::{CustomizationRequest, EncodedOption, Intensity, Placement, RawCustomization};
pub use profile::{AccountProfile, CardDetails, CustomerIdentity};
pub use types::*;
