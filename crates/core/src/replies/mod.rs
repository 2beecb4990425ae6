//! Decoders for replies from the services around the engine.
//!
//! The engine never talks to these services. Callers fetch the JSON and hand
//! it here to get typed values the assembler accepts.

pub mod menu;
pub mod service;
pub mod store;

pub use menu::{MenuItem, parse_menu, search};
pub use service::{ServiceReply, StatusItem};
pub use store::{StoreLocatorReply, StoreMatch, pick_store};
