//! Shared data model for Otherworld content.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{INVENTORY_SLOTS, ValidationError, validate_world};
