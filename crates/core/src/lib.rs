//! `gildedrose-core` — shared building blocks for the inventory rules.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod bounds;
pub mod error;

pub use bounds::{MAX_QUALITY, MIN_QUALITY, MIN_SELL_IN};
pub use error::{ConfigResult, ConfigurationError};
