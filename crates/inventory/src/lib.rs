//! Inventory domain module.
//!
//! This crate contains the daily update rules for a shop's stock, implemented
//! purely as deterministic domain logic (no IO, no storage).

pub mod item;
pub mod registry;
pub mod rule;
pub mod shop;

pub use item::Item;
pub use registry::StrategyRegistry;
pub use rule::{categories, ItemUpdate, UpdateRule};
pub use shop::Inventory;

pub use gildedrose_core::{ConfigResult, ConfigurationError};
