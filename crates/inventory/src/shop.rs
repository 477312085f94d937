//! The shop's stock and the daily update loop.

use std::sync::Arc;

use gildedrose_core::ConfigResult;

use crate::item::Item;
use crate::registry::StrategyRegistry;
use crate::rule::ItemUpdate;

/// An ordered stock of items bound to a rule registry.
#[derive(Debug, Clone)]
pub struct Inventory {
    items: Vec<Item>,
    registry: Arc<StrategyRegistry>,
}

impl Inventory {
    pub fn new(items: Vec<Item>, registry: Arc<StrategyRegistry>) -> Self {
        Self { items, registry }
    }

    /// Stock using the built-in rule table.
    pub fn with_standard_rules(items: Vec<Item>) -> Self {
        Self::new(items, Arc::new(StrategyRegistry::standard()))
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    /// Advance every item by one day, in order.
    ///
    /// All updates are computed before any item is written, so a resolution
    /// failure leaves the stock untouched.
    pub fn tick(&mut self) -> ConfigResult<&[Item]> {
        let updates = self
            .items
            .iter()
            .map(|item| {
                let rule = self.registry.resolve(item.name())?;
                let update = rule.apply(item);
                tracing::debug!(
                    item = item.name(),
                    rule = rule.name(),
                    sell_in = item.sell_in(),
                    quality = item.quality(),
                    next_sell_in = update.sell_in,
                    next_quality = update.quality,
                    "item updated"
                );
                Ok(update)
            })
            .collect::<ConfigResult<Vec<ItemUpdate>>>()?;

        for (item, update) in self.items.iter_mut().zip(updates) {
            item.apply(update);
        }

        tracing::info!(items = self.items.len(), "inventory ticked");
        Ok(&self.items)
    }

    /// Run `days` ticks back to back.
    pub fn advance(&mut self, days: u32) -> ConfigResult<&[Item]> {
        for _ in 0..days {
            self.tick()?;
        }
        Ok(&self.items)
    }
}
