//! Update rules and the built-in rule table.
//!
//! A rule is a named pair of pure functions over the item's *current* state.
//! Both functions read the pre-tick `sell_in`, so a rule sees "expires today"
//! (`sell_in == 0`) before the day is counted down.

use gildedrose_core::bounds::{degrade, improve, next_sell_in};

use crate::item::Item;

/// Category names used as dispatch keys.
pub mod categories {
    /// Name of the fallback rule for ordinary items.
    pub const DEFAULT: &str = "default";
    pub const AGED_BRIE: &str = "Aged Brie";
    pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
    pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
    pub const CONJURED: &str = "Conjured";
}

/// Quality lost per day by an ordinary item before its sell-by date.
const NORMAL_DEGRADE_RATE: i64 = 1;

/// Values computed by a rule, not yet written back to the item.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ItemUpdate {
    pub sell_in: i64,
    pub quality: i64,
}

/// Computes one next-day value from the item's current state.
pub type RuleFn = fn(&Item) -> i64;

/// A named update strategy.
#[derive(Debug, Clone)]
pub struct UpdateRule {
    name: String,
    sell_in_fn: RuleFn,
    quality_fn: RuleFn,
}

impl UpdateRule {
    pub fn new(name: impl Into<String>, sell_in_fn: RuleFn, quality_fn: RuleFn) -> Self {
        Self {
            name: name.into(),
            sell_in_fn,
            quality_fn,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn next_sell_in(&self, item: &Item) -> i64 {
        (self.sell_in_fn)(item)
    }

    pub fn next_quality(&self, item: &Item) -> i64 {
        (self.quality_fn)(item)
    }

    /// Compute both next-day values from the same snapshot of `item`.
    pub fn apply(&self, item: &Item) -> ItemUpdate {
        ItemUpdate {
            sell_in: self.next_sell_in(item),
            quality: self.next_quality(item),
        }
    }

    /// Ordinary items lose quality, twice as fast once the sell-by date has passed.
    pub fn ordinary() -> Self {
        Self::new(
            categories::DEFAULT,
            |item| next_sell_in(item.sell_in()),
            |item| degrade(item.quality(), degrade_rate(item, NORMAL_DEGRADE_RATE)),
        )
    }

    /// Improves with age, capped at the maximum quality.
    pub fn aged_brie() -> Self {
        Self::new(
            categories::AGED_BRIE,
            |item| next_sell_in(item.sell_in()),
            |item| improve(item.quality(), NORMAL_DEGRADE_RATE),
        )
    }

    /// Gains value as the concert approaches and is worthless once it is held.
    pub fn backstage_passes() -> Self {
        Self::new(
            categories::BACKSTAGE_PASSES,
            |item| next_sell_in(item.sell_in()),
            |item| match item.sell_in() {
                0 => 0,
                s if s <= 5 => improve(item.quality(), 3),
                s if s <= 10 => improve(item.quality(), 2),
                _ => improve(item.quality(), 1),
            },
        )
    }

    /// Legendary: never sold, never degrades. Quality is left uncapped.
    pub fn sulfuras() -> Self {
        Self::new(categories::SULFURAS, |item| item.sell_in(), |item| item.quality())
    }

    /// Degrades twice as fast as an ordinary item.
    pub fn conjured() -> Self {
        Self::new(
            categories::CONJURED,
            |item| next_sell_in(item.sell_in()),
            |item| degrade(item.quality(), degrade_rate(item, NORMAL_DEGRADE_RATE * 2)),
        )
    }

    /// Every built-in rule except the ordinary (default) one.
    pub fn specials() -> [Self; 4] {
        [
            Self::aged_brie(),
            Self::backstage_passes(),
            Self::sulfuras(),
            Self::conjured(),
        ]
    }
}

fn degrade_rate(item: &Item, base: i64) -> i64 {
    if item.sell_in() > 0 { base } else { base * 2 }
}
