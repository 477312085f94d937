use serde::{Deserialize, Serialize};

use crate::rule::ItemUpdate;

/// A unit of stock.
///
/// The name doubles as the dispatch key used to pick an update rule. Items have
/// no identity beyond name and position in the owning inventory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    name: String,
    sell_in: i64,
    quality: i64,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i64, quality: i64) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Days remaining to sell the item.
    pub fn sell_in(&self) -> i64 {
        self.sell_in
    }

    pub fn quality(&self) -> i64 {
        self.quality
    }

    /// Overwrite both values with a computed update.
    pub(crate) fn apply(&mut self, update: ItemUpdate) {
        self.sell_in = update.sell_in;
        self.quality = update.quality;
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
