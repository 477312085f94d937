//! Value bounds for `sellIn` and `quality`.
//!
//! Rules clamp every computed value through these helpers, so the arithmetic
//! never leaves the valid range for capped categories.

/// Lowest `sellIn` a rule will produce.
pub const MIN_SELL_IN: i64 = 0;

/// Lowest quality any rule will produce.
pub const MIN_QUALITY: i64 = 0;

/// Highest quality a capped rule will produce.
pub const MAX_QUALITY: i64 = 50;

/// One day closer to the sell-by date, floored at [`MIN_SELL_IN`].
pub fn next_sell_in(sell_in: i64) -> i64 {
    sell_in.saturating_sub(1).max(MIN_SELL_IN)
}

/// Lower quality by `amount`, floored at [`MIN_QUALITY`].
pub fn degrade(quality: i64, amount: i64) -> i64 {
    quality.saturating_sub(amount).max(MIN_QUALITY)
}

/// Raise quality by `amount`, capped at [`MAX_QUALITY`].
pub fn improve(quality: i64, amount: i64) -> i64 {
    quality.saturating_add(amount).min(MAX_QUALITY)
}
