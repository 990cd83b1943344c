use rust_decimal::Decimal;

/// Aggregated resting volume of one percentage bucket around the mid price.
///
/// Levels are created empty and only the bucketizer adds to `quantity`;
/// everything downstream reads them through shared references.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthLevel {
    pub price: Decimal,
    pub quantity: Decimal,
}

impl DepthLevel {
    pub fn empty(price: Decimal) -> Self {
        Self {
            price,
            quantity: Decimal::ZERO,
        }
    }
}

/// Weighted bid/ask pressure as percentages with two decimal places
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthRatio {
    pub bid_ratio: Decimal,
    pub ask_ratio: Decimal,
}

impl DepthRatio {
    /// True when resting bid volume outweighs ask volume
    pub fn is_bid_heavy(&self) -> bool {
        self.bid_ratio > self.ask_ratio
    }
}
