use rust_decimal::Decimal;
use std::fmt;

/// A (base, quote) currency pair, e.g. BTC/ETH
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pair {
    pub base: String,
    pub quote: String,
}

impl Pair {
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            quote: quote.into(),
        }
    }

    /// Market name in exchange notation, quote currency first (ETH-BTC for BTC/ETH)
    pub fn market_name(&self) -> String {
        format!("{}-{}", self.quote, self.base)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

/// Last traded price and top of book for a market
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickerSummary {
    pub last: Decimal,
    pub bid: Decimal,
    pub ask: Decimal,
}
