use rust_decimal::Decimal;

use crate::domain::constants::PRICE_DECIMAL_PLACES;
use crate::domain::enums::Side;
use crate::domain::errors::DepthError;

/// One resting order as reported by the exchange
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderBookEntry {
    pub price: Decimal,
    pub quantity: Decimal,
}

impl OrderBookEntry {
    pub fn new(price: Decimal, quantity: Decimal) -> Self {
        Self { price, quantity }
    }
}

/// Static order book snapshot, best bid and best ask first
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderBookSnapshot {
    pub bids: Vec<OrderBookEntry>,
    pub asks: Vec<OrderBookEntry>,
}

impl OrderBookSnapshot {
    pub fn new(bids: Vec<OrderBookEntry>, asks: Vec<OrderBookEntry>) -> Self {
        Self { bids, asks }
    }

    /// Midpoint between best bid and best ask, quantized to price precision
    pub fn mid_price(&self) -> Result<Decimal, DepthError> {
        mid_price(&self.bids, &self.asks)
    }
}

/// Midpoint of the first bid and first ask entry.
pub fn mid_price(bids: &[OrderBookEntry], asks: &[OrderBookEntry]) -> Result<Decimal, DepthError> {
    let best_bid = bids.first().ok_or(DepthError::EmptyOrderBookSide(Side::Bid))?;
    let best_ask = asks.first().ok_or(DepthError::EmptyOrderBookSide(Side::Ask))?;

    let middle = (best_ask.price - best_bid.price) / Decimal::TWO + best_bid.price;
    Ok(middle.round_dp(PRICE_DECIMAL_PLACES))
}
