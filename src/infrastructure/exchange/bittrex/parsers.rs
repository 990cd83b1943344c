use anyhow::{anyhow, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::models::{BittrexOrder, BittrexOrderBook, BittrexResponse, BittrexTicker};
use crate::domain::constants::PRICE_DECIMAL_PLACES;
use crate::domain::model::order_book::{OrderBookEntry, OrderBookSnapshot};
use crate::domain::numeric::quantize;
use crate::domain::model::ticker::TickerSummary;

/// Converts Bittrex JSON responses into domain values
pub struct BittrexParser;

impl BittrexParser {
    /// Parses a `getorderbook` response; `buy` becomes bids and `sell` asks, order preserved
    pub fn parse_order_book(data: &Value) -> Result<OrderBookSnapshot> {
        let book: BittrexOrderBook = Self::unwrap_envelope(data)?;

        Ok(OrderBookSnapshot {
            bids: Self::to_entries(book.buy.unwrap_or_default()),
            asks: Self::to_entries(book.sell.unwrap_or_default()),
        })
    }

    /// Parses a `getticker` response, quantizing prices to 8 decimal places
    pub fn parse_ticker(data: &Value) -> Result<TickerSummary> {
        let ticker: BittrexTicker = Self::unwrap_envelope(data)?;

        Ok(TickerSummary {
            last: quantize(ticker.last, PRICE_DECIMAL_PLACES),
            bid: quantize(ticker.bid, PRICE_DECIMAL_PLACES),
            ask: quantize(ticker.ask, PRICE_DECIMAL_PLACES),
        })
    }

    fn unwrap_envelope<T: DeserializeOwned>(data: &Value) -> Result<T> {
        let response: BittrexResponse<T> = serde_json::from_value(data.clone())
            .map_err(|e| anyhow!("Malformed Bittrex response: {}", e))?;

        if !response.success {
            return Err(anyhow!("Bittrex request failed: {}", response.message));
        }

        response.result.ok_or_else(|| anyhow!("Missing result in Bittrex response"))
    }

    fn to_entries(orders: Vec<BittrexOrder>) -> Vec<OrderBookEntry> {
        orders
            .into_iter()
            .map(|order| OrderBookEntry::new(order.rate, order.quantity))
            .collect()
    }
}
