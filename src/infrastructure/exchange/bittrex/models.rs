// Models for Bittrex v1.1 public API responses
use rust_decimal::Decimal;
use serde::Deserialize;

/// Envelope wrapping every Bittrex response
#[derive(Debug, Deserialize)]
pub struct BittrexResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub result: Option<T>,
}

/// Result of `getorderbook?type=both`
#[derive(Debug, Deserialize)]
pub struct BittrexOrderBook {
    pub buy: Option<Vec<BittrexOrder>>,
    pub sell: Option<Vec<BittrexOrder>>,
}

#[derive(Debug, Deserialize)]
pub struct BittrexOrder {
    #[serde(rename = "Quantity", with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
    #[serde(rename = "Rate", with = "rust_decimal::serde::float")]
    pub rate: Decimal,
}

/// Result of `getticker`
#[derive(Debug, Deserialize)]
pub struct BittrexTicker {
    #[serde(rename = "Bid", with = "rust_decimal::serde::float")]
    pub bid: Decimal,
    #[serde(rename = "Ask", with = "rust_decimal::serde::float")]
    pub ask: Decimal,
    #[serde(rename = "Last", with = "rust_decimal::serde::float")]
    pub last: Decimal,
}
