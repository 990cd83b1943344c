pub mod bittrex;

use anyhow::Result;

use crate::config_loader::ExchangeConfig;
use crate::domain::enums::Exchange;
use crate::domain::traits::MarketDataSource;

/// Builds the market data client for the configured exchange
pub fn connect(exchange: Exchange, config: &ExchangeConfig) -> Result<Box<dyn MarketDataSource + Send + Sync>> {
    match exchange {
        Exchange::Bittrex => Ok(Box::new(bittrex::BittrexClient::from_config(config)?)),
    }
}
