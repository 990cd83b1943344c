use anyhow::Result;
use async_trait::async_trait;

use crate::domain::model::coin::CoinStats;
use crate::domain::model::order_book::OrderBookSnapshot;
use crate::domain::model::ticker::{Pair, TickerSummary};

/// Source of order book snapshots and tickers for a single exchange
#[async_trait]
pub trait MarketDataSource {
    async fn fetch_order_book(&self, pair: &Pair) -> Result<OrderBookSnapshot>;
    async fn fetch_ticker(&self, pair: &Pair) -> Result<TickerSummary>;
}

/// Source of per-coin market cap and volume statistics
#[async_trait]
pub trait CoinStatsSource {
    async fn fetch_coin_stats(&self, limit: u32) -> Result<Vec<CoinStats>>;
}
