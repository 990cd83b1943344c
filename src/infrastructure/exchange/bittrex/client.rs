use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use super::parsers::BittrexParser;
use crate::config_loader::ExchangeConfig;
use crate::domain::model::order_book::OrderBookSnapshot;
use crate::domain::model::ticker::{Pair, TickerSummary};
use crate::domain::traits::MarketDataSource;

/// REST client for the Bittrex public market endpoints
pub struct BittrexClient {
    http: Client,
    base_url: String,
}

impl BittrexClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &ExchangeConfig) -> Result<Self> {
        Self::new(config.base_url.clone(), Duration::from_millis(config.timeout_ms))
    }

    /// Builds `{base_url}/{method}?{params}`
    pub fn endpoint(&self, method: &str, params: &[(&str, &str)]) -> Result<Url> {
        let raw = format!("{}/{}", self.base_url.trim_end_matches('/'), method);
        Url::parse_with_params(&raw, params).map_err(|e| anyhow!("Invalid Bittrex URL '{}': {}", raw, e))
    }

    async fn get(&self, url: Url) -> Result<Value> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| anyhow!("Request to {} failed: {}", url, e))?
            .error_for_status()
            .map_err(|e| anyhow!("Bittrex returned an error status: {}", e))?;

        response
            .json::<Value>()
            .await
            .map_err(|e| anyhow!("Failed to decode response from {}: {}", url, e))
    }
}

#[async_trait]
impl MarketDataSource for BittrexClient {
    async fn fetch_order_book(&self, pair: &Pair) -> Result<OrderBookSnapshot> {
        let market = pair.market_name();
        let url = self.endpoint("getorderbook", &[("market", market.as_str()), ("type", "both")])?;
        let data = self.get(url).await?;
        BittrexParser::parse_order_book(&data)
    }

    async fn fetch_ticker(&self, pair: &Pair) -> Result<TickerSummary> {
        let market = pair.market_name();
        let url = self.endpoint("getticker", &[("market", market.as_str())])?;
        let data = self.get(url).await?;
        BittrexParser::parse_ticker(&data)
    }
}
