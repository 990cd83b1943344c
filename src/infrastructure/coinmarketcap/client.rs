use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use std::time::Duration;
use url::Url;

use super::models::CmcTicker;
use crate::config_loader::VolumeRankConfig;
use crate::domain::model::coin::CoinStats;
use crate::domain::traits::CoinStatsSource;

/// REST client for the CoinMarketCap v1 ticker list
pub struct CoinMarketCapClient {
    http: Client,
    url: String,
}

impl CoinMarketCapClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self { http, url: url.into() })
    }

    pub fn from_config(config: &VolumeRankConfig) -> Result<Self> {
        Self::new(config.url.clone(), Duration::from_millis(config.timeout_ms))
    }
}

#[async_trait]
impl CoinStatsSource for CoinMarketCapClient {
    async fn fetch_coin_stats(&self, limit: u32) -> Result<Vec<CoinStats>> {
        let limit = limit.to_string();
        let url = Url::parse_with_params(&self.url, &[("limit", limit.as_str())])
            .map_err(|e| anyhow!("Invalid CoinMarketCap URL '{}': {}", self.url, e))?;
        debug!("GET {}", url);

        let tickers = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| anyhow!("Request to {} failed: {}", url, e))?
            .error_for_status()
            .map_err(|e| anyhow!("CoinMarketCap returned an error status: {}", e))?
            .json::<Vec<CmcTicker>>()
            .await
            .map_err(|e| anyhow!("Failed to decode response from {}: {}", url, e))?;

        info!("Fetched {} coins from CoinMarketCap", tickers.len());
        Ok(tickers.into_iter().map(CmcTicker::into_stats).collect())
    }
}
