use anyhow::{anyhow, bail, Result};
use log::{debug, info, warn};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::domain::constants::*;
use crate::domain::enums::Exchange;
use crate::domain::model::ticker::Pair;

/// Top-level configuration structure containing all config sections
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub exchange: ExchangeConfig,
    #[serde(default)]
    pub depth: DepthConfig,
    #[serde(default)]
    pub volume_rank: VolumeRankConfig,
}

/// Exchange connection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeConfig {
    #[serde(default = "default_exchange_name")]
    pub name: String,

    #[serde(default = "default_bittrex_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

/// Defaults for the depth ratio report
#[derive(Debug, Clone, Deserialize)]
pub struct DepthConfig {
    #[serde(default = "default_window_percentage")]
    pub window_percentage: i64,

    /// Base currency followed by quote currencies, used when no `--pair` is given
    #[serde(default)]
    pub pairs: Vec<String>,
}

/// CoinMarketCap ranking configuration
#[derive(Debug, Clone, Deserialize)]
pub struct VolumeRankConfig {
    #[serde(default = "default_coinmarketcap_url")]
    pub url: String,

    #[serde(default = "default_rank_fetch_limit")]
    pub fetch_limit: u32,

    #[serde(default = "default_rank_display_limit")]
    pub display_limit: usize,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_exchange_name() -> String {
    DEFAULT_EXCHANGE.to_string()
}

fn default_bittrex_url() -> String {
    DEFAULT_BITTREX_URL.to_string()
}

fn default_coinmarketcap_url() -> String {
    DEFAULT_COINMARKETCAP_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_HTTP_TIMEOUT_MS
}

fn default_window_percentage() -> i64 {
    DEFAULT_WINDOW_PERCENTAGE
}

fn default_rank_fetch_limit() -> u32 {
    DEFAULT_RANK_FETCH_LIMIT
}

fn default_rank_display_limit() -> usize {
    DEFAULT_RANK_DISPLAY_LIMIT
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            name: default_exchange_name(),
            base_url: default_bittrex_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Default for DepthConfig {
    fn default() -> Self {
        Self {
            window_percentage: default_window_percentage(),
            pairs: Vec::new(),
        }
    }
}

impl Default for VolumeRankConfig {
    fn default() -> Self {
        Self {
            url: default_coinmarketcap_url(),
            fetch_limit: default_rank_fetch_limit(),
            display_limit: default_rank_display_limit(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let config_str = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file '{}': {}", path.display(), e))?;

        let config = Self::from_toml_str(&config_str)
            .map_err(|e| anyhow!("Failed to parse config file '{}': {}", path.display(), e))?;

        info!("Loaded configuration from {}", path.display());
        debug!("Exchange: {} at {}", config.exchange.name, config.exchange.base_url);

        Ok(config)
    }

    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    /// Loads the file when it exists, otherwise falls back to built-in defaults.
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            warn!("Config file {} not found, using defaults", path.display());
            Ok(Self::default())
        }
    }
}

/// Fully resolved settings for one depth report run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub exchange: Exchange,
    pub pairs: Vec<Pair>,
    pub window_percent: i64,
}

impl RunConfig {
    /// Merges command line values over the config file.
    ///
    /// `pair_args` is the base currency followed by one or more quote
    /// currencies; each quote yields one `(base, quote)` pair.
    pub fn resolve(
        config: &AppConfig,
        pair_args: Option<Vec<String>>,
        exchange: Option<String>,
        window_percent: Option<i64>,
    ) -> Result<Self> {
        let pair_args = pair_args.unwrap_or_else(|| config.depth.pairs.clone());
        let pairs = build_pairs(&pair_args)?;

        let exchange_name = exchange.unwrap_or_else(|| config.exchange.name.clone());
        let exchange = Exchange::from_str(&exchange_name)?;

        let window_percent = window_percent.unwrap_or(config.depth.window_percentage);
        if window_percent <= 0 || window_percent > MAX_WINDOW_PERCENTAGE {
            bail!(
                "window percentage must be between 1 and {}, got {}",
                MAX_WINDOW_PERCENTAGE,
                window_percent
            );
        }

        Ok(Self {
            exchange,
            pairs,
            window_percent,
        })
    }
}

/// Pairs the first currency with each of the following ones
pub fn build_pairs(pair_args: &[String]) -> Result<Vec<Pair>> {
    match pair_args {
        [base, quotes @ ..] if !quotes.is_empty() => Ok(quotes
            .iter()
            .map(|quote| Pair::new(base.clone(), quote.clone()))
            .collect()),
        _ => bail!("argument --pair: expected at least two arguments"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.exchange.name, "bittrex");
        assert_eq!(config.exchange.timeout_ms, DEFAULT_HTTP_TIMEOUT_MS);
        assert_eq!(config.depth.window_percentage, 10);
        assert_eq!(config.volume_rank.display_limit, 50);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [depth]
            window_percentage = 5
            pairs = ["BTC", "ETH"]
            "#,
        )
        .unwrap();
        assert_eq!(config.depth.window_percentage, 5);
        assert_eq!(config.depth.pairs, args(&["BTC", "ETH"]));
        assert_eq!(config.exchange.base_url, DEFAULT_BITTREX_URL);
    }

    #[test]
    fn build_pairs_combines_base_with_each_quote() {
        let pairs = build_pairs(&args(&["BTC", "ETH", "LTC"])).unwrap();
        assert_eq!(pairs, vec![Pair::new("BTC", "ETH"), Pair::new("BTC", "LTC")]);
    }

    #[test]
    fn build_pairs_requires_two_arguments() {
        assert!(build_pairs(&args(&["BTC"])).is_err());
        assert!(build_pairs(&[]).is_err());
    }

    #[test]
    fn command_line_overrides_config() {
        let config = AppConfig::default();
        let run = RunConfig::resolve(
            &config,
            Some(args(&["BTC", "ETH"])),
            Some("Bittrex".to_string()),
            Some(3),
        )
        .unwrap();
        assert_eq!(run.exchange, Exchange::Bittrex);
        assert_eq!(run.window_percent, 3);
        assert_eq!(run.pairs, vec![Pair::new("BTC", "ETH")]);
    }

    #[test]
    fn resolve_rejects_non_positive_window() {
        let config = AppConfig::default();
        let result = RunConfig::resolve(&config, Some(args(&["BTC", "ETH"])), None, Some(0));
        assert!(result.is_err());

        let result = RunConfig::resolve(&config, Some(args(&["BTC", "ETH"])), None, Some(1_000_000_000_000));
        assert!(result.is_err());
    }
}
