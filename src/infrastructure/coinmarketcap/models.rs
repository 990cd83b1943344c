// Models for the CoinMarketCap v1 ticker endpoint. Numbers arrive as strings and any of them may be null.
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

use crate::domain::model::coin::CoinStats;

#[derive(Debug, Deserialize)]
pub struct CmcTicker {
    pub rank: String,
    pub name: String,
    pub market_cap_usd: Option<String>,
    #[serde(rename = "24h_volume_usd")]
    pub volume_24h_usd: Option<String>,
    pub percent_change_24h: Option<String>,
}

impl CmcTicker {
    pub fn into_stats(self) -> CoinStats {
        CoinStats {
            market_cap_usd: parse_decimal(self.market_cap_usd.as_deref()),
            volume_24h_usd: parse_decimal(self.volume_24h_usd.as_deref()),
            percent_change_24h: parse_decimal(self.percent_change_24h.as_deref()),
            rank: self.rank,
            name: self.name,
        }
    }
}

/// Parses plain or scientific notation, treating blanks and garbage as missing
fn parse_decimal(raw: Option<&str>) -> Option<Decimal> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_decimal_handles_missing_and_scientific_values() {
        assert_eq!(parse_decimal(None), None);
        assert_eq!(parse_decimal(Some("")), None);
        assert_eq!(parse_decimal(Some("n/a")), None);
        assert_eq!(parse_decimal(Some("12.5")), Decimal::from_str("12.5").ok());
        assert_eq!(parse_decimal(Some("1e3")), Some(Decimal::from(1000)));
    }
}
