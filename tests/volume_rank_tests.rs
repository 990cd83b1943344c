use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use market_depth::analysis::volume_rank::{build_rows, rank_by_volume_to_cap, run_volume_rank};
use market_depth::config_loader::VolumeRankConfig;
use market_depth::domain::model::coin::CoinStats;
use market_depth::CoinStatsSource;

fn coin(rank: &str, cap: Option<Decimal>, volume: Option<Decimal>, change: Option<Decimal>) -> CoinStats {
    CoinStats {
        rank: rank.to_string(),
        name: format!("Coin {}", rank),
        market_cap_usd: cap,
        volume_24h_usd: volume,
        percent_change_24h: change,
    }
}

fn sample_coins() -> Vec<CoinStats> {
    vec![
        coin("1", Some(dec!(1000000)), Some(dec!(10000)), Some(dec!(1.5))),
        coin("2", Some(dec!(500000)), Some(dec!(250000)), Some(dec!(-3.2))),
        coin("3", Some(dec!(0)), Some(dec!(100)), Some(dec!(2))),
        coin("4", None, Some(dec!(100)), Some(dec!(2))),
        coin("5", Some(dec!(200000)), Some(dec!(20000)), None),
        coin("6", Some(dec!(300000)), Some(dec!(30000)), Some(dec!(0))),
    ]
}

struct StubStats(Vec<CoinStats>);

#[async_trait]
impl CoinStatsSource for StubStats {
    async fn fetch_coin_stats(&self, limit: u32) -> Result<Vec<CoinStats>> {
        Ok(self.0.iter().take(limit as usize).cloned().collect())
    }
}

#[test]
fn test_ranking_orders_by_volume_to_cap() {
    let ranked = rank_by_volume_to_cap(sample_coins());
    let ranks: Vec<&str> = ranked.iter().map(|c| c.rank.as_str()).collect();

    // Coins 3 and 4 have no usable market cap; 5 and 6 tie at 10% and keep their order
    assert_eq!(ranks, vec!["2", "5", "6", "1"]);
}

#[test]
fn test_rows_skip_coins_without_change() {
    colored::control::set_override(false);
    let ranked = rank_by_volume_to_cap(sample_coins());

    let rows = build_rows(&ranked, 50);

    let ranks: Vec<&str> = rows.iter().map(|r| r.rank.as_str()).collect();
    assert_eq!(ranks, vec!["2", "6", "1"]);
    assert_eq!(rows[0].market_cap, "$500,000.00");
    assert_eq!(rows[0].volume, "$250,000.00");
    assert_eq!(rows[0].volume_to_cap, "50.00%");
    assert_eq!(rows[0].change, "-3.2%");
    assert_eq!(rows[2].volume_to_cap, "1.00%");
}

#[test]
fn test_display_limit_applies_before_skipping() {
    let ranked = rank_by_volume_to_cap(sample_coins());

    let rows = build_rows(&ranked, 2);

    // Coin 5 takes the second slot but has no change, so only one row remains
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].rank, "2");
}

#[tokio::test]
async fn test_run_volume_rank_renders_table() -> Result<()> {
    colored::control::set_override(false);
    let source = StubStats(sample_coins());
    let config = VolumeRankConfig::default();

    let table = run_volume_rank(&source, &config).await?;

    assert!(table.contains("% Volume/Cap (24h)"));
    assert!(table.contains("Coin 2"));
    assert!(table.contains("$1,000,000.00"));
    assert!(!table.contains("Coin 5"));
    Ok(())
}
