//! Ranks coins by 24h trading volume relative to market cap.

use anyhow::Result;
use colored::Colorize;
use log::{debug, info};
use rust_decimal::Decimal;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config_loader::VolumeRankConfig;
use crate::domain::constants::RATIO_DECIMAL_PLACES;
use crate::domain::model::coin::CoinStats;
use crate::domain::numeric::{format_usd, quantize};
use crate::domain::traits::CoinStatsSource;

#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct RankRow {
    #[tabled(rename = "#")]
    pub rank: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Market Cap")]
    pub market_cap: String,
    #[tabled(rename = "Volume (24h)")]
    pub volume: String,
    #[tabled(rename = "% Volume/Cap (24h)")]
    pub volume_to_cap: String,
    #[tabled(rename = "% Change (24h)")]
    pub change: String,
}

/// Sorts coins by volume/market cap, highest first. Coins without a usable
/// market cap or volume are dropped; ties keep their incoming order.
pub fn rank_by_volume_to_cap(coins: Vec<CoinStats>) -> Vec<CoinStats> {
    let mut ranked: Vec<(Decimal, CoinStats)> = coins
        .into_iter()
        .filter_map(|coin| coin.volume_to_cap().map(|ratio| (ratio, coin)))
        .collect();

    ranked.sort_by(|(a, _), (b, _)| b.cmp(a));
    ranked.into_iter().map(|(_, coin)| coin).collect()
}

/// Table rows for the top `display_limit` ranked coins, skipping coins without a 24h change
pub fn build_rows(ranked: &[CoinStats], display_limit: usize) -> Vec<RankRow> {
    ranked
        .iter()
        .take(display_limit)
        .filter_map(|coin| {
            let change = coin.percent_change_24h?;
            let market_cap = coin.market_cap_usd?;
            let volume = coin.volume_24h_usd?;
            let ratio = coin.volume_to_cap()?;

            let change_text = format!("{}%", change);
            let change_text = if change > Decimal::ZERO {
                change_text.green().to_string()
            } else {
                change_text.red().to_string()
            };

            Some(RankRow {
                rank: coin.rank.clone(),
                name: coin.name.clone(),
                market_cap: format_usd(market_cap),
                volume: format_usd(volume),
                volume_to_cap: format!(
                    "{}%",
                    quantize(ratio * Decimal::ONE_HUNDRED, RATIO_DECIMAL_PLACES)
                ),
                change: change_text,
            })
        })
        .collect()
}

pub fn render_table(rows: &[RankRow]) -> String {
    Table::new(rows).with(Style::ascii()).to_string()
}

/// Fetches coin statistics and renders the ranking table
pub async fn run_volume_rank<S>(source: &S, config: &VolumeRankConfig) -> Result<String>
where
    S: CoinStatsSource + ?Sized,
{
    let coins = source.fetch_coin_stats(config.fetch_limit).await?;
    let total = coins.len();

    let ranked = rank_by_volume_to_cap(coins);
    debug!("{} of {} coins have a usable volume/cap ratio", ranked.len(), total);

    let rows = build_rows(&ranked, config.display_limit);
    info!("Rendering {} ranked coins", rows.len());

    Ok(render_table(&rows))
}
