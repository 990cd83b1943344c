use anyhow::Result;
use colored::Colorize;
use log::{error, info};
use std::io::Write;

use super::compute_depth_ratio;
use crate::config_loader::RunConfig;
use crate::domain::constants::REPORT_SEPARATOR;
use crate::domain::enums::Exchange;
use crate::domain::model::depth::DepthRatio;
use crate::domain::model::ticker::{Pair, TickerSummary};
use crate::domain::traits::MarketDataSource;

/// Everything printed for one pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairReport {
    pub pair: Pair,
    pub ratio: DepthRatio,
    pub ticker: TickerSummary,
}

/// Outcome counts of a multi-pair run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl ReportSummary {
    pub fn all_failed(&self) -> bool {
        self.succeeded == 0 && self.failed > 0
    }
}

/// Runs the depth ratio report for every configured pair, writing one block per pair to `out`.
///
/// A pair that fails (network, parsing or an empty window) is logged and skipped.
pub async fn run_depth_report<S, W>(source: &S, config: &RunConfig, out: &mut W) -> Result<ReportSummary>
where
    S: MarketDataSource + ?Sized,
    W: Write,
{
    let mut summary = ReportSummary::default();

    for pair in &config.pairs {
        match build_pair_report(source, pair, config.window_percent).await {
            Ok(report) => {
                write!(out, "{}", render_pair_report(config.exchange, &report))?;
                summary.succeeded += 1;
            }
            Err(e) => {
                error!("Skipping {}: {:#}", pair, e);
                summary.failed += 1;
            }
        }
    }

    info!(
        "Depth report finished: {} succeeded, {} failed",
        summary.succeeded, summary.failed
    );
    Ok(summary)
}

/// Fetches the order book and ticker of `pair` and computes its depth ratio
pub async fn build_pair_report<S>(source: &S, pair: &Pair, window_percent: i64) -> Result<PairReport>
where
    S: MarketDataSource + ?Sized,
{
    let order_book = source.fetch_order_book(pair).await?;
    let ratio = compute_depth_ratio(&order_book, window_percent)?;
    // Ticker is only fetched once the ratio is known to be defined
    let ticker = source.fetch_ticker(pair).await?;

    Ok(PairReport {
        pair: pair.clone(),
        ratio,
        ticker,
    })
}

pub fn render_pair_report(exchange: Exchange, report: &PairReport) -> String {
    let ratio_text = format!("{} / {}", report.ratio.bid_ratio, report.ratio.ask_ratio);
    let ratio_text = if report.ratio.is_bid_heavy() {
        ratio_text.green()
    } else {
        ratio_text.red()
    };

    format!(
        "exchange: {}\npair: {}\nmarket price: {}\nbid/ask: {} {}\nbid/ask ratio: {}\n{}\n",
        exchange,
        report.pair,
        report.ticker.last,
        report.ticker.bid,
        report.ticker.ask,
        ratio_text,
        REPORT_SEPARATOR,
    )
}
