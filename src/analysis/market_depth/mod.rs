//! Market depth ratio
//!
//! Buckets an order book snapshot into one-percent levels around the mid
//! price and reduces them to a liquidity-weighted bid/ask ratio.

mod bucketizer;
mod ratio;
pub mod report;

pub use bucketizer::create_depth_levels;
pub use ratio::{calculate_ratio, weighted_quantity};
pub use report::{run_depth_report, ReportSummary};

use log::debug;

use crate::domain::constants::MAX_WINDOW_PERCENTAGE;
use crate::domain::errors::DepthError;
use crate::domain::model::depth::DepthRatio;
use crate::domain::model::order_book::OrderBookSnapshot;

/// Computes the weighted bid/ask ratio of `snapshot` within
/// `window_percent` percent of its mid price.
pub fn compute_depth_ratio(
    snapshot: &OrderBookSnapshot,
    window_percent: i64,
) -> Result<DepthRatio, DepthError> {
    let (bid_levels, ask_levels) = create_depth_levels(&snapshot.bids, &snapshot.asks, window_percent)?;
    debug!(
        "Depth levels: bids={:?} asks={:?}",
        bid_levels.iter().map(|l| l.quantity).collect::<Vec<_>>(),
        ask_levels.iter().map(|l| l.quantity).collect::<Vec<_>>()
    );
    calculate_ratio(&bid_levels, &ask_levels, window_percent)
}

/// Validates the window and returns it as a level count, rejecting zero,
/// negative and oversized windows
pub(crate) fn window_size(window_percentage: i64) -> Result<usize, DepthError> {
    if window_percentage <= 0 || window_percentage > MAX_WINDOW_PERCENTAGE {
        return Err(DepthError::InvalidWindow(window_percentage));
    }
    usize::try_from(window_percentage).map_err(|_| DepthError::InvalidWindow(window_percentage))
}
