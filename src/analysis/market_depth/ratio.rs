use rust_decimal::Decimal;

use super::window_size;
use crate::domain::constants::RATIO_DECIMAL_PLACES;
use crate::domain::enums::Side;
use crate::domain::errors::DepthError;
use crate::domain::model::depth::{DepthLevel, DepthRatio};
use crate::domain::numeric::quantize;

/// Reduces bucketized levels to a weighted bid/ask percentage pair.
///
/// Both sides must hold exactly `window_percentage` levels, nearest first.
/// The level nearest the mid price weighs `window_percentage`, the farthest
/// weighs 1. Each ratio is rounded on its own, so the pair may miss 100 by a
/// rounding step.
pub fn calculate_ratio(
    bid_levels: &[DepthLevel],
    ask_levels: &[DepthLevel],
    window_percentage: i64,
) -> Result<DepthRatio, DepthError> {
    let window = window_size(window_percentage)?;
    check_level_count(bid_levels, window, Side::Bid)?;
    check_level_count(ask_levels, window, Side::Ask)?;

    let bid_weighted = weighted_quantity(bid_levels, Side::Bid)?;
    let ask_weighted = weighted_quantity(ask_levels, Side::Ask)?;
    let total = bid_weighted
        .checked_add(ask_weighted)
        .ok_or(DepthError::DecimalOverflow(Side::Bid))?;
    if total.is_zero() {
        return Err(DepthError::NoLiquidityInWindow);
    }

    Ok(DepthRatio {
        bid_ratio: percentage(bid_weighted, total, Side::Bid)?,
        ask_ratio: percentage(ask_weighted, total, Side::Ask)?,
    })
}

/// Sum of level quantities with linearly decaying weights, from
/// `levels.len()` for the nearest level down to 1 for the farthest
pub fn weighted_quantity(levels: &[DepthLevel], side: Side) -> Result<Decimal, DepthError> {
    let count = levels.len();
    levels
        .iter()
        .enumerate()
        .try_fold(Decimal::ZERO, |acc, (index, level)| {
            Decimal::from(count - index)
                .checked_mul(level.quantity)
                .and_then(|weighted| acc.checked_add(weighted))
                .ok_or(DepthError::DecimalOverflow(side))
        })
}

fn check_level_count(levels: &[DepthLevel], window: usize, side: Side) -> Result<(), DepthError> {
    if levels.len() != window {
        return Err(DepthError::LevelCountMismatch {
            side,
            expected: window,
            actual: levels.len(),
        });
    }
    Ok(())
}

fn percentage(part: Decimal, total: Decimal, side: Side) -> Result<Decimal, DepthError> {
    let share = part
        .checked_div(total)
        .and_then(|share| share.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or(DepthError::DecimalOverflow(side))?;
    Ok(quantize(share, RATIO_DECIMAL_PLACES))
}
