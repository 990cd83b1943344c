use log::debug;
use rust_decimal::Decimal;

use super::window_size;
use crate::domain::constants::PERCENT_STEPS;
use crate::domain::enums::Side;
use crate::domain::errors::DepthError;
use crate::domain::model::depth::DepthLevel;
use crate::domain::model::order_book::{mid_price, OrderBookEntry};

/// Partitions raw bid and ask entries into `window_percentage` one-percent
/// levels on each side of the mid price.
///
/// Bid level `i` sits at `mid - (i + 1) * unit` and collects every bid priced
/// in `[price, price + unit)`. Ask level `i` sits at `mid + (i + 1) * unit` and
/// collects every ask priced in `(price - unit, price]`. Entries outside all
/// levels are ignored. Both vectors are ordered nearest to farthest.
pub fn create_depth_levels(
    bids: &[OrderBookEntry],
    asks: &[OrderBookEntry],
    window_percentage: i64,
) -> Result<(Vec<DepthLevel>, Vec<DepthLevel>), DepthError> {
    let window = window_size(window_percentage)?;
    let middle = mid_price(bids, asks)?;
    let unit = middle / Decimal::from(PERCENT_STEPS);
    debug!("Bucketizing around mid price {} with unit {} over {} levels", middle, unit, window);

    let mut bid_levels = Vec::with_capacity(window);
    let mut ask_levels = Vec::with_capacity(window);
    let (mut bid_price, mut ask_price) = (middle, middle);
    for _ in 0..window {
        bid_price = bid_price
            .checked_sub(unit)
            .ok_or(DepthError::DecimalOverflow(Side::Bid))?;
        bid_levels.push(DepthLevel::empty(bid_price));
        ask_price = ask_price
            .checked_add(unit)
            .ok_or(DepthError::DecimalOverflow(Side::Ask))?;
        ask_levels.push(DepthLevel::empty(ask_price));
    }

    for level in bid_levels.iter_mut() {
        let upper = level.price + unit;
        level.quantity = sum_quantities(
            bids.iter().filter(|entry| entry.price >= level.price && entry.price < upper),
            Side::Bid,
        )?;
    }

    for level in ask_levels.iter_mut() {
        let lower = level.price - unit;
        level.quantity = sum_quantities(
            asks.iter().filter(|entry| entry.price <= level.price && entry.price > lower),
            Side::Ask,
        )?;
    }

    Ok((bid_levels, ask_levels))
}

fn sum_quantities<'a>(
    mut entries: impl Iterator<Item = &'a OrderBookEntry>,
    side: Side,
) -> Result<Decimal, DepthError> {
    entries.try_fold(Decimal::ZERO, |acc, entry| {
        acc.checked_add(entry.quantity).ok_or(DepthError::DecimalOverflow(side))
    })
}
