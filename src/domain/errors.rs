use thiserror::Error;

use crate::domain::constants::MAX_WINDOW_PERCENTAGE;
use crate::domain::enums::Side;

/// Validation failures of the depth ratio computation.
///
/// None of these are fatal to a multi-pair run; the caller reports the
/// failing pair and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DepthError {
    #[error("order book has no {0} entries, mid price is undefined")]
    EmptyOrderBookSide(Side),

    #[error("no resting volume inside the depth window")]
    NoLiquidityInWindow,

    #[error("window percentage must be between 1 and {max}, got {0}", max = MAX_WINDOW_PERCENTAGE)]
    InvalidWindow(i64),

    #[error("expected {expected} {side} levels, got {actual}")]
    LevelCountMismatch {
        side: Side,
        expected: usize,
        actual: usize,
    },

    #[error("decimal overflow on the {0} side of the depth window")]
    DecimalOverflow(Side),
}
