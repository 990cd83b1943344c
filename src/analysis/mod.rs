pub mod market_depth;
pub mod volume_rank;
