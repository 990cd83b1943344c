pub mod analysis;
pub mod config_loader;
pub mod domain;
pub mod infrastructure;

pub use analysis::market_depth::{compute_depth_ratio, run_depth_report, ReportSummary};
pub use domain::enums::*;
pub use domain::errors::DepthError;
pub use domain::model::depth::*;
pub use domain::model::order_book::*;
pub use domain::model::ticker::*;
pub use domain::traits::*;
