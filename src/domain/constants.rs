// Decimal places used when quantizing values coming from the exchange.
// Prices are kept to satoshi precision, ratios are percentages with two places.
pub const PRICE_DECIMAL_PLACES: u32 = 8;
pub const RATIO_DECIMAL_PLACES: u32 = 2;

/// Number of one-percent steps between zero and the mid price.
pub const PERCENT_STEPS: u32 = 100;

pub const DEFAULT_WINDOW_PERCENTAGE: i64 = 10;
/// Ask levels keep going above 100%, so the bound only protects the level allocation
pub const MAX_WINDOW_PERCENTAGE: i64 = 10_000;
pub const DEFAULT_EXCHANGE: &str = "bittrex";

pub const DEFAULT_BITTREX_URL: &str = "https://bittrex.com/api/v1.1/public";
pub const DEFAULT_COINMARKETCAP_URL: &str = "https://api.coinmarketcap.com/v1/ticker/";
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 5000;

pub const DEFAULT_RANK_FETCH_LIMIT: u32 = 200;
pub const DEFAULT_RANK_DISPLAY_LIMIT: usize = 50;

/// Line printed between per-pair reports
pub const REPORT_SEPARATOR: &str = "-------------";
