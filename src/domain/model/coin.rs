use rust_decimal::Decimal;

/// Market statistics of one coin used by the volume ranking
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoinStats {
    pub rank: String,
    pub name: String,
    pub market_cap_usd: Option<Decimal>,
    pub volume_24h_usd: Option<Decimal>,
    pub percent_change_24h: Option<Decimal>,
}

impl CoinStats {
    /// 24h volume relative to market cap, None when either is missing or the cap is not positive
    pub fn volume_to_cap(&self) -> Option<Decimal> {
        let cap = self.market_cap_usd?;
        let volume = self.volume_24h_usd?;
        if cap <= Decimal::ZERO {
            return None;
        }
        volume.checked_div(cap)
    }
}
