//! Movement score used to rank tickers

/// `|daily change %| * volume ratio`
///
/// Favors tickers that moved a lot on unusually heavy volume. A ticker trading
/// at near-zero relative volume scores near zero whatever its price change.
pub fn movement_score(daily_change_pct: f64, volume_ratio: f64) -> f64 {
    daily_change_pct.abs() * volume_ratio
}
