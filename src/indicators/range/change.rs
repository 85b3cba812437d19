//! Day-over-day percentage change

use crate::models::price::PriceBar;

/// `(last - previous) / previous * 100`; a zero previous close yields 0.0
pub fn calculate_daily_change(bars: &[PriceBar]) -> Option<f64> {
    let [.., previous, last] = bars else {
        return None;
    };
    if previous.close == 0.0 {
        return Some(0.0);
    }
    Some((last.close - previous.close) / previous.close * 100.0)
}
