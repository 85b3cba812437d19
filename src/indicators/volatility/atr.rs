//! ATR (Average True Range) indicator

use crate::common::math;
use crate::models::price::PriceBar;

pub const ATR_DEFAULT_PERIOD: usize = 14;

/// Calculate ATR (Average True Range)
///
/// True range starts at the second bar, since the first has no previous close.
/// ATR is the simple mean of the last `period` true ranges.
pub fn calculate_atr(bars: &[PriceBar], period: usize) -> Option<f64> {
    if period == 0 || bars.len() < period + 1 {
        return None;
    }

    let tr_values: Vec<f64> = bars
        .windows(2)
        .map(|pair| math::true_range(pair[1].high, pair[1].low, pair[0].close))
        .collect();

    math::sma(&tr_values, period)
}

/// Calculate ATR with default period (14)
pub fn calculate_atr_default(bars: &[PriceBar]) -> Option<f64> {
    calculate_atr(bars, ATR_DEFAULT_PERIOD)
}
