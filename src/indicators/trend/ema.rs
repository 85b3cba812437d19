//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::price::PriceBar;

/// Calculate EMA for a specific period, evaluated at the most recent bar
pub fn calculate_ema(bars: &[PriceBar], period: usize) -> Option<f64> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    math::ema(&closes, period)
}
