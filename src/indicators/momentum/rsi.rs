//! RSI (Relative Strength Index) indicator

use crate::models::price::PriceBar;

pub const RSI_DEFAULT_PERIOD: usize = 14;

/// Value reported when the window has no losses (RS undefined).
pub const RSI_NO_LOSS_VALUE: f64 = 100.0;

/// Calculate RSI at the most recent bar
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss, both simple means over the trailing `period` changes
pub fn calculate_rsi(bars: &[PriceBar], period: usize) -> Option<f64> {
    if period == 0 || bars.len() < period + 1 {
        return None;
    }

    let mut gains = Vec::with_capacity(bars.len() - 1);
    let mut losses = Vec::with_capacity(bars.len() - 1);

    for pair in bars.windows(2) {
        let change = pair[1].close - pair[0].close;
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(change.abs());
        }
    }

    let avg_gain: f64 = gains.iter().rev().take(period).sum::<f64>() / period as f64;
    let avg_loss: f64 = losses.iter().rev().take(period).sum::<f64>() / period as f64;

    if avg_loss == 0.0 {
        return Some(RSI_NO_LOSS_VALUE);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - (100.0 / (1.0 + rs)))
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(bars: &[PriceBar]) -> Option<f64> {
    calculate_rsi(bars, RSI_DEFAULT_PERIOD)
}
