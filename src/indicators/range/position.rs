//! Position of the last close inside the trailing high/low range

use crate::common::math;
use crate::models::price::PriceBar;

/// Trading days in 52 weeks.
pub const YEAR_WINDOW: usize = 252;

/// Position reported when the range is flat (high == low).
pub const FLAT_RANGE_POSITION: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangePosition {
    pub high: f64,
    pub low: f64,
    /// 0 at the range low, 100 at the range high
    pub position: f64,
}

/// Locate the last close within the max High / min Low of the last `window` bars.
///
/// Shorter series use every available bar.
pub fn calculate_range_position(bars: &[PriceBar], window: usize) -> Option<RangePosition> {
    if window == 0 {
        return None;
    }
    let recent = &bars[bars.len().saturating_sub(window)..];
    let close = recent.last()?.close;

    let highs: Vec<f64> = recent.iter().map(|b| b.high).collect();
    let lows: Vec<f64> = recent.iter().map(|b| b.low).collect();
    let high = math::max(&highs)?;
    let low = math::min(&lows)?;

    let span = high - low;
    let position = if span > 0.0 {
        (close - low) / span * 100.0
    } else {
        FLAT_RANGE_POSITION
    };

    Some(RangePosition {
        high,
        low,
        position,
    })
}

pub fn calculate_52w_position(bars: &[PriceBar]) -> Option<RangePosition> {
    calculate_range_position(bars, YEAR_WINDOW)
}
