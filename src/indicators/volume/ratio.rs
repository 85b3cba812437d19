//! Volume ratio: today's volume against its trailing average

use crate::common::math;
use crate::models::price::PriceBar;

pub const VOLUME_AVERAGE_PERIOD: usize = 20;

/// Ratio reported when the trailing average volume is zero.
pub const VOLUME_RATIO_NEUTRAL: f64 = 1.0;

/// Current volume divided by the mean of the last `period` volumes (current bar included)
pub fn calculate_volume_ratio(bars: &[PriceBar], period: usize) -> Option<f64> {
    let volumes: Vec<f64> = bars.iter().map(|b| b.volume).collect();
    let average = math::sma(&volumes, period)?;
    let current = *volumes.last()?;

    if average <= 0.0 {
        return Some(VOLUME_RATIO_NEUTRAL);
    }

    Some(current / average)
}

pub fn calculate_volume_ratio_default(bars: &[PriceBar]) -> Option<f64> {
    calculate_volume_ratio(bars, VOLUME_AVERAGE_PERIOD)
}
