//! Windowed statistics over plain `f64` slices.

/// Arithmetic mean. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean of the trailing `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    mean(&values[values.len() - period..])
}

/// Exponential moving average at the last value, smoothing `2 / (period + 1)`.
///
/// The recursion is seeded with the first value, so every bar contributes and
/// no separate warm-up average is taken.
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let alpha = 2.0 / (period as f64 + 1.0);
    let mut iter = values.iter();
    let seed = *iter.next()?;
    Some(iter.fold(seed, |prev, &v| alpha * v + (1.0 - alpha) * prev))
}

pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    (high - low)
        .max((high - prev_close).abs())
        .max((low - prev_close).abs())
}

pub fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

pub fn min(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}
