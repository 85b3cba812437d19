//! Series builders shared by the unit tests

#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use marketbrief::models::price::{PriceBar, PriceSeries};

pub fn day(i: usize) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(i as i64)
}

/// Bars with the given closes, a 1.0 high/low spread and constant volume.
pub fn bars_from_closes(closes: &[f64]) -> Vec<PriceBar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| PriceBar::new(day(i), c, c + 0.5, c - 0.5, c, 1000.0))
        .collect()
}

pub fn series_from_closes(symbol: &str, closes: &[f64]) -> PriceSeries {
    PriceSeries::new(symbol, bars_from_closes(closes))
}

/// Constant price, zero spread.
pub fn flat_series(symbol: &str, count: usize, price: f64) -> PriceSeries {
    let bars = (0..count)
        .map(|i| PriceBar::new(day(i), price, price, price, price, 1000.0))
        .collect();
    PriceSeries::new(symbol, bars)
}

/// Flat at 100 until the last bar, which moves by `change_pct` on a volume
/// sized so the 20-bar volume ratio equals `volume_ratio`.
pub fn mover_series(symbol: &str, count: usize, change_pct: f64, volume_ratio: f64) -> PriceSeries {
    let base_volume = 1000.0;
    let last_volume = 19.0 * base_volume * volume_ratio / (20.0 - volume_ratio);
    let last_close = 100.0 * (1.0 + change_pct / 100.0);

    let mut bars: Vec<PriceBar> = (0..count - 1)
        .map(|i| PriceBar::new(day(i), 100.0, 100.5, 99.5, 100.0, base_volume))
        .collect();
    bars.push(PriceBar::new(
        day(count - 1),
        100.0,
        last_close.max(100.0) + 0.5,
        last_close.min(100.0) - 0.5,
        last_close,
        last_volume,
    ));
    PriceSeries::new(symbol, bars)
}

/// Deterministic pseudo-random walk for property checks.
pub fn random_walk(count: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    let mut price = 100.0;
    (0..count)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let step = ((state >> 33) as f64 / (1u64 << 31) as f64) - 0.5;
            price = (price + step * 4.0).max(1.0);
            price
        })
        .collect()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
