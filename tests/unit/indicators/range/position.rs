//! Unit tests for 52-week range position

use marketbrief::indicators::range::{
    calculate_52w_position, calculate_range_position, FLAT_RANGE_POSITION, YEAR_WINDOW,
};
use marketbrief::models::price::PriceBar;

use crate::fixtures::{day, flat_series};

#[test]
fn test_position_empty_series() {
    assert!(calculate_52w_position(&[]).is_none());
}

#[test]
fn test_position_within_range() {
    let mut bars: Vec<PriceBar> = (0..10)
        .map(|i| PriceBar::new(day(i), 100.0, 110.0, 90.0, 100.0, 1000.0))
        .collect();
    bars.push(PriceBar::new(day(10), 100.0, 106.0, 104.0, 105.0, 1000.0));
    let range = calculate_52w_position(&bars).unwrap();
    assert_eq!(range.high, 110.0);
    assert_eq!(range.low, 90.0);
    assert!((range.position - 75.0).abs() < 1e-9);
}

#[test]
fn test_flat_series_uses_fallback() {
    let series = flat_series("FLAT", 60, 100.0);
    let range = calculate_52w_position(series.bars()).unwrap();
    assert_eq!(range.position, FLAT_RANGE_POSITION);
    assert_eq!(range.position, 50.0);
    assert_eq!(range.high, range.low);
}

#[test]
fn test_position_window_drops_old_bars() {
    let mut bars: Vec<PriceBar> = (0..48)
        .map(|i| PriceBar::new(day(i), 100.0, 1000.0, 90.0, 100.0, 1000.0))
        .collect();
    bars.extend((48..300).map(|i| PriceBar::new(day(i), 100.0, 120.0, 80.0, 100.0, 1000.0)));
    assert_eq!(bars.len() - 48, YEAR_WINDOW);

    let range = calculate_range_position(&bars, YEAR_WINDOW).unwrap();
    assert_eq!(range.high, 120.0);
    assert_eq!(range.low, 80.0);
    assert!((range.position - 50.0).abs() < 1e-9);
}
