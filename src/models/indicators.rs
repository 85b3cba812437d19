use serde::{Deserialize, Serialize};

/// Per-ticker indicator snapshot, derived from a single price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub rsi14: f64,
    pub sma20: f64,
    pub sma50: f64,
    pub ema12: f64,
    pub ema26: f64,
    pub atr14: f64,
    pub volume_ratio: f64,
    pub high_52w: f64,
    pub low_52w: f64,
    pub position_52w: f64,
    pub current_price: f64,
    pub previous_close: f64,
    pub daily_change_pct: f64,
}

impl IndicatorSet {
    /// Names of fields holding non-finite values.
    pub fn non_finite_fields(&self) -> Vec<&'static str> {
        [
            ("rsi14", self.rsi14),
            ("sma20", self.sma20),
            ("sma50", self.sma50),
            ("ema12", self.ema12),
            ("ema26", self.ema26),
            ("atr14", self.atr14),
            ("volume_ratio", self.volume_ratio),
            ("high_52w", self.high_52w),
            ("low_52w", self.low_52w),
            ("position_52w", self.position_52w),
            ("current_price", self.current_price),
            ("previous_close", self.previous_close),
            ("daily_change_pct", self.daily_change_pct),
        ]
        .into_iter()
        .filter(|(_, v)| !v.is_finite())
        .map(|(name, _)| name)
        .collect()
    }
}
