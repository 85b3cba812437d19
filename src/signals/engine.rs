//! Per-ticker analysis: indicators, signals and movement score.

use crate::error::AnalysisError;
use crate::indicators::{
    calculate_52w_position, calculate_atr, calculate_daily_change, calculate_ema, calculate_rsi,
    calculate_sma, calculate_volume_ratio, ATR_DEFAULT_PERIOD, RSI_DEFAULT_PERIOD,
    VOLUME_AVERAGE_PERIOD,
};
use crate::models::analysis::{AnalysisRecord, UNKNOWN_SECTOR};
use crate::models::indicators::IndicatorSet;
use crate::models::price::{PriceSeries, StaticInfo};
use crate::signals::classifier::classify;
use crate::signals::scoring::movement_score;

/// Longest lookback used by the engine (SMA 50).
pub const MIN_BARS: usize = 50;

pub struct StockAnalyzer;

impl StockAnalyzer {
    /// Analyze one ticker's series.
    ///
    /// Series shorter than [`MIN_BARS`] are rejected with `InsufficientData`.
    pub fn analyze(
        symbol: &str,
        series: &PriceSeries,
        info: StaticInfo,
    ) -> Result<AnalysisRecord, AnalysisError> {
        if series.len() < MIN_BARS {
            return Err(AnalysisError::InsufficientData {
                symbol: symbol.to_string(),
                bars: series.len(),
                required: MIN_BARS,
            });
        }

        let indicators = Self::compute_indicators(symbol, series)?;

        if let Some(field) = indicators.non_finite_fields().first() {
            return Err(compute_error(symbol, field));
        }

        let signals = classify(&indicators);
        let score = movement_score(indicators.daily_change_pct, indicators.volume_ratio);

        Ok(AnalysisRecord {
            symbol: symbol.to_string(),
            company_name: info.name.unwrap_or_else(|| symbol.to_string()),
            sector: info.sector.unwrap_or_else(|| UNKNOWN_SECTOR.to_string()),
            indicators,
            signals,
            movement_score: score,
            market_cap: info.market_cap,
        })
    }

    /// Compute the indicator snapshot, assuming the length guard already passed.
    pub fn compute_indicators(
        symbol: &str,
        series: &PriceSeries,
    ) -> Result<IndicatorSet, AnalysisError> {
        let bars = series.bars();
        let last = bars.last().ok_or_else(|| compute_error(symbol, "current_price"))?;
        let previous = bars
            .len()
            .checked_sub(2)
            .map(|i| &bars[i])
            .ok_or_else(|| compute_error(symbol, "previous_close"))?;

        let range = calculate_52w_position(bars).ok_or_else(|| compute_error(symbol, "52w"))?;

        Ok(IndicatorSet {
            rsi14: calculate_rsi(bars, RSI_DEFAULT_PERIOD)
                .ok_or_else(|| compute_error(symbol, "rsi14"))?,
            sma20: calculate_sma(bars, 20).ok_or_else(|| compute_error(symbol, "sma20"))?,
            sma50: calculate_sma(bars, 50).ok_or_else(|| compute_error(symbol, "sma50"))?,
            ema12: calculate_ema(bars, 12).ok_or_else(|| compute_error(symbol, "ema12"))?,
            ema26: calculate_ema(bars, 26).ok_or_else(|| compute_error(symbol, "ema26"))?,
            atr14: calculate_atr(bars, ATR_DEFAULT_PERIOD)
                .ok_or_else(|| compute_error(symbol, "atr14"))?,
            volume_ratio: calculate_volume_ratio(bars, VOLUME_AVERAGE_PERIOD)
                .ok_or_else(|| compute_error(symbol, "volume_ratio"))?,
            high_52w: range.high,
            low_52w: range.low,
            position_52w: range.position,
            current_price: last.close,
            previous_close: previous.close,
            daily_change_pct: calculate_daily_change(bars)
                .ok_or_else(|| compute_error(symbol, "daily_change_pct"))?,
        })
    }
}

fn compute_error(symbol: &str, indicator: &str) -> AnalysisError {
    AnalysisError::Compute {
        symbol: symbol.to_string(),
        indicator: indicator.to_string(),
    }
}
