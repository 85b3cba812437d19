//! Maps indicator values onto qualitative labels.

use crate::models::indicators::IndicatorSet;
use crate::models::signal::{MaSignal, RsiSignal, SignalSet, TrendSignal};

pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_OVERSOLD: f64 = 30.0;

pub fn classify_rsi(rsi: f64) -> RsiSignal {
    if rsi > RSI_OVERBOUGHT {
        RsiSignal::Overbought
    } else if rsi < RSI_OVERSOLD {
        RsiSignal::Oversold
    } else {
        RsiSignal::Neutral
    }
}

/// Strict chain: any partial ordering is Mixed.
pub fn classify_trend(price: f64, sma20: f64, sma50: f64) -> TrendSignal {
    if price > sma20 && sma20 > sma50 {
        TrendSignal::Bullish
    } else if price < sma20 && sma20 < sma50 {
        TrendSignal::Bearish
    } else {
        TrendSignal::Mixed
    }
}

/// Equal averages count as a death cross.
pub fn classify_ma(sma20: f64, sma50: f64) -> MaSignal {
    if sma20 > sma50 {
        MaSignal::GoldenCross
    } else {
        MaSignal::DeathCross
    }
}

pub fn classify(indicators: &IndicatorSet) -> SignalSet {
    SignalSet {
        rsi_signal: classify_rsi(indicators.rsi14),
        trend_signal: classify_trend(
            indicators.current_price,
            indicators.sma20,
            indicators.sma50,
        ),
        ma_signal: classify_ma(indicators.sma20, indicators.sma50),
    }
}
