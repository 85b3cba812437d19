use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RsiSignal {
    Overbought,
    Oversold,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendSignal {
    Bullish,
    Bearish,
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaSignal {
    GoldenCross,
    DeathCross,
}

/// Qualitative labels derived from an indicator set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSet {
    pub rsi_signal: RsiSignal,
    pub trend_signal: TrendSignal,
    pub ma_signal: MaSignal,
}

impl fmt::Display for RsiSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RsiSignal::Overbought => "Overbought",
            RsiSignal::Oversold => "Oversold",
            RsiSignal::Neutral => "Neutral",
        };
        f.write_str(label)
    }
}

impl fmt::Display for TrendSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TrendSignal::Bullish => "Bullish",
            TrendSignal::Bearish => "Bearish",
            TrendSignal::Mixed => "Mixed / consolidating",
        };
        f.write_str(label)
    }
}

impl fmt::Display for MaSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MaSignal::GoldenCross => "Golden cross (bullish)",
            MaSignal::DeathCross => "Death cross (bearish)",
        };
        f.write_str(label)
    }
}
