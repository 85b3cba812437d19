use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AnalysisError;
use crate::models::indicators::IndicatorSet;
use crate::models::signal::SignalSet;

pub const UNKNOWN_SECTOR: &str = "unknown";

/// Full analysis of one ticker for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub symbol: String,
    pub company_name: String,
    pub sector: String,
    pub indicators: IndicatorSet,
    pub signals: SignalSet,
    pub movement_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<u64>,
}

/// Result of analysing a single watchlist entry.
#[derive(Debug)]
pub enum TickerOutcome {
    Analyzed(AnalysisRecord),
    Skipped {
        symbol: String,
        reason: AnalysisError,
    },
}

impl TickerOutcome {
    pub fn symbol(&self) -> &str {
        match self {
            TickerOutcome::Analyzed(record) => &record.symbol,
            TickerOutcome::Skipped { symbol, .. } => symbol,
        }
    }

    pub fn is_analyzed(&self) -> bool {
        matches!(self, TickerOutcome::Analyzed(_))
    }

    pub fn into_record(self) -> Option<AnalysisRecord> {
        match self {
            TickerOutcome::Analyzed(record) => Some(record),
            TickerOutcome::Skipped { .. } => None,
        }
    }
}

/// Top movers in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedShortlist {
    pub records: Vec<AnalysisRecord>,
    pub analyzed: usize,
    pub skipped: usize,
}

impl RankedShortlist {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn symbols(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.symbol.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkMove {
    pub symbol: String,
    pub change_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketTrend {
    Bullish,
    Bearish,
}

impl fmt::Display for MarketTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketTrend::Bullish => f.write_str("Bullish"),
            MarketTrend::Bearish => f.write_str("Bearish"),
        }
    }
}

/// Broad-market snapshot. `None` marks a value as unavailable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSummary {
    pub benchmark_a: Option<BenchmarkMove>,
    pub benchmark_b: Option<BenchmarkMove>,
    pub volatility_index: Option<f64>,
    pub trend: Option<MarketTrend>,
}

impl MarketSummary {
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn is_unavailable(&self) -> bool {
        self.benchmark_a.is_none()
            && self.benchmark_b.is_none()
            && self.volatility_index.is_none()
            && self.trend.is_none()
    }
}
