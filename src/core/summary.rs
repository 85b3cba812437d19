//! Broad-market summary from benchmark and volatility series

use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use crate::config::Config;
use crate::error::SummaryError;
use crate::models::analysis::{BenchmarkMove, MarketSummary, MarketTrend};
use crate::models::price::PriceSeries;
use crate::services::market_data::MarketDataProvider;

/// Bars in the trend lookback window.
pub const TREND_WINDOW: usize = 5;

/// Calendar days requested for each summary series, enough for the trend window.
const SUMMARY_LOOKBACK_DAYS: u32 = 14;

fn one_day_change(series: &PriceSeries) -> Result<BenchmarkMove, SummaryError> {
    let closes = series.closes();
    let [.., previous, last] = closes.as_slice() else {
        return Err(SummaryError::TooShort {
            symbol: series.symbol.clone(),
            bars: closes.len(),
            required: 2,
        });
    };
    let change_pct = if *previous == 0.0 {
        0.0
    } else {
        (last - previous) / previous * 100.0
    };
    Ok(BenchmarkMove {
        symbol: series.symbol.clone(),
        change_pct,
    })
}

/// Last close against the first close of the trailing 5-bar window.
fn trend(series: &PriceSeries) -> Result<MarketTrend, SummaryError> {
    let closes = series.closes();
    if closes.len() < TREND_WINDOW {
        return Err(SummaryError::TooShort {
            symbol: series.symbol.clone(),
            bars: closes.len(),
            required: TREND_WINDOW,
        });
    }
    let last = closes[closes.len() - 1];
    let window_start = closes[closes.len() - TREND_WINDOW];
    Ok(if last > window_start {
        MarketTrend::Bullish
    } else {
        MarketTrend::Bearish
    })
}

/// Summarize two benchmarks and an optional volatility index.
pub fn summarize(
    benchmark_a: &PriceSeries,
    benchmark_b: &PriceSeries,
    volatility: Option<&PriceSeries>,
) -> Result<MarketSummary, SummaryError> {
    Ok(MarketSummary {
        benchmark_a: Some(one_day_change(benchmark_a)?),
        benchmark_b: Some(one_day_change(benchmark_b)?),
        volatility_index: volatility.and_then(|s| s.last()).map(|b| b.close),
        trend: Some(trend(benchmark_a)?),
    })
}

/// Fetches the summary series, degrading to an unavailable summary on failure.
pub struct MarketSummaryService {
    provider: Arc<dyn MarketDataProvider + Send + Sync>,
    benchmark_primary: String,
    benchmark_secondary: String,
    volatility_index: String,
    fetch_timeout: Duration,
}

impl MarketSummaryService {
    pub fn new(provider: Arc<dyn MarketDataProvider + Send + Sync>, config: &Config) -> Self {
        Self {
            provider,
            benchmark_primary: config.benchmark_primary.clone(),
            benchmark_secondary: config.benchmark_secondary.clone(),
            volatility_index: config.volatility_index.clone(),
            fetch_timeout: config.fetch_timeout,
        }
    }

    /// Fetch one summary series within the configured timeout.
    pub async fn fetch_series(&self, symbol: &str) -> Result<PriceSeries, SummaryError> {
        tokio::time::timeout(
            self.fetch_timeout,
            self.provider.fetch_series(symbol, SUMMARY_LOOKBACK_DAYS),
        )
        .await
        .map_err(|_| SummaryError::Timeout {
            symbol: symbol.to_string(),
            timeout: self.fetch_timeout,
        })?
        .map_err(|source| SummaryError::Fetch {
            symbol: symbol.to_string(),
            source,
        })
    }

    pub async fn fetch(&self) -> MarketSummary {
        let (a, b, vol) = tokio::join!(
            self.fetch_series(&self.benchmark_primary),
            self.fetch_series(&self.benchmark_secondary),
            self.fetch_series(&self.volatility_index),
        );

        let (a, b) = match (a, b) {
            (Ok(a), Ok(b)) => (a, b),
            (Err(e), _) | (_, Err(e)) => {
                warn!(error = %e, "MarketSummaryService: benchmark fetch failed, summary unavailable");
                return MarketSummary::unavailable();
            }
        };

        let vol = match vol {
            Ok(series) => Some(series),
            Err(e) => {
                warn!(symbol = %self.volatility_index, error = %e, "MarketSummaryService: volatility index unavailable");
                None
            }
        };

        summarize(&a, &b, vol.as_ref()).unwrap_or_else(|e| {
            warn!(error = %e, "MarketSummaryService: could not summarize, summary unavailable");
            MarketSummary::unavailable()
        })
    }
}
