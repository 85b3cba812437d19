//! Watchlist scan and movement-score ranking

use futures_util::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{AnalysisError, ScanError};
use crate::models::analysis::{AnalysisRecord, RankedShortlist, TickerOutcome};
use crate::services::market_data::MarketDataProvider;
use crate::signals::engine::StockAnalyzer;

pub const DEFAULT_LIMIT: usize = 5;

/// Runs the analyzer over a watchlist with bounded concurrency.
pub struct MarketScanner {
    provider: Arc<dyn MarketDataProvider + Send + Sync>,
    lookback_days: u32,
    fetch_timeout: Duration,
    concurrency: usize,
}

impl MarketScanner {
    pub fn new(provider: Arc<dyn MarketDataProvider + Send + Sync>, config: &Config) -> Self {
        Self {
            provider,
            lookback_days: config.lookback_days,
            fetch_timeout: config.fetch_timeout,
            concurrency: config.scan_concurrency.max(1),
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    /// Fetch and analyze one symbol. Every failure becomes `Skipped`.
    pub async fn analyze_symbol(&self, symbol: &str) -> TickerOutcome {
        match self.try_analyze(symbol).await {
            Ok(record) => {
                debug!(
                    symbol = %symbol,
                    score = record.movement_score,
                    "MarketScanner: analyzed {} (score {:.2})",
                    symbol,
                    record.movement_score
                );
                TickerOutcome::Analyzed(record)
            }
            Err(reason) => {
                warn!(symbol = %symbol, error = %reason, "MarketScanner: skipping {}", symbol);
                TickerOutcome::Skipped {
                    symbol: symbol.to_string(),
                    reason,
                }
            }
        }
    }

    async fn try_analyze(&self, symbol: &str) -> Result<AnalysisRecord, AnalysisError> {
        let series = tokio::time::timeout(
            self.fetch_timeout,
            self.provider.fetch_series(symbol, self.lookback_days),
        )
        .await
        .map_err(|_| AnalysisError::Timeout {
            symbol: symbol.to_string(),
            timeout: self.fetch_timeout,
        })?
        .map_err(|source| AnalysisError::Fetch {
            symbol: symbol.to_string(),
            source,
        })?;

        let info = tokio::time::timeout(self.fetch_timeout, self.provider.fetch_static_info(symbol))
            .await
            .unwrap_or_default();

        StockAnalyzer::analyze(symbol, &series, info)
    }

    /// Analyze every symbol, returning outcomes in watchlist order.
    pub async fn scan_outcomes(&self, watchlist: &[String]) -> Vec<TickerOutcome> {
        stream::iter(watchlist.iter().cloned())
            .map(|symbol| async move { self.analyze_symbol(&symbol).await })
            .buffered(self.concurrency)
            .collect()
            .await
    }

    /// Scan the watchlist and keep the `limit` highest movement scores.
    pub async fn scan(&self, watchlist: &[String], limit: usize) -> Result<RankedShortlist, ScanError> {
        info!(
            symbols = watchlist.len(),
            concurrency = self.concurrency,
            "MarketScanner: scanning {} symbols",
            watchlist.len()
        );
        let outcomes = self.scan_outcomes(watchlist).await;
        let shortlist = rank(outcomes, limit)?;
        info!(
            analyzed = shortlist.analyzed,
            skipped = shortlist.skipped,
            selected = ?shortlist.symbols(),
            "MarketScanner: {} analyzed, {} skipped",
            shortlist.analyzed,
            shortlist.skipped
        );
        Ok(shortlist)
    }
}

/// Keep successful outcomes, sort descending by movement score and truncate.
///
/// The sort is stable, so equal scores keep the order of `outcomes`.
pub fn rank(outcomes: Vec<TickerOutcome>, limit: usize) -> Result<RankedShortlist, ScanError> {
    let total = outcomes.len();
    let mut records: Vec<AnalysisRecord> = outcomes
        .into_iter()
        .filter_map(TickerOutcome::into_record)
        .collect();
    let analyzed = records.len();
    let skipped = total - analyzed;

    if records.is_empty() {
        return Err(ScanError::BatchEmpty { skipped });
    }

    records.sort_by(|a, b| b.movement_score.total_cmp(&a.movement_score));
    records.truncate(limit);

    Ok(RankedShortlist {
        records,
        analyzed,
        skipped,
    })
}
