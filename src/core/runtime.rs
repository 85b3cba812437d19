//! One complete report run: summary, scan, render, archive, publish.

use chrono::NaiveDateTime;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::Config;
use crate::core::scanner::MarketScanner;
use crate::core::summary::MarketSummaryService;
use crate::error::RuntimeError;
use crate::models::analysis::{MarketSummary, RankedShortlist};
use crate::report::{HtmlDigestRenderer, Report, ReportArchive, ReportRenderer};
use crate::services::market_data::MarketDataProvider;
use crate::services::publisher::{PublishReceipt, Publisher};

#[derive(Debug, Clone, PartialEq)]
pub enum PublishOutcome {
    Published(PublishReceipt),
    /// No publisher configured; only the local copy exists.
    Skipped,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub shortlist: RankedShortlist,
    pub summary: MarketSummary,
    pub report: Report,
    pub local_copy: PathBuf,
    pub publish: PublishOutcome,
}

pub struct ReportRuntime {
    watchlist: Vec<String>,
    limit: usize,
    scanner: MarketScanner,
    summary: MarketSummaryService,
    renderer: Arc<dyn ReportRenderer + Send + Sync>,
    archive: ReportArchive,
    publisher: Option<Arc<dyn Publisher + Send + Sync>>,
}

impl ReportRuntime {
    pub fn new(config: &Config, provider: Arc<dyn MarketDataProvider + Send + Sync>) -> Self {
        Self {
            watchlist: config.watchlist.clone(),
            limit: config.top_movers_limit,
            scanner: MarketScanner::new(provider.clone(), config),
            summary: MarketSummaryService::new(provider, config),
            renderer: Arc::new(HtmlDigestRenderer::new(config.report_title.clone())),
            archive: ReportArchive::new(config.output_dir.clone()),
            publisher: None,
        }
    }

    pub fn with_publisher(mut self, publisher: Arc<dyn Publisher + Send + Sync>) -> Self {
        self.publisher = Some(publisher);
        self
    }

    pub fn with_renderer(mut self, renderer: Arc<dyn ReportRenderer + Send + Sync>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Produce, archive and (when configured) publish the report for `now`.
    ///
    /// An empty scan aborts the run before anything is rendered. Publishing
    /// failures are reported in the result, not as errors.
    pub async fn run_once(&self, now: NaiveDateTime) -> Result<RunReport, RuntimeError> {
        info!("ReportRuntime: fetching market summary");
        let summary = self.summary.fetch().await;

        let shortlist = self.scanner.scan(&self.watchlist, self.limit).await?;
        for (i, record) in shortlist.records.iter().enumerate() {
            info!(
                rank = i + 1,
                symbol = %record.symbol,
                price = record.indicators.current_price,
                change_pct = record.indicators.daily_change_pct,
                score = record.movement_score,
                "ReportRuntime: #{} {} ${:.2} ({:+.2}%)",
                i + 1,
                record.symbol,
                record.indicators.current_price,
                record.indicators.daily_change_pct
            );
        }

        let report = self.renderer.render(&shortlist, &summary, now.date());
        let local_copy = self.archive.save(&report, now).await?;

        let publish = match &self.publisher {
            Some(publisher) => match publisher.publish_draft(&report).await {
                Ok(receipt) => PublishOutcome::Published(receipt),
                Err(e) => {
                    warn!(
                        error = %e,
                        path = %local_copy.display(),
                        "ReportRuntime: publishing failed, local copy kept"
                    );
                    PublishOutcome::Failed(e.to_string())
                }
            },
            None => {
                warn!(
                    path = %local_copy.display(),
                    "ReportRuntime: no newsletter publication configured, upload the local copy manually"
                );
                PublishOutcome::Skipped
            }
        };

        Ok(RunReport {
            shortlist,
            summary,
            report,
            local_copy,
            publish,
        })
    }
}
