//! Cron-based scheduler for unattended daily report runs

use cron::Schedule;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::core::runtime::{PublishOutcome, ReportRuntime};
use crate::error::RuntimeError;

/// Scheduler that runs the report on every cron tick (UTC)
pub struct ReportScheduler {
    runtime: Arc<ReportRuntime>,
    schedule: Schedule,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl ReportScheduler {
    /// Create a new scheduler
    ///
    /// `cron_expr` uses the six-field format: second minute hour day month weekday
    pub fn new(runtime: Arc<ReportRuntime>, cron_expr: &str) -> Result<Self, RuntimeError> {
        let schedule = Schedule::from_str(cron_expr).map_err(|e| RuntimeError::Schedule {
            expr: cron_expr.to_string(),
            reason: e.to_string(),
        })?;

        info!(cron = %cron_expr, "ReportScheduler: created with cron '{}'", cron_expr);

        Ok(Self {
            runtime,
            schedule,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    /// Next scheduled run after now
    pub fn next_run(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.schedule.upcoming(chrono::Utc).next()
    }

    /// Start the scheduler. Does nothing if it is already running.
    pub async fn start(&self) {
        let mut h = self.handle.write().await;
        if h.is_some() {
            info!("ReportScheduler: already running");
            return;
        }

        let runtime = self.runtime.clone();
        let schedule = self.schedule.clone();

        let handle = tokio::spawn(async move {
            info!("ReportScheduler: started, waiting for cron schedule...");

            loop {
                let Some(next_tick) = schedule.upcoming(chrono::Utc).next() else {
                    info!("ReportScheduler: schedule has no upcoming ticks, stopping");
                    break;
                };
                let now = chrono::Utc::now();
                if next_tick > now {
                    let duration = (next_tick - now).to_std().unwrap_or_default();
                    tokio::time::sleep(duration).await;
                }

                info!(tick = %next_tick, "ReportScheduler: cron tick, running report");
                match runtime.run_once(chrono::Utc::now().naive_utc()).await {
                    Ok(run) => {
                        let published = matches!(run.publish, PublishOutcome::Published(_));
                        info!(
                            selected = run.shortlist.len(),
                            published = published,
                            path = %run.local_copy.display(),
                            "ReportScheduler: report run finished"
                        );
                    }
                    Err(e) => {
                        error!(error = %e, "ReportScheduler: report run failed");
                    }
                }
            }
        });

        *h = Some(handle);
        info!("ReportScheduler: started successfully");
    }

    /// Stop the scheduler
    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("ReportScheduler: stopped");
        }
    }

    /// Check if the scheduler is running
    pub async fn is_running(&self) -> bool {
        let handle = self.handle.read().await;
        handle.is_some()
    }
}
