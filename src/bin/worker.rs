//! Report worker
//!
//! Runs the daily report on the `REPORT_SCHEDULE` cron expression until
//! interrupted.

use dotenvy::dotenv;
use marketbrief::config::Config;
use marketbrief::core::{build_runtime, ReportScheduler};
use marketbrief::logging;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    let config = Config::from_env()?;
    logging::init_logging(&config);

    info!("Starting report worker");
    info!(environment = %config.environment, "Environment");

    let runtime = Arc::new(build_runtime(&config)?);
    let scheduler = ReportScheduler::new(runtime, &config.schedule)?;
    if let Some(next) = scheduler.next_run() {
        info!(next_run = %next, "Next report run at {}", next);
    }
    scheduler.start().await;

    // Graceful shutdown
    info!("Worker started, waiting for shutdown signal...");
    signal::ctrl_c().await?;
    info!("Shutting down worker...");
    scheduler.stop().await;
    info!("Worker stopped");

    Ok(())
}
