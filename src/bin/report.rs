//! Daily report, one shot
//!
//! Scans the watchlist, writes the local copy and creates the newsletter
//! draft, then exits. Exits non-zero when no ticker could be analyzed.

use dotenvy::dotenv;
use marketbrief::config::Config;
use marketbrief::core::{build_runtime, PublishOutcome};
use marketbrief::logging;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    let config = Config::from_env()?;
    logging::init_logging(&config);

    info!("Starting daily market report");
    info!(environment = %config.environment, "Environment");
    info!(
        symbols = config.watchlist.len(),
        limit = config.top_movers_limit,
        "Watchlist: {} symbols, top {}",
        config.watchlist.len(),
        config.top_movers_limit
    );

    let runtime = build_runtime(&config)?;

    let run = match runtime.run_once(chrono::Local::now().naive_local()).await {
        Ok(run) => run,
        Err(e) => {
            error!(error = %e, "Report run failed");
            return Err(e.into());
        }
    };

    info!(path = %run.local_copy.display(), "Local copy: {}", run.local_copy.display());
    match &run.publish {
        PublishOutcome::Published(receipt) => {
            info!(post_id = %receipt.id, "Draft created, review it in the newsletter dashboard")
        }
        PublishOutcome::Skipped => info!("Publishing skipped"),
        PublishOutcome::Failed(reason) => error!(reason = %reason, "Draft creation failed"),
    }

    Ok(())
}
