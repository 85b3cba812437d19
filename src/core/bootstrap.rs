//! Wiring of production collaborators from configuration.

use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::core::runtime::ReportRuntime;
use crate::error::BootstrapError;
use crate::services::publisher::BeehiivPublisher;
use crate::services::yahoo::YahooMarketDataProvider;

/// Build a runtime backed by Yahoo Finance and, when configured, Beehiiv.
pub fn build_runtime(config: &Config) -> Result<ReportRuntime, BootstrapError> {
    let provider = YahooMarketDataProvider::new(config.market_data_url.clone(), config.fetch_timeout)?;
    let mut runtime = ReportRuntime::new(config, Arc::new(provider));

    match &config.publisher {
        Some(publisher_config) => {
            info!(
                publication_id = %publisher_config.publication_id,
                "Publishing drafts to {}",
                publisher_config.api_url
            );
            let publisher = BeehiivPublisher::new(publisher_config.clone())?;
            runtime = runtime.with_publisher(Arc::new(publisher));
        }
        None => {
            info!("NEWSLETTER_API_KEY / NEWSLETTER_PUBLICATION_ID not set, reports are saved locally only");
        }
    }

    Ok(runtime)
}
