//! Yahoo Finance market data provider implementation

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::messages::{ChartResponse, ChartResult, QuoteSummaryResponse};
use crate::error::ProviderError;
use crate::models::price::{PriceBar, PriceSeries, StaticInfo};
use crate::services::market_data::MarketDataProvider;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

pub struct YahooMarketDataProvider {
    base_url: Url,
    client: reqwest::Client,
}

impl YahooMarketDataProvider {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self::with_client(base_url, client))
    }

    pub fn with_client(base_url: Url, client: reqwest::Client) -> Self {
        Self { base_url, client }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ProviderError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ProviderError::Parse(format!("unusable base url {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, ProviderError> {
        debug!(url = %url, "YahooMarketDataProvider: GET {}", url);
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status, body });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ProviderError::Parse(e.to_string()))
    }

    async fn fetch_quote_summary(&self, symbol: &str) -> Result<StaticInfo, ProviderError> {
        let mut url = self.endpoint(&["v10", "finance", "quoteSummary", symbol])?;
        url.query_pairs_mut()
            .append_pair("modules", "price,assetProfile");

        let response: QuoteSummaryResponse = self.get_json(url).await?;
        let result = response
            .quote_summary
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| ProviderError::NotFound(symbol.to_string()))?;

        let price = result.price;
        let name = price
            .as_ref()
            .and_then(|p| p.short_name.clone().or_else(|| p.long_name.clone()));
        let market_cap = price
            .and_then(|p| p.market_cap)
            .and_then(|m| m.raw)
            .filter(|v| v.is_finite() && *v > 0.0)
            .map(|v| v as u64);

        Ok(StaticInfo {
            name,
            sector: result.asset_profile.and_then(|a| a.sector),
            market_cap,
        })
    }
}

/// Convert column-oriented chart data into bars, dropping rows with any missing field.
pub fn bars_from_chart(result: ChartResult) -> Vec<PriceBar> {
    let Some(quote) = result.indicators.quote.into_iter().next() else {
        return Vec::new();
    };

    result
        .timestamp
        .iter()
        .enumerate()
        .filter_map(|(i, &ts)| {
            let date = DateTime::from_timestamp(ts, 0)?.date_naive();
            Some(PriceBar::new(
                date,
                (*quote.open.get(i)?)?,
                (*quote.high.get(i)?)?,
                (*quote.low.get(i)?)?,
                (*quote.close.get(i)?)?,
                (*quote.volume.get(i)?)?,
            ))
        })
        .collect()
}

#[async_trait::async_trait]
impl MarketDataProvider for YahooMarketDataProvider {
    async fn fetch_series(
        &self,
        symbol: &str,
        lookback_days: u32,
    ) -> Result<PriceSeries, ProviderError> {
        let end = Utc::now();
        let start = end - ChronoDuration::days(i64::from(lookback_days));

        let mut url = self.endpoint(&["v8", "finance", "chart", symbol])?;
        url.query_pairs_mut()
            .append_pair("period1", &start.timestamp().to_string())
            .append_pair("period2", &end.timestamp().to_string())
            .append_pair("interval", "1d")
            .append_pair("events", "history");

        let response: ChartResponse = self.get_json(url).await?;

        if let Some(error) = response.chart.error {
            return Err(ProviderError::Parse(format!(
                "{}: {}",
                error.code, error.description
            )));
        }

        let result = response
            .chart
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| ProviderError::NotFound(symbol.to_string()))?;

        let bars = bars_from_chart(result);
        if bars.is_empty() {
            return Err(ProviderError::Empty(symbol.to_string()));
        }

        debug!(
            symbol = %symbol,
            count = bars.len(),
            "YahooMarketDataProvider: fetched {} bars for {}",
            bars.len(),
            symbol
        );

        Ok(PriceSeries::new(symbol, bars))
    }

    async fn fetch_static_info(&self, symbol: &str) -> StaticInfo {
        match self.fetch_quote_summary(symbol).await {
            Ok(info) => info,
            Err(e) => {
                debug!(
                    symbol = %symbol,
                    error = %e,
                    "YahooMarketDataProvider: no static info for {}, using defaults",
                    symbol
                );
                StaticInfo::default()
            }
        }
    }
}
