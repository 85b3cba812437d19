//! Market data provider interface.

use std::collections::HashMap;

use crate::error::ProviderError;
use crate::models::price::{PriceSeries, StaticInfo};

#[async_trait::async_trait]
pub trait MarketDataProvider {
    /// Daily bars covering roughly the last `lookback_days` calendar days
    async fn fetch_series(
        &self,
        symbol: &str,
        lookback_days: u32,
    ) -> Result<PriceSeries, ProviderError>;

    /// Descriptive data for a symbol. Unknown fields stay `None`.
    async fn fetch_static_info(&self, symbol: &str) -> StaticInfo;
}

/// Provider backed by preloaded series, for offline runs and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMarketDataProvider {
    series: HashMap<String, PriceSeries>,
    info: HashMap<String, StaticInfo>,
}

impl InMemoryMarketDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, series: PriceSeries) -> Self {
        self.series.insert(series.symbol.clone(), series);
        self
    }

    pub fn with_info(mut self, symbol: &str, info: StaticInfo) -> Self {
        self.info.insert(symbol.to_string(), info);
        self
    }
}

#[async_trait::async_trait]
impl MarketDataProvider for InMemoryMarketDataProvider {
    async fn fetch_series(
        &self,
        symbol: &str,
        _lookback_days: u32,
    ) -> Result<PriceSeries, ProviderError> {
        self.series
            .get(symbol)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(symbol.to_string()))
    }

    async fn fetch_static_info(&self, symbol: &str) -> StaticInfo {
        self.info.get(symbol).cloned().unwrap_or_default()
    }
}
