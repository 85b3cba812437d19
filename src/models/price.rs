use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day of OHLCV data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PriceBar {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Chronologically ordered daily bars for one ticker. The last bar is the most recent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub symbol: String,
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Build a series, sorting bars by date. Missing days are left as gaps.
    pub fn new(symbol: impl Into<String>, mut bars: Vec<PriceBar>) -> Self {
        bars.sort_by_key(|b| b.date);
        Self {
            symbol: symbol.into(),
            bars,
        }
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn last(&self) -> Option<&PriceBar> {
        self.bars.last()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }
}

/// Descriptive data supplied by the ingestion adapter and passed through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<u64>,
}

impl StaticInfo {
    pub fn new(name: impl Into<String>, sector: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            sector: Some(sector.into()),
            market_cap: None,
        }
    }

    pub fn with_market_cap(mut self, market_cap: u64) -> Self {
        self.market_cap = Some(market_cap);
        self
    }
}
