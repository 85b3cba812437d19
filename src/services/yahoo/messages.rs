//! Response payloads of the Yahoo Finance chart and quote summary endpoints.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
pub struct ChartIndicators {
    #[serde(default)]
    pub quote: Vec<Quote>,
}

/// Column-oriented OHLCV arrays. Yahoo leaves holes as `null`.
#[derive(Debug, Default, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummaryResponse {
    pub quote_summary: QuoteSummary,
}

#[derive(Debug, Deserialize)]
pub struct QuoteSummary {
    pub result: Option<Vec<QuoteSummaryResult>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummaryResult {
    pub price: Option<PriceModule>,
    pub asset_profile: Option<AssetProfile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceModule {
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub market_cap: Option<RawValue>,
}

#[derive(Debug, Deserialize)]
pub struct AssetProfile {
    pub sector: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawValue {
    pub raw: Option<f64>,
}
