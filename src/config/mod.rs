//! Runtime configuration loaded from the environment.
//!
//! Binaries call [`Config::from_env`] once at startup and pass the result
//! down. Nothing below the binaries reads environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_WATCHLIST: &[&str] = &[
    // Tech
    "AAPL", "MSFT", "GOOGL", "AMZN", "META", "NVDA", "TSLA", "NFLX",
    // Financials
    "JPM", "BAC", "WFC", "GS", "MS",
    // Energy
    "XOM", "CVX", "COP", "SLB",
    // Healthcare
    "JNJ", "PFE", "UNH", "ABBV", "MRK",
    // Consumer
    "WMT", "COST", "PG", "KO", "PEP", "MCD",
    // Industrials
    "BA", "CAT", "GE", "HON", "UPS",
    // Crypto-related
    "COIN", "MSTR", "RIOT", "MARA",
    // ETFs
    "SPY", "QQQ", "IWM", "VIX",
];

/// Credentials for the newsletter platform. Publishing is skipped without them.
#[derive(Debug, Clone, PartialEq)]
pub struct PublisherConfig {
    pub api_url: Url,
    pub api_key: String,
    pub publication_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub environment: String,
    pub watchlist: Vec<String>,
    pub top_movers_limit: usize,
    pub lookback_days: u32,
    pub scan_concurrency: usize,
    pub fetch_timeout: Duration,
    pub benchmark_primary: String,
    pub benchmark_secondary: String,
    pub volatility_index: String,
    pub market_data_url: Url,
    pub publisher: Option<PublisherConfig>,
    pub report_title: String,
    pub output_dir: String,
    pub schedule: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "sandbox".to_string(),
            watchlist: DEFAULT_WATCHLIST.iter().map(|s| s.to_string()).collect(),
            top_movers_limit: 5,
            lookback_days: 90,
            scan_concurrency: 4,
            fetch_timeout: Duration::from_secs(10),
            benchmark_primary: "SPY".to_string(),
            benchmark_secondary: "QQQ".to_string(),
            volatility_index: "^VIX".to_string(),
            market_data_url: Url::parse("https://query1.finance.yahoo.com")
                .expect("static url is valid"),
            publisher: None,
            report_title: "Daily Market Movers".to_string(),
            output_dir: "newsletters".to_string(),
            schedule: "0 30 21 * * Mon-Fri".to_string(),
        }
    }
}

impl Config {
    /// Build a configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let watchlist = match get("WATCHLIST") {
            Some(raw) => parse_watchlist(&raw),
            None => defaults.watchlist,
        };
        if watchlist.is_empty() {
            return Err(invalid("WATCHLIST", "no symbols listed"));
        }

        let top_movers_limit = parse_or(get("TOP_MOVERS_LIMIT"), "TOP_MOVERS_LIMIT", defaults.top_movers_limit)?;
        if top_movers_limit == 0 {
            return Err(invalid("TOP_MOVERS_LIMIT", "must be > 0"));
        }
        let scan_concurrency = parse_or(get("SCAN_CONCURRENCY"), "SCAN_CONCURRENCY", defaults.scan_concurrency)?;
        if scan_concurrency == 0 {
            return Err(invalid("SCAN_CONCURRENCY", "must be > 0"));
        }
        let timeout_secs: u64 = parse_or(
            get("FETCH_TIMEOUT_SECONDS"),
            "FETCH_TIMEOUT_SECONDS",
            defaults.fetch_timeout.as_secs(),
        )?;
        if timeout_secs == 0 {
            return Err(invalid("FETCH_TIMEOUT_SECONDS", "must be > 0"));
        }

        let market_data_url = match get("MARKET_DATA_BASE_URL") {
            Some(raw) => parse_url("MARKET_DATA_BASE_URL", &raw)?,
            None => defaults.market_data_url,
        };

        let publisher = match (get("NEWSLETTER_API_KEY"), get("NEWSLETTER_PUBLICATION_ID")) {
            (Some(api_key), Some(publication_id)) => {
                let api_url = parse_url(
                    "NEWSLETTER_API_URL",
                    &get("NEWSLETTER_API_URL").unwrap_or_else(|| "https://api.beehiiv.com".to_string()),
                )?;
                Some(PublisherConfig {
                    api_url,
                    api_key,
                    publication_id,
                })
            }
            _ => None,
        };

        Ok(Self {
            environment: get("APP_ENV").unwrap_or(defaults.environment),
            watchlist,
            top_movers_limit,
            lookback_days: parse_or(get("LOOKBACK_DAYS"), "LOOKBACK_DAYS", defaults.lookback_days)?,
            scan_concurrency,
            fetch_timeout: Duration::from_secs(timeout_secs),
            benchmark_primary: get("BENCHMARK_PRIMARY").unwrap_or(defaults.benchmark_primary),
            benchmark_secondary: get("BENCHMARK_SECONDARY").unwrap_or(defaults.benchmark_secondary),
            volatility_index: get("VOLATILITY_INDEX").unwrap_or(defaults.volatility_index),
            market_data_url,
            publisher,
            report_title: get("REPORT_TITLE").unwrap_or(defaults.report_title),
            output_dir: get("REPORT_OUTPUT_DIR").unwrap_or(defaults.output_dir),
            schedule: get("REPORT_SCHEDULE").unwrap_or(defaults.schedule),
        })
    }

    pub fn is_production(&self) -> bool {
        matches!(self.environment.as_str(), "production" | "prod")
    }
}

/// Split a comma separated list, upper-casing and dropping duplicates while keeping order.
pub fn parse_watchlist(raw: &str) -> Vec<String> {
    let mut symbols: Vec<String> = Vec::new();
    for symbol in raw.split(',').map(|s| s.trim().to_uppercase()) {
        if !symbol.is_empty() && !symbols.contains(&symbol) {
            symbols.push(symbol);
        }
    }
    symbols
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(raw) => raw.parse().map_err(|e: T::Err| invalid(key, &e.to_string())),
        None => Ok(default),
    }
}

fn parse_url(key: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| invalid(key, &e.to_string()))
}

fn invalid(key: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}
