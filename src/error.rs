//! Error types for the analysis pipeline and its collaborators.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Failure to produce an analysis record for one ticker. Always recovered by skipping.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("insufficient data for {symbol}: {bars} bars, need {required}")]
    InsufficientData {
        symbol: String,
        bars: usize,
        required: usize,
    },

    #[error("failed to fetch {symbol}: {source}")]
    Fetch {
        symbol: String,
        #[source]
        source: ProviderError,
    },

    #[error("fetch for {symbol} timed out after {timeout:?}")]
    Timeout { symbol: String, timeout: Duration },

    #[error("could not compute {indicator} for {symbol}")]
    Compute { symbol: String, indicator: String },
}

/// Errors raised by market data providers.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response: {0}")]
    Parse(String),

    #[error("no data for symbol {0}")]
    NotFound(String),

    #[error("empty series for symbol {0}")]
    Empty(String),
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("no ticker survived analysis ({skipped} skipped)")]
    BatchEmpty { skipped: usize },
}

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("failed to fetch {symbol}: {source}")]
    Fetch {
        symbol: String,
        #[source]
        source: ProviderError,
    },

    #[error("fetch for {symbol} timed out after {timeout:?}")]
    Timeout { symbol: String, timeout: Duration },

    #[error("series {symbol} has {bars} bars, need {required}")]
    TooShort {
        symbol: String,
        bars: usize,
        required: usize,
    },
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("publisher rejected request with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("publisher misconfigured: {0}")]
    Config(String),
}

impl PublishError {
    /// Whether another attempt might succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            PublishError::Http(e) => e.is_timeout() || e.is_connect(),
            PublishError::Status { status, .. } => *status == 429 || *status >= 500,
            PublishError::Config(_) => false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

/// Failure of a whole report run.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("failed to write report to {path}: {source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid schedule '{expr}': {reason}")]
    Schedule { expr: String, reason: String },
}

/// Failure to construct the production collaborators.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("market data provider: {0}")]
    Provider(#[from] ProviderError),

    #[error("publisher: {0}")]
    Publisher(#[from] PublishError),
}
