//! Yahoo Finance chart API adapter

pub mod messages;
pub mod provider;

pub use provider::YahooMarketDataProvider;
