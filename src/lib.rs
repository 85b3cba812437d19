//! marketbrief: daily top-movers report engine.
//!
//! Pulls daily bars for a watchlist, computes technical indicators, ranks
//! tickers by movement score and publishes the result as a newsletter draft.

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod report;
pub mod services;
pub mod signals;
