//! Adapters for external systems: market data and newsletter publishing.

pub mod market_data;
pub mod publisher;
pub mod yahoo;

pub use market_data::{InMemoryMarketDataProvider, MarketDataProvider};
pub use publisher::{BeehiivPublisher, PublishReceipt, Publisher};
pub use yahoo::YahooMarketDataProvider;
