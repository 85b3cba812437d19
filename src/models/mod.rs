//! Shared data models spanning the engine layers.

pub mod analysis;
pub mod indicators;
pub mod price;
pub mod signal;

pub use analysis::{
    AnalysisRecord, BenchmarkMove, MarketSummary, MarketTrend, RankedShortlist, TickerOutcome,
};
pub use indicators::IndicatorSet;
pub use price::{PriceBar, PriceSeries, StaticInfo};
pub use signal::{MaSignal, RsiSignal, SignalSet, TrendSignal};
