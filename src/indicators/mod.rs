//! Indicator engine: pure functions over daily bars.
//!
//! Every function returns `None` when the series is too short for the
//! requested period. Degenerate denominators resolve to a fixed fallback
//! value instead of dividing by zero.

pub mod momentum;
pub mod range;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use momentum::*;
pub use range::*;
pub use trend::*;
pub use volatility::*;
pub use volume::*;
