//! Price-range indicators: 52-week position, daily change

pub mod change;
pub mod position;

pub use change::*;
pub use position::*;
