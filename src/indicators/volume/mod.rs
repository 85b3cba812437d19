//! Volume indicators: relative volume

pub mod ratio;

pub use ratio::*;
