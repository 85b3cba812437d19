//! Signal classification and per-ticker analysis.

pub mod classifier;
pub mod engine;
pub mod scoring;

pub use classifier::*;
pub use engine::*;
pub use scoring::*;
