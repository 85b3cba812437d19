//! Core application primitives (scanner, summary, orchestrators)

pub mod bootstrap;
pub mod runtime;
pub mod scanner;
pub mod scheduler;
pub mod summary;

pub use bootstrap::*;
pub use runtime::*;
pub use scanner::*;
pub use scheduler::*;
pub use summary::*;
