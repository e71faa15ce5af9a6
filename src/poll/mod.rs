//! Poll engine: one pass over a metric table per trigger.

pub mod cache;
pub mod cycle;

pub use cache::CallCache;
pub use cycle::Poller;
