//! Per-key visit counters.
//!
//! The store is owned by `AppState` and handed to request handlers; there is
//! no process-global map.

pub mod store;

pub use store::{CounterStore, ShardedCounterStore};
