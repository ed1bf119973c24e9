//! Lightweight in-process metrics.
//!
//! Request outcomes and render latency are stored as atomics and rendered in
//! Prometheus text format by the `/metrics` handler.

pub mod metrics;

pub use metrics::{CounterVec, GatewayMetrics, HistogramVec};
