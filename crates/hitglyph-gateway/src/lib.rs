//! hitglyph gateway library entry.
//!
//! This crate wires configuration, the counter store, and the rendering core
//! into an HTTP service. It is consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod counter;
pub mod obs;
pub mod ops;
pub mod router;
pub mod transport;
