//! Transport layer (HTTP).
//!
//! Exposes the counter endpoint: count the hit, render the count, ship PNG.

pub mod http;
