//! Shared test utilities used across tsunagi crates.

pub mod ci;
pub mod tracing;
