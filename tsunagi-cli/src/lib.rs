//! Support library for the `tsunagi` binary.
//!
//! Exposes the command pipeline and logging set-up so integration tests can
//! drive a full comparison without spawning a subprocess.

pub mod cli;
pub mod logging;
