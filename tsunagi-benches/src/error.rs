//! Benchmark setup error type.
//!
//! Lets setup code propagate failures with `?` so bench files only panic in
//! one place.

use tsunagi_core::{GraphError, MstError, SortError};

/// Errors raised while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Graph generation failed.
    #[error("graph generation failed: {0}")]
    Graph(#[from] GraphError),
    /// Sorting the fixture edges failed.
    #[error("edge sort failed: {0}")]
    Sort(#[from] SortError),
    /// An MST engine could not be built or run.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
}
