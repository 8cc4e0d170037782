//! Property-based tests for the Kruskal and Prim engines.
//!
//! Checks every Kruskal run (both representations, all three sorts) and
//! both Prim runs against a sequential oracle, validates the structural
//! shape of each tree, and confirms that reset engines reproduce their
//! previous output exactly.

mod equivalence;
mod helpers;
mod oracle;
mod reset;
mod strategies;
mod structural;
mod types;
