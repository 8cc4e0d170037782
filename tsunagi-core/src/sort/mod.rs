//! Edge sorting strategies used to prepare Kruskal input.
//!
//! Three interchangeable algorithms order an edge slice in place:
//!
//! - [`insertion_sort`]: stable, quadratic baseline ordering by the full
//!   [`Edge`] order.
//! - [`counting_sort`]: stable, linear in `edges + radix`, ordering by weight
//!   only. Every weight must lie in `[1, radix]`.
//! - [`quicksort`]: in-place Hoare partitioning around the leftmost element,
//!   ordering by the full [`Edge`] order but not stable.
//!
//! All three agree on the weight sequence they produce; they may differ in
//! how equal-weight edges are arranged.

mod counting;
mod insertion;
mod quick;

use std::fmt;

use tracing::instrument;

use crate::{Edge, error::SortError};

pub use self::{counting::counting_sort, insertion::insertion_sort, quick::quicksort};

/// Selects one of the edge sorting strategies.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SortAlgorithm {
    /// Stable insertion sort.
    Insertion,
    /// Stable counting sort keyed on weight.
    Counting,
    /// Hoare-partition quicksort.
    Quick,
}

impl SortAlgorithm {
    /// Every strategy, in the order comparisons run them.
    pub const ALL: [Self; 3] = [Self::Insertion, Self::Counting, Self::Quick];

    /// Returns the lowercase identifier used in logs and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Insertion => "insertion",
            Self::Counting => "counting",
            Self::Quick => "quicksort",
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sorts `edges` in place with the chosen strategy.
///
/// `radix` is the exclusive key bound used by counting sort (the vertex
/// count); the other strategies ignore it.
///
/// # Errors
/// Returns [`SortError`] when counting sort meets a zero radix or a weight
/// outside `[1, radix]`. The slice is untouched on error.
///
/// # Examples
/// ```
/// use tsunagi_core::{Edge, SortAlgorithm, sort_edges};
///
/// let mut edges = vec![Edge::new(3, 0, 1), Edge::new(1, 1, 2), Edge::new(2, 0, 2)];
/// sort_edges(&mut edges, SortAlgorithm::Counting, 3)?;
/// let weights: Vec<u32> = edges.iter().map(Edge::weight).collect();
/// assert_eq!(weights, vec![1, 2, 3]);
/// # Ok::<(), tsunagi_core::SortError>(())
/// ```
#[instrument(
    name = "sort.edges",
    level = "debug",
    err,
    skip(edges),
    fields(algorithm = %algorithm, edges = edges.len()),
)]
pub fn sort_edges(
    edges: &mut [Edge],
    algorithm: SortAlgorithm,
    radix: usize,
) -> Result<(), SortError> {
    match algorithm {
        SortAlgorithm::Insertion => insertion_sort(edges),
        SortAlgorithm::Counting => counting_sort(edges, radix)?,
        SortAlgorithm::Quick => quicksort(edges),
    }
    Ok(())
}

/// Consumes `edges` and returns them ordered by the chosen strategy.
///
/// # Errors
/// See [`sort_edges`].
pub fn sorted(
    mut edges: Vec<Edge>,
    algorithm: SortAlgorithm,
    radix: usize,
) -> Result<Vec<Edge>, SortError> {
    sort_edges(&mut edges, algorithm, radix)?;
    Ok(edges)
}

/// Returns `true` when weights never decrease along `edges`.
#[must_use]
pub fn is_sorted_by_weight(edges: &[Edge]) -> bool {
    edges
        .windows(2)
        .all(|pair| pair[0].weight() <= pair[1].weight())
}
