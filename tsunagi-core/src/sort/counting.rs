//! Counting sort keyed on edge weight.

use crate::{Edge, error::SortError};

/// Sorts `edges` by weight using a cumulative count over `[1, radix]`.
///
/// Edges of equal weight keep their input order; start and end ids are not
/// consulted. All weights are validated before anything moves.
///
/// # Errors
/// Returns [`SortError::ZeroRadix`] when `radix` is zero and
/// [`SortError::WeightOutOfRange`] for the first weight outside
/// `[1, radix]`.
pub fn counting_sort(edges: &mut [Edge], radix: usize) -> Result<(), SortError> {
    if radix == 0 {
        return Err(SortError::ZeroRadix);
    }

    let keys = edges
        .iter()
        .enumerate()
        .map(|(index, edge)| {
            weight_key(edge, radix).ok_or(SortError::WeightOutOfRange {
                index,
                weight: edge.weight(),
                radix,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    // After the prefix pass, starts[key] is the output slot for the next edge
    // whose zero-based key is `key`.
    let mut starts = vec![0_usize; radix + 1];
    for &key in &keys {
        starts[key + 1] += 1;
    }
    for key in 0..radix {
        starts[key + 1] += starts[key];
    }

    let mut placed = edges.to_vec();
    for (edge, &key) in edges.iter().zip(&keys) {
        placed[starts[key]] = *edge;
        starts[key] += 1;
    }
    edges.copy_from_slice(&placed);
    Ok(())
}

/// Maps a weight in `[1, radix]` to its zero-based key.
fn weight_key(edge: &Edge, radix: usize) -> Option<usize> {
    usize::try_from(edge.weight())
        .ok()
        .filter(|weight| (1..=radix).contains(weight))
        .map(|weight| weight - 1)
}
