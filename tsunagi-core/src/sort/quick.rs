//! Quicksort with Hoare partitioning.

use crate::Edge;

/// Sorts `edges` by the full [`Edge`] order.
///
/// Each pass partitions around the leftmost element. The smaller side is
/// sorted recursively and the larger side iteratively, which bounds the
/// stack depth by `log2(len)` even on already-sorted or reversed input.
pub fn quicksort(edges: &mut [Edge]) {
    let mut remaining = edges;
    while remaining.len() > 1 {
        let pivot = partition(remaining);
        let (left, rest) = std::mem::take(&mut remaining).split_at_mut(pivot);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            quicksort(left);
            remaining = right;
        } else {
            quicksort(right);
            remaining = left;
        }
    }
}

/// Partitions `edges` around `edges[0]` and returns the pivot's final index.
///
/// Requires `edges.len() >= 2`. Both scans stop at the slice bounds, so runs
/// of elements that all compare below (or above) the pivot cannot overrun.
fn partition(edges: &mut [Edge]) -> usize {
    let hi = edges.len() - 1;
    let pivot = edges[0];
    let mut i = 0;
    let mut j = hi + 1;

    loop {
        i += 1;
        while edges[i] < pivot {
            if i == hi {
                break;
            }
            i += 1;
        }

        j -= 1;
        while pivot < edges[j] {
            if j == 0 {
                break;
            }
            j -= 1;
        }

        if i >= j {
            break;
        }
        edges.swap(i, j);
    }

    edges.swap(0, j);
    j
}
