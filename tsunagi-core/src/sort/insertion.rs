//! Insertion sort.

use crate::Edge;

/// Sorts `edges` by the full [`Edge`] order, swapping each element backwards
/// past every larger predecessor.
///
/// Stable and in place; quadratic in the worst case.
pub fn insertion_sort(edges: &mut [Edge]) {
    for index in 1..edges.len() {
        let mut cursor = index;
        while cursor > 0 && edges[cursor] < edges[cursor - 1] {
            edges.swap(cursor, cursor - 1);
            cursor -= 1;
        }
    }
}
