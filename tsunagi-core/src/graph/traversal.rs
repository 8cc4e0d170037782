//! Depth-first reachability used to certify generated graphs as connected.

use super::Graph;

/// The result of a depth-first search.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Traversal {
    order: Vec<usize>,
    predecessors: Vec<Option<usize>>,
}

impl Traversal {
    /// Returns the vertices in the order they were first visited.
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Returns the search-tree parent of every vertex, indexed by id.
    ///
    /// The root and any unreached vertex have no predecessor.
    #[must_use]
    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.predecessors
    }

    /// Returns how many vertices the search reached.
    #[must_use]
    pub fn reached_count(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` when every vertex was reached.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.order.len() == self.predecessors.len()
    }
}

/// Runs an iterative depth-first search from `root`.
///
/// Neighbours are explored in adjacency insertion order, which yields the
/// same visit order as the recursive formulation. An out-of-range root
/// reaches nothing.
///
/// # Examples
/// ```
/// use tsunagi_core::{Graph, depth_first};
///
/// let mut graph = Graph::new(3)?;
/// graph.add_edge(1, 0, 1)?;
/// let traversal = depth_first(&graph, 0);
/// assert_eq!(traversal.order(), &[0, 1]);
/// assert!(!traversal.is_spanning());
/// # Ok::<(), tsunagi_core::GraphError>(())
/// ```
#[must_use]
pub fn depth_first(graph: &Graph, root: usize) -> Traversal {
    let vertex_count = graph.vertex_count();
    let mut visited = vec![false; vertex_count];
    let mut predecessors = vec![None; vertex_count];
    let mut order = Vec::with_capacity(vertex_count);

    if root >= vertex_count {
        return Traversal {
            order,
            predecessors,
        };
    }

    visited[root] = true;
    order.push(root);
    // (vertex, index of the next adjacent id to inspect)
    let mut stack = vec![(root, 0_usize)];

    while let Some(frame) = stack.last_mut() {
        let (vertex, cursor) = *frame;
        let adjacents = graph.vertices()[vertex].adjacents();
        let Some(&next) = adjacents.get(cursor) else {
            stack.pop();
            continue;
        };
        frame.1 = cursor + 1;
        if !visited[next] {
            visited[next] = true;
            predecessors[next] = Some(vertex);
            order.push(next);
            stack.push((next, 0));
        }
    }

    Traversal {
        order,
        predecessors,
    }
}
