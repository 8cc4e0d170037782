//! Prim's algorithm driven by an [`IndexedMinHeap`].
//!
//! Per-vertex working state (priority and parent) lives in an owned
//! [`PrimState`] rather than on the graph's vertices, so several runs can
//! share one graph. The engine moves from ready to done during a run and
//! must be reset with [`Prim::reset_vertices`] before it runs again.

use tracing::{Span, instrument};

use crate::{Edge, error::MstError, graph::Representation};

use super::{
    SpanningTree,
    heap::{INFINITE_PRIORITY, IndexedMinHeap},
};

/// The working state of one vertex.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VertexState {
    priority: u32,
    parent: Option<usize>,
}

impl VertexState {
    /// The sentinel state: infinite priority, no parent.
    pub const UNREACHED: Self = Self {
        priority: INFINITE_PRIORITY,
        parent: None,
    };

    /// Returns the weight of the cheapest known edge into the vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn priority(&self) -> u32 { self.priority }

    /// Returns the tree parent, or `None` for the root and unreached
    /// vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn parent(&self) -> Option<usize> { self.parent }
}

/// Owned per-vertex working state for Prim's algorithm.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrimState {
    vertices: Vec<VertexState>,
}

impl PrimState {
    /// Creates sentinel state for `vertex_count` vertices.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertices: vec![VertexState::UNREACHED; vertex_count],
        }
    }

    /// Returns the state of every vertex, indexed by id.
    #[must_use]
    pub fn vertices(&self) -> &[VertexState] {
        &self.vertices
    }

    /// Returns `true` when every vertex holds the sentinel state.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.vertices
            .iter()
            .all(|state| *state == VertexState::UNREACHED)
    }

    /// Restores the sentinel priority and parent on every vertex.
    pub fn reset(&mut self) {
        self.vertices.fill(VertexState::UNREACHED);
    }

    fn assign(&mut self, vertex: usize, priority: u32, parent: Option<usize>) {
        self.vertices[vertex] = VertexState { priority, parent };
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Phase {
    Ready,
    Done,
}

/// A reusable Prim engine sized to one vertex count.
///
/// # Examples
/// ```
/// use tsunagi_core::{Graph, Prim};
///
/// let mut graph = Graph::new(3)?;
/// graph.add_edge(2, 0, 1)?;
/// graph.add_edge(1, 1, 2)?;
/// graph.add_edge(5, 0, 2)?;
///
/// let mut engine = Prim::new(3)?;
/// let tree = engine.run(&graph.matrix())?;
/// assert_eq!(tree.total_weight(), 3);
/// assert_eq!(tree.parent(2), Some(1));
///
/// engine.reset_vertices();
/// assert_eq!(engine.run(&graph.list())?, tree);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct Prim {
    state: PrimState,
    heap: IndexedMinHeap,
    phase: Phase,
}

impl Prim {
    /// Creates an engine for graphs with `vertex_count` vertices.
    ///
    /// # Errors
    /// Returns [`MstError::EmptyGraph`] when `vertex_count` is zero.
    pub fn new(vertex_count: usize) -> Result<Self, MstError> {
        if vertex_count == 0 {
            return Err(MstError::EmptyGraph);
        }
        Ok(Self {
            state: PrimState::new(vertex_count),
            heap: IndexedMinHeap::new(vertex_count),
            phase: Phase::Ready,
        })
    }

    /// Returns the vertex count the engine was sized for.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.state.vertices.len()
    }

    /// Returns `true` when the engine can run without a reset.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    /// Returns the working state left behind by the last run.
    #[must_use]
    #[rustfmt::skip]
    pub const fn state(&self) -> &PrimState { &self.state }

    /// Restores sentinel priorities and parents, empties the heap and makes
    /// the engine ready again.
    pub fn reset_vertices(&mut self) {
        self.state.reset();
        self.heap.clear();
        self.phase = Phase::Ready;
    }

    /// Grows a tree from vertex 0 over `graph`.
    ///
    /// Each step relaxes every neighbour of the vertex finalised last, then
    /// extracts the cheapest vertex still in the heap.
    ///
    /// # Errors
    /// Returns [`MstError::StaleState`] when the engine already finished a
    /// run, [`MstError::VertexCountMismatch`] when `graph` has a different
    /// vertex count and [`MstError::Disconnected`] when some vertex cannot be
    /// reached from vertex 0.
    #[instrument(
        name = "prim.run",
        err,
        skip(self, graph),
        fields(vertex_count = self.vertex_count(), representation = %graph.kind(), total_weight),
    )]
    pub fn run<R>(&mut self, graph: &R) -> Result<PrimTree, MstError>
    where
        R: Representation + ?Sized,
    {
        if self.phase == Phase::Done {
            return Err(MstError::StaleState);
        }
        let vertex_count = self.vertex_count();
        if graph.vertex_count() != vertex_count {
            return Err(MstError::VertexCountMismatch {
                expected: vertex_count,
                actual: graph.vertex_count(),
            });
        }
        self.phase = Phase::Done;

        self.state.assign(0, 0, None);
        for vertex in 1..vertex_count {
            self.heap.insert(vertex, INFINITE_PRIORITY)?;
        }

        let mut finalised = 0;
        for _ in 1..vertex_count {
            for &neighbour in graph.neighbours(finalised) {
                if !self.heap.contains(neighbour) {
                    continue;
                }
                let Some(weight) = graph.weight_between(finalised, neighbour) else {
                    continue;
                };
                if weight < self.state.vertices[neighbour].priority {
                    self.heap.decrease_priority(neighbour, weight)?;
                    self.state.assign(neighbour, weight, Some(finalised));
                }
            }

            let Some((vertex, priority)) = self.heap.delete_min() else {
                break;
            };
            if priority == INFINITE_PRIORITY {
                return Err(MstError::Disconnected { vertex });
            }
            finalised = vertex;
        }

        let tree = PrimTree {
            slots: self.state.vertices.clone(),
        };
        Span::current().record("total_weight", tree.total_weight());
        Ok(tree)
    }
}

/// Prim output: the final state of every vertex, indexed by id.
///
/// Slot 0 is the root with no parent and priority 0; every other slot holds
/// the tree parent and the weight of the edge to it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrimTree {
    slots: Vec<VertexState>,
}

impl PrimTree {
    /// Returns every slot, indexed by vertex id.
    #[must_use]
    pub fn slots(&self) -> &[VertexState] {
        &self.slots
    }

    /// Returns the number of vertices covered.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns the tree parent of `vertex`.
    #[must_use]
    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.slots.get(vertex).and_then(VertexState::parent)
    }

    /// Returns the weight of the edge joining `vertex` to its parent.
    #[must_use]
    pub fn weight(&self, vertex: usize) -> Option<u32> {
        self.slots.get(vertex).map(VertexState::priority)
    }

    /// Sums the priorities of every slot except the root.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.slots
            .iter()
            .skip(1)
            .map(|slot| u64::from(slot.priority))
            .sum()
    }

    /// Returns the tree edges as `parent → vertex`, in vertex id order.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(vertex, slot)| {
                slot.parent
                    .map(|parent| Edge::new(slot.priority, parent, vertex))
            })
            .collect()
    }

    /// Converts the slots into an edge-list tree.
    #[must_use]
    pub fn to_spanning_tree(&self) -> SpanningTree {
        SpanningTree::new(self.edges(), self.slots.len())
    }
}

/// Runs Prim's algorithm once on a fresh engine.
///
/// # Errors
/// Returns [`MstError::EmptyGraph`] for a graph without vertices, otherwise
/// the errors of [`Prim::run`].
pub fn prim_mst<R>(graph: &R) -> Result<PrimTree, MstError>
where
    R: Representation + ?Sized,
{
    Prim::new(graph.vertex_count())?.run(graph)
}
