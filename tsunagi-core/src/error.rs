//! Error types for the tsunagi core library.
//!
//! Every engine reports precondition violations through a dedicated enum with
//! a stable machine-readable code, and [`TsunagiError`] gathers them behind a
//! single result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Errors raised while building or generating a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// The graph needs more vertices than were requested.
    #[error("graph requires at least {min} vertices (got {got})")]
    TooFewVertices {
        /// The vertex count supplied by the caller.
        got: usize,
        /// The smallest vertex count accepted by the operation.
        min: usize,
    },
    /// The edge probability was not a real number in `[0, 1]`.
    #[error("edge probability must lie in [0, 1] (got {got})")]
    InvalidProbability {
        /// The rejected probability.
        got: f64,
    },
    /// An edge referenced a vertex outside `0..vertex_count`.
    #[error("edge references vertex {vertex}, but vertex_count is {vertex_count}")]
    InvalidVertexId {
        /// The offending vertex id.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge connected a vertex to itself.
    #[error("self loop on vertex {vertex} is not allowed")]
    SelfLoop {
        /// The vertex at both ends of the edge.
        vertex: usize,
    },
    /// The undirected edge already exists.
    #[error("edge ({start}, {end}) already exists")]
    DuplicateEdge {
        /// Start vertex of the rejected edge.
        start: usize,
        /// End vertex of the rejected edge.
        end: usize,
    },
    /// Edge weights must be positive.
    #[error("edge ({start}, {end}) has zero weight")]
    ZeroWeight {
        /// Start vertex of the rejected edge.
        start: usize,
        /// End vertex of the rejected edge.
        end: usize,
    },
    /// The weight is reserved as the unreached priority of Prim's heap.
    #[error("edge ({start}, {end}) has weight {weight}, above the maximum {max}")]
    WeightTooLarge {
        /// Start vertex of the rejected edge.
        start: usize,
        /// End vertex of the rejected edge.
        end: usize,
        /// The rejected weight.
        weight: u32,
        /// The largest weight accepted.
        max: u32,
    },
    /// The adjacency matrix for the requested vertex count cannot be sized.
    #[error("{vertex_count} vertices overflow the adjacency matrix size")]
    TooManyVertices {
        /// The vertex count supplied by the caller.
        vertex_count: usize,
    },
    /// The generator was configured with a zero attempt budget.
    #[error("max_attempts must be at least 1")]
    InvalidMaxAttempts,
    /// No connected graph was produced within the attempt budget.
    #[error("no connected graph generated after {attempts} attempts")]
    ConnectivityNotReached {
        /// Number of generation attempts made.
        attempts: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The graph needs more vertices than were requested.
        TooFewVertices => TooFewVertices { .. } => "GRAPH_TOO_FEW_VERTICES",
        /// The edge probability was not a real number in `[0, 1]`.
        InvalidProbability => InvalidProbability { .. } => "GRAPH_INVALID_PROBABILITY",
        /// An edge referenced a vertex outside the graph.
        InvalidVertexId => InvalidVertexId { .. } => "GRAPH_INVALID_VERTEX_ID",
        /// An edge connected a vertex to itself.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// The undirected edge already exists.
        DuplicateEdge => DuplicateEdge { .. } => "GRAPH_DUPLICATE_EDGE",
        /// Edge weights must be positive.
        ZeroWeight => ZeroWeight { .. } => "GRAPH_ZERO_WEIGHT",
        /// The weight collides with the unreached priority.
        WeightTooLarge => WeightTooLarge { .. } => "GRAPH_WEIGHT_TOO_LARGE",
        /// The adjacency matrix size overflows.
        TooManyVertices => TooManyVertices { .. } => "GRAPH_TOO_MANY_VERTICES",
        /// The generator was configured with a zero attempt budget.
        InvalidMaxAttempts => InvalidMaxAttempts => "GRAPH_INVALID_MAX_ATTEMPTS",
        /// No connected graph was produced within the attempt budget.
        ConnectivityNotReached => ConnectivityNotReached { .. } => "GRAPH_CONNECTIVITY_NOT_REACHED",
    }
}

/// Errors raised by the edge sorting routines.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SortError {
    /// Counting sort was asked to use an empty key range.
    #[error("counting sort radix must be at least 1")]
    ZeroRadix,
    /// Counting sort met a weight outside `[1, radix]`.
    #[error("edge {index} has weight {weight}, outside the counting range [1, {radix}]")]
    WeightOutOfRange {
        /// Position of the offending edge in the input.
        index: usize,
        /// The offending weight.
        weight: u32,
        /// The configured radix.
        radix: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`SortError`] variants.
    enum SortErrorCode for SortError {
        /// Counting sort was asked to use an empty key range.
        ZeroRadix => ZeroRadix => "SORT_ZERO_RADIX",
        /// Counting sort met a weight outside its key range.
        WeightOutOfRange => WeightOutOfRange { .. } => "SORT_WEIGHT_OUT_OF_RANGE",
    }
}

/// Errors raised by [`crate::IndexedMinHeap`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum HeapError {
    /// The vertex id does not fit the heap's position index.
    #[error("vertex {vertex} is outside the heap capacity {capacity}")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// Number of ids the heap can index.
        capacity: usize,
    },
    /// The vertex is already live in the heap.
    #[error("vertex {vertex} is already in the heap")]
    AlreadyPresent {
        /// The duplicated vertex id.
        vertex: usize,
    },
    /// The vertex is not live in the heap.
    #[error("vertex {vertex} is not in the heap")]
    NotPresent {
        /// The missing vertex id.
        vertex: usize,
    },
    /// A decrease-key request tried to raise the priority.
    #[error("cannot raise priority of vertex {vertex} from {current} to {requested}")]
    PriorityIncrease {
        /// The vertex whose priority was updated.
        vertex: usize,
        /// The priority currently stored.
        current: u32,
        /// The rejected priority.
        requested: u32,
    },
}

define_error_codes! {
    /// Stable codes describing [`HeapError`] variants.
    enum HeapErrorCode for HeapError {
        /// The vertex id does not fit the heap's position index.
        VertexOutOfRange => VertexOutOfRange { .. } => "HEAP_VERTEX_OUT_OF_RANGE",
        /// The vertex is already live in the heap.
        AlreadyPresent => AlreadyPresent { .. } => "HEAP_ALREADY_PRESENT",
        /// The vertex is not live in the heap.
        NotPresent => NotPresent { .. } => "HEAP_NOT_PRESENT",
        /// A decrease-key request tried to raise the priority.
        PriorityIncrease => PriorityIncrease { .. } => "HEAP_PRIORITY_INCREASE",
    }
}

/// Errors returned while computing a minimum spanning tree.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// The caller requested an MST for an empty graph.
    #[error("cannot compute an MST for an empty graph")]
    EmptyGraph,
    /// An edge referenced a vertex id that is not present in the graph.
    #[error("edge references vertex {vertex}, but vertex_count is {vertex_count}")]
    InvalidVertexId {
        /// The invalid vertex id referenced by an edge.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// The engine was sized for a different vertex count than its input.
    #[error("engine sized for {expected} vertices was given {actual}")]
    VertexCountMismatch {
        /// Vertex count the engine was constructed with.
        expected: usize,
        /// Vertex count of the supplied graph.
        actual: usize,
    },
    /// Kruskal input was not in non-decreasing weight order.
    #[error("edge {index} is lighter than its predecessor; input must be sorted")]
    UnsortedEdges {
        /// Position of the first out-of-order edge.
        index: usize,
    },
    /// Prim could not reach a vertex from vertex 0.
    #[error("vertex {vertex} is unreachable from vertex 0")]
    Disconnected {
        /// First vertex found to be unreachable.
        vertex: usize,
    },
    /// An engine was run again without resetting its working state.
    #[error("engine already finished a run; reset its working state first")]
    StaleState,
    /// The indexed heap rejected an operation.
    #[error(transparent)]
    Heap(#[from] HeapError),
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The caller requested an MST for an empty graph.
        EmptyGraph => EmptyGraph => "MST_EMPTY_GRAPH",
        /// An edge referenced a vertex id that is not present in the graph.
        InvalidVertexId => InvalidVertexId { .. } => "MST_INVALID_VERTEX_ID",
        /// The engine was sized for a different vertex count.
        VertexCountMismatch => VertexCountMismatch { .. } => "MST_VERTEX_COUNT_MISMATCH",
        /// Kruskal input was not sorted by weight.
        UnsortedEdges => UnsortedEdges { .. } => "MST_UNSORTED_EDGES",
        /// Prim could not reach every vertex.
        Disconnected => Disconnected { .. } => "MST_DISCONNECTED",
        /// A finished engine was reused without a reset.
        StaleState => StaleState => "MST_STALE_STATE",
        /// The indexed heap rejected an operation.
        Heap => Heap { .. } => "MST_HEAP",
    }
}

/// Error type produced by the high-level tsunagi API.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TsunagiError {
    /// Graph construction or generation failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// An edge sort failed.
    #[error(transparent)]
    Sort(#[from] SortError),
    /// A spanning tree computation failed.
    #[error(transparent)]
    Mst(#[from] MstError),
    /// A comparison was configured without any runs.
    #[error("comparison requires at least one run")]
    NoRunsSelected,
}

define_error_codes! {
    /// Stable codes describing [`TsunagiError`] variants.
    enum TsunagiErrorCode for TsunagiError {
        /// Graph construction or generation failed.
        Graph => Graph { .. } => "TSUNAGI_GRAPH",
        /// An edge sort failed.
        Sort => Sort { .. } => "TSUNAGI_SORT",
        /// A spanning tree computation failed.
        Mst => Mst { .. } => "TSUNAGI_MST",
        /// A comparison was configured without any runs.
        NoRunsSelected => NoRunsSelected => "TSUNAGI_NO_RUNS_SELECTED",
    }
}

impl TsunagiError {
    /// Retrieve the most specific stable code carried by the error.
    ///
    /// Wrapped engine errors report their own code so logs identify the
    /// failing engine rather than the umbrella variant.
    #[must_use]
    pub const fn detail_code(&self) -> &'static str {
        match self {
            Self::Graph(error) => error.code().as_str(),
            Self::Sort(error) => error.code().as_str(),
            Self::Mst(error) => error.code().as_str(),
            Self::NoRunsSelected => self.code().as_str(),
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, TsunagiError>;
