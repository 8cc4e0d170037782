//! Tsunagi core library.
//!
//! Minimum spanning trees over undirected, positively weighted graphs, built
//! two ways ([`Kruskal`] and [`Prim`]) over two representations (adjacency
//! matrix and adjacency list), with Kruskal's input ordered by one of three
//! [`SortAlgorithm`]s. [`compare`] runs every combination over one graph.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod comparison;
mod edge;
mod error;
mod graph;
mod mst;
pub mod sort;

#[cfg(test)]
mod test_utils;

pub use crate::{
    comparison::{
        ComparisonOptions, ComparisonReport, MstAlgorithm, RunKind, RunReport, compare,
    },
    edge::{Edge, total_weight},
    error::{
        GraphError, GraphErrorCode, HeapError, HeapErrorCode, MstError, MstErrorCode, Result,
        SortError, SortErrorCode, TsunagiError, TsunagiErrorCode,
    },
    graph::{
        AdjacencyList, AdjacencyMatrix, DEFAULT_MAX_ATTEMPTS, GeneratedGraph, Graph, GraphConfig,
        MAX_EDGE_WEIGHT, Representation, RepresentationKind, Traversal, Vertex, depth_first, generate,
    },
    mst::{
        INFINITE_PRIORITY, IndexedMinHeap, Kruskal, Prim, PrimState, PrimTree, SpanningTree,
        UnionFind, VertexState, kruskal_mst, prim_mst,
    },
    sort::{SortAlgorithm, sort_edges},
};
