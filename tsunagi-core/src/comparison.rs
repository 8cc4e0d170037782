//! Runs every MST engine configuration over one graph and collects timings.
//!
//! A comparison drives a single [`Kruskal`] engine and a single [`Prim`]
//! engine through the selected runs in order, resetting each engine after
//! every run. Timing covers edge extraction and sorting as well as the MST
//! itself.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{info, instrument, warn};

use crate::{
    Result,
    error::TsunagiError,
    graph::{Graph, Representation, RepresentationKind},
    mst::{Kruskal, Prim, SpanningTree},
    sort::{SortAlgorithm, sorted},
};

/// The two MST algorithms.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MstAlgorithm {
    /// Kruskal's algorithm over a sorted edge list.
    Kruskal,
    /// Prim's algorithm over a heap of frontier vertices.
    Prim,
}

impl MstAlgorithm {
    /// Both algorithms, Kruskal first.
    pub const ALL: [Self; 2] = [Self::Kruskal, Self::Prim];

    /// Returns the lowercase identifier used in logs and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kruskal => "kruskal",
            Self::Prim => "prim",
        }
    }

    /// Returns the name used in report totals.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Kruskal => "Kruskal",
            Self::Prim => "Prim",
        }
    }
}

impl fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One engine configuration within a comparison.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RunKind {
    /// Kruskal fed by the given representation and sort.
    Kruskal {
        /// Where the undirected edges are read from.
        representation: RepresentationKind,
        /// How the edges are ordered.
        sort: SortAlgorithm,
    },
    /// Prim over the given representation.
    Prim {
        /// Where neighbours and weights are read from.
        representation: RepresentationKind,
    },
}

impl RunKind {
    /// All eight runs in report order: the six Kruskal runs (matrix before
    /// list, insertion then counting then quicksort), then Prim over the
    /// matrix and the list.
    pub const ALL: [Self; 8] = [
        Self::kruskal(RepresentationKind::Matrix, SortAlgorithm::Insertion),
        Self::kruskal(RepresentationKind::Matrix, SortAlgorithm::Counting),
        Self::kruskal(RepresentationKind::Matrix, SortAlgorithm::Quick),
        Self::kruskal(RepresentationKind::List, SortAlgorithm::Insertion),
        Self::kruskal(RepresentationKind::List, SortAlgorithm::Counting),
        Self::kruskal(RepresentationKind::List, SortAlgorithm::Quick),
        Self::prim(RepresentationKind::Matrix),
        Self::prim(RepresentationKind::List),
    ];

    /// A Kruskal run.
    #[must_use]
    pub const fn kruskal(representation: RepresentationKind, sort: SortAlgorithm) -> Self {
        Self::Kruskal {
            representation,
            sort,
        }
    }

    /// A Prim run.
    #[must_use]
    pub const fn prim(representation: RepresentationKind) -> Self {
        Self::Prim { representation }
    }

    /// Returns the algorithm this run uses.
    #[must_use]
    pub const fn algorithm(self) -> MstAlgorithm {
        match self {
            Self::Kruskal { .. } => MstAlgorithm::Kruskal,
            Self::Prim { .. } => MstAlgorithm::Prim,
        }
    }

    /// Returns the representation this run reads.
    #[must_use]
    pub const fn representation(self) -> RepresentationKind {
        match self {
            Self::Kruskal { representation, .. } | Self::Prim { representation } => representation,
        }
    }

    /// Returns the sort feeding a Kruskal run.
    #[must_use]
    pub const fn sort(self) -> Option<SortAlgorithm> {
        match self {
            Self::Kruskal { sort, .. } => Some(sort),
            Self::Prim { .. } => None,
        }
    }

    /// Returns the report banner, e.g. `KRUSKAL WITH LIST USING COUNT SORT`.
    #[must_use]
    pub fn title(self) -> String {
        match self {
            Self::Kruskal {
                representation,
                sort,
            } => {
                let source = match representation {
                    RepresentationKind::Matrix => "MATRIX",
                    RepresentationKind::List => "LIST",
                };
                let sort = match sort {
                    SortAlgorithm::Insertion => "INSERTION SORT",
                    SortAlgorithm::Counting => "COUNT SORT",
                    SortAlgorithm::Quick => "QUICKSORT",
                };
                format!("KRUSKAL WITH {source} USING {sort}")
            }
            Self::Prim { representation } => match representation {
                RepresentationKind::Matrix => "PRIM WITH ADJACENCY MATRIX".to_owned(),
                RepresentationKind::List => "PRIM WITH ADJACENCY LIST".to_owned(),
            },
        }
    }
}

impl fmt::Display for RunKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kruskal {
                representation,
                sort,
            } => write!(f, "kruskal/{representation}/{sort}"),
            Self::Prim { representation } => write!(f, "prim/{representation}"),
        }
    }
}

/// Selects which runs a comparison executes.
///
/// # Examples
/// ```
/// use tsunagi_core::{ComparisonOptions, MstAlgorithm};
///
/// assert_eq!(ComparisonOptions::new().runs().len(), 8);
/// let prim_only = ComparisonOptions::new().with_algorithm(MstAlgorithm::Prim);
/// assert_eq!(prim_only.runs().len(), 2);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ComparisonOptions {
    runs: Vec<RunKind>,
}

impl Default for ComparisonOptions {
    fn default() -> Self {
        Self {
            runs: RunKind::ALL.to_vec(),
        }
    }
}

impl ComparisonOptions {
    /// Creates options selecting all eight runs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps only the runs that use `algorithm`.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: MstAlgorithm) -> Self {
        self.runs.retain(|run| run.algorithm() == algorithm);
        self
    }

    /// Replaces the selection with an explicit run list, executed in order.
    #[must_use]
    pub fn with_runs(mut self, runs: impl IntoIterator<Item = RunKind>) -> Self {
        self.runs = runs.into_iter().collect();
        self
    }

    /// Returns the selected runs.
    #[must_use]
    pub fn runs(&self) -> &[RunKind] {
        &self.runs
    }
}

/// The outcome of one run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    kind: RunKind,
    tree: SpanningTree,
    elapsed: Duration,
}

impl RunReport {
    /// Returns the run configuration.
    #[must_use]
    #[rustfmt::skip]
    pub const fn kind(&self) -> RunKind { self.kind }

    /// Returns the tree the run produced.
    #[must_use]
    #[rustfmt::skip]
    pub const fn tree(&self) -> &SpanningTree { &self.tree }

    /// Returns the tree's total weight.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.tree.total_weight()
    }

    /// Returns the wall-clock time the run took.
    #[must_use]
    #[rustfmt::skip]
    pub const fn elapsed(&self) -> Duration { self.elapsed }
}

/// The outcome of a whole comparison.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonReport {
    runs: Vec<RunReport>,
}

impl ComparisonReport {
    /// Returns the run reports in execution order.
    #[must_use]
    pub fn runs(&self) -> &[RunReport] {
        &self.runs
    }

    /// Returns `true` when every run found the same total weight.
    #[must_use]
    pub fn weights_agree(&self) -> bool {
        self.runs
            .windows(2)
            .all(|pair| pair[0].total_weight() == pair[1].total_weight())
    }

    /// Returns the shared total weight, or `None` when runs disagree.
    #[must_use]
    pub fn total_weight(&self) -> Option<u64> {
        if self.weights_agree() {
            self.runs.first().map(RunReport::total_weight)
        } else {
            None
        }
    }
}

/// Runs every selected configuration over `graph`.
///
/// Counting sort uses the vertex count as its radix, so every weight must
/// lie in `[1, vertex_count]` when a counting run is selected.
///
/// # Errors
/// Returns [`TsunagiError::NoRunsSelected`] for an empty selection and
/// propagates sort and MST failures from the first run that fails.
///
/// # Examples
/// ```
/// use tsunagi_core::{ComparisonOptions, GraphConfig, compare, generate};
///
/// let generated = generate(&GraphConfig::new(8, 3, 0.5))?;
/// let report = compare(generated.graph(), &ComparisonOptions::new())?;
/// assert_eq!(report.runs().len(), 8);
/// assert!(report.weights_agree());
/// # Ok::<(), tsunagi_core::TsunagiError>(())
/// ```
#[instrument(
    name = "comparison.run",
    err,
    skip(graph, options),
    fields(
        vertex_count = graph.vertex_count(),
        edges = graph.edge_count(),
        runs = options.runs().len(),
    ),
)]
pub fn compare(graph: &Graph, options: &ComparisonOptions) -> Result<ComparisonReport> {
    if options.runs().is_empty() {
        return Err(TsunagiError::NoRunsSelected);
    }

    let vertex_count = graph.vertex_count();
    let matrix = graph.matrix();
    let list = graph.list();
    let mut kruskal = Kruskal::new(vertex_count)?;
    let mut prim = Prim::new(vertex_count)?;
    let mut runs = Vec::with_capacity(options.runs().len());

    for &kind in options.runs() {
        let view: &dyn Representation = match kind.representation() {
            RepresentationKind::Matrix => &matrix,
            RepresentationKind::List => &list,
        };

        let started = Instant::now();
        let tree = match kind {
            RunKind::Kruskal { sort, .. } => {
                let edges = sorted(view.undirected_edges(), sort, vertex_count)?;
                let tree = kruskal.run(&edges)?;
                kruskal.reset();
                tree
            }
            RunKind::Prim { .. } => {
                let tree = prim.run(view)?.to_spanning_tree();
                prim.reset_vertices();
                tree
            }
        };
        let report = RunReport {
            kind,
            tree,
            elapsed: started.elapsed(),
        };

        info!(
            run = %kind,
            total_weight = report.total_weight(),
            elapsed_us = u64::try_from(report.elapsed.as_micros()).unwrap_or(u64::MAX),
            "run finished"
        );
        record_run(&report);
        runs.push(report);
    }

    let report = ComparisonReport { runs };
    if !report.weights_agree() {
        warn!("runs disagree on total MST weight");
    }
    Ok(report)
}

#[cfg(feature = "metrics")]
fn record_run(report: &RunReport) {
    let algorithm = report.kind().algorithm().as_str();
    metrics::counter!("tsunagi_runs_total", "algorithm" => algorithm).increment(1);
    metrics::histogram!("tsunagi_run_duration_seconds", "algorithm" => algorithm)
        .record(report.elapsed().as_secs_f64());
}

#[cfg(not(feature = "metrics"))]
fn record_run(_report: &RunReport) {}
