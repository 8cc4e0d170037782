//! Plain-text rendering of a finished run.

use std::io::{self, Write};

use tsunagi_core::{Graph, RunReport, Traversal};

use super::commands::RunOutcome;

/// Graphs below this vertex count also print their representations, the
/// depth-first search and every MST edge.
pub const DETAIL_THRESHOLD: usize = 10;

const BANNER: &str = "===================================";

/// Writes the comparison report for `outcome` to `writer`.
///
/// The header names the parameters and the generation time. Small graphs
/// then show the adjacency matrix (`0` for an absent edge), the adjacency
/// list as `id(weight)` entries and the depth-first visit order with its
/// predecessors (`-1` for none). Each run closes with its total weight and
/// runtime in whole milliseconds.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
pub fn render_report(outcome: &RunOutcome, mut writer: impl Write) -> io::Result<()> {
    let parameters = &outcome.parameters;
    let graph = outcome.generated.graph();
    let detailed = graph.vertex_count() < DETAIL_THRESHOLD;

    writeln!(
        writer,
        "TEST: n={}, seed={}, p={:?}",
        parameters.vertex_count(),
        parameters.seed(),
        parameters.edge_probability()
    )?;
    writeln!(
        writer,
        "Time to generate the graph: {} milliseconds\n",
        outcome.generated.elapsed().as_millis()
    )?;

    if detailed {
        writeln!(writer, "The graph as an adjacency matrix:\n")?;
        write_matrix(graph, &mut writer)?;
        writeln!(writer, "The graph as an adjacency list:\n")?;
        write_list(graph, &mut writer)?;
        write_traversal(outcome.generated.traversal(), &mut writer)?;
    }

    for run in outcome.comparison.runs() {
        write_run(run, detailed, &mut writer)?;
    }
    Ok(())
}

fn write_matrix(graph: &Graph, writer: &mut impl Write) -> io::Result<()> {
    let matrix = graph.matrix();
    for row in 0..graph.vertex_count() {
        for column in 0..graph.vertex_count() {
            let weight = matrix.cell(row, column).map_or(0, |edge| edge.weight());
            write!(writer, "{weight}   ")?;
        }
        writeln!(writer, "\n")?;
    }
    Ok(())
}

fn write_list(graph: &Graph, writer: &mut impl Write) -> io::Result<()> {
    for vertex in graph.vertices() {
        write!(writer, "{}-> ", vertex.id())?;
        for &adjacent in vertex.adjacents() {
            if let Some(edge) = graph.edge_between(vertex.id(), adjacent) {
                write!(writer, "{adjacent}({}) ", edge.weight())?;
            }
        }
        writeln!(writer)?;
    }
    Ok(())
}

fn write_traversal(traversal: &Traversal, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "\nDepth-First Search:")?;
    for vertex in traversal.order() {
        write!(writer, "{vertex} ")?;
    }
    writeln!(writer)?;
    writeln!(writer, "Predecessors:")?;
    for predecessor in traversal.predecessors() {
        match predecessor {
            Some(parent) => write!(writer, "{parent} ")?,
            None => write!(writer, "-1 ")?,
        }
    }
    writeln!(writer)
}

fn write_run(run: &RunReport, detailed: bool, writer: &mut impl Write) -> io::Result<()> {
    let kind = run.kind();
    writeln!(writer, "{BANNER}")?;
    writeln!(writer, "{}", kind.title())?;
    if detailed {
        for edge in run.tree().edges() {
            writeln!(writer, "{edge}")?;
        }
    }
    writeln!(writer)?;
    writeln!(
        writer,
        "Total Weight of MST using {}: {}",
        kind.algorithm().display_name(),
        run.total_weight()
    )?;
    writeln!(writer, "Runtime: {} milliseconds", run.elapsed().as_millis())
}
