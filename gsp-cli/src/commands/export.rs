//! Export command - Write a graph as Graphviz DOT, or a signal as CSV
//!
//! DOT output goes through `petgraph`: the adjacency list is copied into a
//! `DiGraph` and rendered with `petgraph::dot::Dot`. Each stored direction
//! becomes its own arc, labelled with the edge weight.

use super::{build_graph, Context, GraphArgs, SignalArgs};
use crate::output::{CsvOutput, Output, OutputConfig, Outputter};
use anyhow::{Context as _, Result};
use colored::Colorize;
use gsp_core::{Graph, Signal};
use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Render `graph` as a DOT digraph called `name`.
pub fn graph_to_dot(graph: &Graph, name: &str, precision: usize) -> String {
    let mut digraph: DiGraph<usize, String> =
        DiGraph::with_capacity(graph.node_count(), graph.edge_count());
    let indices: HashMap<usize, NodeIndex> = graph
        .nodes()
        .map(|node| (node, digraph.add_node(node)))
        .collect();

    for (source, edge) in graph.edge_entries() {
        if let (Some(&a), Some(&b)) = (indices.get(&source), indices.get(&edge.target)) {
            digraph.add_edge(a, b, format!("{:.*}", precision, edge.weight));
        }
    }

    let dot = format!("{}", Dot::new(&digraph));
    let escaped = name.replace('\\', "\\\\").replace('"', "\\\"");
    dot.replacen("digraph {", &format!("digraph \"{}\" {{", escaped), 1)
}

/// Node/value pairs of `signal` as CSV.
pub fn signal_to_csv(signal: &Signal) -> String {
    let rows: Vec<Vec<String>> = signal
        .node_values()
        .into_iter()
        .map(|nv| vec![nv.node.to_string(), nv.value.to_string()])
        .collect();
    CsvOutput::from_rows(&["node", "value"], &rows)
}

/// Summary printed after writing an export file.
#[derive(Debug, Serialize)]
pub struct ExportSummary {
    pub path: String,
    pub kind: &'static str,
    pub nodes: usize,
    pub edges: usize,
    pub bytes: usize,
}

impl Outputter for ExportSummary {
    fn to_table(&self, _config: &OutputConfig) -> String {
        format!(
            "{} {} to {} ({} nodes, {} edges, {} bytes)",
            "Exported".green().bold(),
            self.kind,
            self.path.cyan(),
            self.nodes,
            self.edges,
            self.bytes
        )
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        CsvOutput::from_rows(
            &["path", "kind", "nodes", "edges", "bytes"],
            &[vec![
                self.path.clone(),
                self.kind.to_string(),
                self.nodes.to_string(),
                self.edges.to_string(),
                self.bytes.to_string(),
            ]],
        )
    }
}

/// Run the export command.
///
/// Writes DOT by default; with `--signal`, writes the signal instead. Without an
/// output path the content goes to stdout.
pub fn run(
    ctx: &Context,
    graph_args: &GraphArgs,
    signal_args: &SignalArgs,
    output: Option<&Path>,
    name: &str,
) -> Result<()> {
    let settings = graph_args.resolve(&ctx.config.generator);
    let graph = build_graph(&settings);

    let (kind, content) = if signal_args.signal.is_some() {
        let signal = signal_args.build(settings.size, &ctx.config.signal)?;
        ("signal csv", signal_to_csv(&signal))
    } else {
        ("graph dot", graph_to_dot(&graph, name, ctx.output.precision))
    };

    let Some(path) = output else {
        println!("{}", content);
        return Ok(());
    };

    fs::write(path, &content)
        .with_context(|| format!("Failed to write export to {}", path.display()))?;
    tracing::info!(path = %path.display(), kind, "Wrote export");

    let summary = ExportSummary {
        path: path.display().to_string(),
        kind,
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        bytes: content.len(),
    };
    Output::with_config(summary, ctx.output.clone()).render()
}
