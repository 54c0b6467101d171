//! Command implementations for the GSP CLI
//!
//! Each command module provides a `run` function that executes the command logic.
//! Shared argument groups and graph/signal construction live here.

pub mod demo;
pub mod export;
pub mod filter;
pub mod generate;
pub mod spectrum;

use crate::config::{GspConfig, SignalConfig};
use crate::output::OutputConfig;
use anyhow::{Context as _, Result};
use clap::Args;
use gsp_core::nalgebra::DMatrix;
use gsp_core::{GeneratorConfig, Graph, RandomWeightedGraphGenerator, Signal};
use serde::Serialize;

/// Signal used when neither the command line nor the config provides one.
pub const DEFAULT_SIGNAL: [f64; 7] = [3.0, 4.0, 5.0, 7.0, 11.0, 13.0, 17.0];

/// Shared state handed to every command.
pub struct Context {
    pub config: GspConfig,
    pub output: OutputConfig,
}

/// Random graph options. Unset values fall back to `[generator]` in the config.
#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Number of nodes
    #[arg(short = 'n', long)]
    pub size: Option<usize>,

    /// RNG seed for reproducible graphs
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Extra undirected edges on top of the spanning tree
    #[arg(short, long)]
    pub extra_edges: Option<usize>,
}

impl GraphArgs {
    /// Merge with config defaults: command line > config > built-in.
    pub fn resolve(&self, defaults: &GeneratorConfig) -> GeneratorConfig {
        GeneratorConfig {
            size: self.size.unwrap_or(defaults.size),
            extra_edges: self.extra_edges.unwrap_or(defaults.extra_edges),
            seed: self.seed.or(defaults.seed),
        }
    }
}

/// Input signal options. Unset values fall back to `[signal]` in the config.
#[derive(Args, Debug, Clone, Default)]
pub struct SignalArgs {
    /// Comma-separated node values, assigned to nodes 0, 1, ...
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub signal: Option<Vec<f64>>,

    /// Standardize the signal to zero mean and unit deviation
    #[arg(long)]
    pub normalize: bool,
}

impl SignalArgs {
    /// Build a signal over `size` nodes.
    ///
    /// Values fill nodes from 0 upward; remaining nodes stay at zero. Supplying
    /// more values than nodes is an error.
    pub fn build(&self, size: usize, defaults: &SignalConfig) -> Result<Signal> {
        let values = self
            .signal
            .as_deref()
            .or(defaults.values.as_deref())
            .unwrap_or(&DEFAULT_SIGNAL);

        let mut signal = Signal::new(size);
        signal.set_values(values).with_context(|| {
            format!(
                "Cannot place {} values on a {}-node graph",
                values.len(),
                size
            )
        })?;

        if self.normalize || defaults.normalize {
            signal.normalize().context("Cannot normalize signal")?;
        }
        Ok(signal)
    }
}

/// Generate the random graph described by `settings`.
pub fn build_graph(settings: &GeneratorConfig) -> Graph {
    tracing::info!(
        size = settings.size,
        seed = ?settings.seed,
        extra_edges = settings.extra_edges,
        "Generating graph"
    );
    RandomWeightedGraphGenerator::from_config(settings)
        .generate_with_extra_edges(settings.size, settings.extra_edges)
}

/// One directed edge of the adjacency list.
#[derive(Debug, Clone, Serialize)]
pub struct EdgeRow {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
}

/// Flatten the adjacency list in node order.
pub fn edge_rows(graph: &Graph) -> Vec<EdgeRow> {
    graph
        .edge_entries()
        .map(|(source, edge)| EdgeRow {
            source,
            target: edge.target,
            weight: edge.weight,
        })
        .collect()
}

/// Matrix rows in a serializable shape.
pub fn matrix_rows(matrix: &DMatrix<f64>) -> Vec<Vec<f64>> {
    matrix
        .row_iter()
        .map(|row| row.iter().copied().collect())
        .collect()
}

/// Table rows for a list of edges.
pub fn edge_table_rows(edges: &[EdgeRow], config: &OutputConfig) -> Vec<Vec<String>> {
    edges
        .iter()
        .map(|e| {
            vec![
                e.source.to_string(),
                e.target.to_string(),
                config.number(e.weight),
            ]
        })
        .collect()
}
