//! Generate command - Build a random connected graph and show it
//!
//! Prints the adjacency list, or one of the derived matrices, and reports
//! connectivity and symmetry.

use super::{build_graph, edge_rows, edge_table_rows, matrix_rows, Context, EdgeRow, GraphArgs};
use crate::output::{CsvOutput, Output, OutputConfig, Outputter, TableOutput};
use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use gsp_core::Graph;
use serde::Serialize;

/// Matrix derived from the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatrixKind {
    /// Edge weights, W[i][j]
    Weighted,
    /// Degree matrix minus weights
    Laplacian,
    /// Edge weights with the diagonal forced to zero
    Adjacency,
}

impl MatrixKind {
    fn label(self) -> &'static str {
        match self {
            MatrixKind::Weighted => "Weighted matrix",
            MatrixKind::Laplacian => "Laplacian matrix",
            MatrixKind::Adjacency => "Adjacency matrix",
        }
    }

    /// Derive this matrix from `graph`.
    pub fn rows(self, graph: &Graph) -> gsp_core::Result<Vec<Vec<f64>>> {
        let matrix = match self {
            MatrixKind::Weighted => graph.weighted_matrix()?,
            MatrixKind::Laplacian => graph.laplacian_matrix()?,
            MatrixKind::Adjacency => graph.adjacency_matrix()?,
        };
        Ok(matrix_rows(matrix))
    }
}

/// Generated graph with its connectivity report.
#[derive(Debug, Serialize)]
pub struct GraphReport {
    pub size: usize,
    pub seed: Option<u64>,
    pub edge_count: usize,
    pub connected: bool,
    pub symmetric: bool,
    pub edges: Vec<EdgeRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix_kind: Option<MatrixKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<Vec<Vec<f64>>>,
}

impl Outputter for GraphReport {
    fn to_table(&self, config: &OutputConfig) -> String {
        let mut lines = Vec::new();

        lines.push(format!("{}", "Random weighted graph".green().bold()));
        let seed = self
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "random".to_string());
        lines.push(TableOutput::format_key_value(
            &[
                ("Nodes", self.size.to_string()),
                ("Edges", self.edge_count.to_string()),
                ("Seed", seed),
                ("Connected", yes_no(self.connected)),
                ("Symmetric", yes_no(self.symmetric)),
            ],
            config,
        ));

        match (&self.matrix_kind, &self.matrix) {
            (Some(kind), Some(matrix)) => {
                lines.push(format!("\n{}", kind.label().cyan().bold()));
                lines.push(TableOutput::matrix(matrix, config));
            }
            _ => {
                lines.push(format!("\n{}", "Adjacency list".cyan().bold()));
                lines.push(TableOutput::from_rows(
                    &["Source", "Target", "Weight"],
                    &edge_table_rows(&self.edges, config),
                    config,
                ));
            }
        }

        lines.join("\n")
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        match &self.matrix {
            Some(matrix) => {
                let labels: Vec<String> = (0..matrix.len()).map(|j| j.to_string()).collect();
                let mut headers = vec!["node"];
                headers.extend(labels.iter().map(String::as_str));
                let rows: Vec<Vec<String>> = matrix
                    .iter()
                    .enumerate()
                    .map(|(i, row)| {
                        std::iter::once(i.to_string())
                            .chain(row.iter().map(|v| v.to_string()))
                            .collect()
                    })
                    .collect();
                CsvOutput::from_rows(&headers, &rows)
            }
            None => {
                let rows: Vec<Vec<String>> = self
                    .edges
                    .iter()
                    .map(|e| {
                        vec![
                            e.source.to_string(),
                            e.target.to_string(),
                            e.weight.to_string(),
                        ]
                    })
                    .collect();
                CsvOutput::from_rows(&["source", "target", "weight"], &rows)
            }
        }
    }
}

fn yes_no(value: bool) -> String {
    let text = if value { "yes" } else { "no" };
    text.to_string()
}

/// Build the report for `graph`, deriving `matrix` if requested.
pub fn report(
    graph: &Graph,
    seed: Option<u64>,
    matrix: Option<MatrixKind>,
) -> Result<GraphReport> {
    let derived = matrix.map(|kind| kind.rows(graph)).transpose()?;
    let connected = graph.is_fully_connected();
    if !connected {
        tracing::warn!("Generated graph is not connected");
    }

    Ok(GraphReport {
        size: graph.node_count(),
        seed,
        edge_count: graph.edge_count(),
        connected,
        symmetric: graph.is_symmetric()?,
        edges: edge_rows(graph),
        matrix_kind: matrix,
        matrix: derived,
    })
}

/// Run the generate command.
pub fn run(ctx: &Context, args: &GraphArgs, matrix: Option<MatrixKind>) -> Result<()> {
    let settings = args.resolve(&ctx.config.generator);
    let graph = build_graph(&settings);
    let report = report(&graph, settings.seed, matrix)?;
    Output::with_config(report, ctx.output.clone()).render()
}
