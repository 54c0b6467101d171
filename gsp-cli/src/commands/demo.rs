//! Demo command - Run the full pipeline on one random graph
//!
//! Generate a graph, derive its matrices, transform a signal into the graph
//! spectral domain and back, then run every built-in filter on it.

use super::{
    build_graph, edge_rows, edge_table_rows, matrix_rows, Context, EdgeRow, GraphArgs, SignalArgs,
};
use crate::output::{CsvOutput, Output, OutputConfig, Outputter, TableOutput};
use anyhow::{Context as _, Result};
use colored::Colorize;
use gsp_core::{apply_filter, FilterKind, Graph, Signal, SpectralTransform};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FilterOutput {
    pub filter: FilterKind,
    pub output: Vec<f64>,
}

/// Every intermediate result of the demo pipeline.
#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub size: usize,
    pub seed: Option<u64>,
    pub connected: bool,
    pub edges: Vec<EdgeRow>,
    pub weighted: Vec<Vec<f64>>,
    pub laplacian: Vec<Vec<f64>>,
    pub signal: Vec<f64>,
    pub eigenvalues: Vec<f64>,
    pub spectrum: Vec<f64>,
    pub reconstructed: Vec<f64>,
    pub filters: Vec<FilterOutput>,
}

impl DemoReport {
    fn headers(&self) -> Vec<&'static str> {
        let mut headers = vec!["node", "signal", "gft", "inverse"];
        headers.extend(self.filters.iter().map(|f| f.filter.as_str()));
        headers
    }

    fn node_rows(&self, format: impl Fn(f64) -> String) -> Vec<Vec<String>> {
        (0..self.signal.len())
            .map(|node| {
                let mut row = vec![
                    node.to_string(),
                    format(self.signal[node]),
                    format(self.spectrum[node]),
                    format(self.reconstructed[node]),
                ];
                row.extend(self.filters.iter().map(|f| format(f.output[node])));
                row
            })
            .collect()
    }
}

impl Outputter for DemoReport {
    fn to_table(&self, config: &OutputConfig) -> String {
        let seed = self
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "random".to_string());
        let mut lines = vec![format!(
            "{} {}",
            "Graph signal processing demo".green().bold(),
            format!("({} nodes, seed {})", self.size, seed).dimmed()
        )];

        lines.push(format!("\n{}", "Adjacency list".cyan().bold()));
        lines.push(TableOutput::from_rows(
            &["Source", "Target", "Weight"],
            &edge_table_rows(&self.edges, config),
            config,
        ));

        lines.push(format!("\n{}", "Weighted matrix".cyan().bold()));
        lines.push(TableOutput::matrix(&self.weighted, config));

        lines.push(format!("\n{}", "Laplacian matrix".cyan().bold()));
        lines.push(TableOutput::matrix(&self.laplacian, config));

        let eigenvalues: Vec<String> = self
            .eigenvalues
            .iter()
            .map(|&v| config.number(v))
            .collect();
        lines.push(format!(
            "\n{}: {}",
            "Eigenvalues".cyan().bold(),
            eigenvalues.join(" ")
        ));

        lines.push(format!("\n{}", "Signals".cyan().bold()));
        let mut headers = self.headers();
        headers[0] = "Node";
        lines.push(TableOutput::from_rows(
            &headers,
            &self.node_rows(|v| config.number(v)),
            config,
        ));

        if !self.connected {
            lines.push(format!("\n{}", "Warning: graph is not connected".yellow()));
        }

        lines.join("\n")
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        CsvOutput::from_rows(&self.headers(), &self.node_rows(|v| v.to_string()))
    }
}

/// Run the pipeline on `graph` and `signal`.
pub fn report(graph: &mut Graph, signal: &Signal, seed: Option<u64>) -> Result<DemoReport> {
    graph.update_weighted_graph()?;
    graph.update_laplacian_matrix()?;
    let weighted = matrix_rows(graph.weighted_matrix()?);
    let laplacian = matrix_rows(graph.laplacian_matrix()?);

    let transform =
        SpectralTransform::from_graph(graph).context("Failed to diagonalize the Laplacian")?;
    let spectrum = transform.forward(signal)?;
    let reconstructed = transform.inverse(&spectrum)?;

    let filters = FilterKind::all()
        .into_iter()
        .map(|kind| -> Result<FilterOutput> {
            let output = apply_filter(kind.filter().as_ref(), graph, signal)
                .with_context(|| format!("{} filter failed", kind))?;
            Ok(FilterOutput {
                filter: kind,
                output: output.into_inner(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(DemoReport {
        size: graph.node_count(),
        seed,
        connected: graph.is_fully_connected(),
        edges: edge_rows(graph),
        weighted,
        laplacian,
        signal: signal.as_slice().to_vec(),
        eigenvalues: transform.eigenvalues().iter().copied().collect(),
        spectrum: spectrum.into_inner(),
        reconstructed: reconstructed.into_inner(),
        filters,
    })
}

/// Run the demo command.
pub fn run(ctx: &Context, graph_args: &GraphArgs, signal_args: &SignalArgs) -> Result<()> {
    let settings = graph_args.resolve(&ctx.config.generator);
    let mut graph = build_graph(&settings);
    let signal = signal_args.build(settings.size, &ctx.config.signal)?;

    let report = report(&mut graph, &signal, settings.seed)?;
    Output::with_config(report, ctx.output.clone()).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use approx::assert_abs_diff_eq;
    use gsp_core::RandomWeightedGraphGenerator;

    fn demo() -> DemoReport {
        let mut graph = RandomWeightedGraphGenerator::seeded(42).generate(7);
        let signal = Signal::from(vec![3.0, 4.0, 5.0, 7.0, 11.0, 13.0, 17.0]);
        report(&mut graph, &signal, Some(42)).unwrap()
    }

    #[test]
    fn test_demo_pipeline() {
        let report = demo();

        assert_eq!(report.size, 7);
        assert!(report.connected);
        assert_eq!(report.edges.len(), 12);
        assert_eq!(report.weighted.len(), 7);
        assert_eq!(report.eigenvalues.len(), 7);
        assert_abs_diff_eq!(report.eigenvalues[0], 0.0, epsilon = 1e-9);
        assert_eq!(report.filters.len(), 4);

        for (a, b) in report.signal.iter().zip(&report.reconstructed) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_laplacian_rows_sum_to_zero() {
        for row in demo().laplacian {
            assert_abs_diff_eq!(row.iter().sum::<f64>(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_csv_has_one_row_per_node() {
        let csv = demo().to_csv(&OutputConfig::new(OutputFormat::Csv));
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(
            lines[0],
            "node,signal,gft,inverse,laplacian,high-pass,low-pass,fourier"
        );
    }

    #[test]
    fn test_table_mentions_every_section() {
        colored::control::set_override(false);
        let table = demo().to_table(&OutputConfig {
            width: Some(200),
            ..OutputConfig::new(OutputFormat::Table)
        });
        for section in ["Adjacency list", "Weighted matrix", "Laplacian matrix", "Eigenvalues"] {
            assert!(table.contains(section), "missing {}", section);
        }
    }
}
