//! Spectrum command - Laplacian eigenvalues and graph Fourier coefficients

use super::{build_graph, Context, GraphArgs, SignalArgs};
use crate::output::{CsvOutput, Output, OutputConfig, Outputter, TableOutput};
use anyhow::{Context as _, Result};
use colored::Colorize;
use gsp_core::{fft, Graph, Signal, SpectralTransform};
use serde::Serialize;

/// Graph spectrum, optionally with a transformed signal.
#[derive(Debug, Serialize)]
pub struct SpectrumReport {
    pub size: usize,
    pub seed: Option<u64>,
    pub eigenvalues: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal: Option<Vec<f64>>,
    /// Graph Fourier coefficients of `signal`, one per eigenvalue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coefficients: Option<Vec<f64>>,
    /// Classical DFT magnitudes of `signal` in node order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fft_magnitude: Option<Vec<f64>>,
}

impl SpectrumReport {
    fn headers(&self) -> Vec<&'static str> {
        let mut headers = vec!["index", "eigenvalue"];
        if self.coefficients.is_some() {
            headers.extend(["signal", "gft", "|fft|"]);
        }
        headers
    }

    fn rows(&self, format: impl Fn(f64) -> String) -> Vec<Vec<String>> {
        self.eigenvalues
            .iter()
            .enumerate()
            .map(|(i, &lambda)| {
                let mut row = vec![i.to_string(), format(lambda)];
                if let (Some(signal), Some(coefficients), Some(magnitude)) =
                    (&self.signal, &self.coefficients, &self.fft_magnitude)
                {
                    row.push(format(signal[i]));
                    row.push(format(coefficients[i]));
                    row.push(format(magnitude[i]));
                }
                row
            })
            .collect()
    }
}

impl Outputter for SpectrumReport {
    fn to_table(&self, config: &OutputConfig) -> String {
        let heading = format!("Laplacian spectrum ({} nodes)", self.size);
        let mut headers = self.headers();
        headers[0] = "#";
        format!(
            "{}\n{}",
            heading.green().bold(),
            TableOutput::from_rows(&headers, &self.rows(|v| config.number(v)), config)
        )
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        CsvOutput::from_rows(&self.headers(), &self.rows(|v| v.to_string()))
    }
}

/// Factorize the Laplacian of `graph` and, if given, transform `signal`.
pub fn report(
    graph: &Graph,
    seed: Option<u64>,
    signal: Option<&Signal>,
) -> Result<SpectrumReport> {
    let transform =
        SpectralTransform::from_graph(graph).context("Failed to diagonalize the Laplacian")?;

    let coefficients = signal
        .map(|s| transform.forward(s))
        .transpose()?
        .map(Signal::into_inner);

    Ok(SpectrumReport {
        size: graph.node_count(),
        seed,
        eigenvalues: transform.eigenvalues().iter().copied().collect(),
        signal: signal.map(|s| s.as_slice().to_vec()),
        coefficients,
        fft_magnitude: signal.map(|s| fft::magnitude_spectrum(s).into_inner()),
    })
}

/// Run the spectrum command.
pub fn run(ctx: &Context, graph_args: &GraphArgs, signal_args: &SignalArgs) -> Result<()> {
    let settings = graph_args.resolve(&ctx.config.generator);
    let graph = build_graph(&settings);

    let signal = if signal_args.signal.is_some() || signal_args.normalize {
        Some(signal_args.build(settings.size, &ctx.config.signal)?)
    } else {
        None
    };

    let report = report(&graph, settings.seed, signal.as_ref())?;
    Output::with_config(report, ctx.output.clone()).render()
}
