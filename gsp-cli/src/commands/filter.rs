//! Filter command - Apply one of the built-in filters to a signal on a random graph

use super::{build_graph, Context, GraphArgs, SignalArgs};
use crate::output::{CsvOutput, Output, OutputConfig, Outputter, TableOutput};
use anyhow::{Context as _, Result};
use colored::Colorize;
use gsp_core::{apply_filter, degree_coefficients, FilterKind, Graph, Signal};
use serde::Serialize;

/// Before/after values of one filter run.
#[derive(Debug, Serialize)]
pub struct FilterReport {
    pub filter: FilterKind,
    pub seed: Option<u64>,
    /// Degree coefficients handed to the filter.
    pub coefficients: Vec<f64>,
    pub input: Vec<f64>,
    pub output: Vec<f64>,
}

impl FilterReport {
    fn rows(&self, format: impl Fn(f64) -> String) -> Vec<Vec<String>> {
        self.input
            .iter()
            .zip(&self.output)
            .zip(&self.coefficients)
            .enumerate()
            .map(|(node, ((&input, &output), &degree))| {
                vec![node.to_string(), format(degree), format(input), format(output)]
            })
            .collect()
    }
}

impl Outputter for FilterReport {
    fn to_table(&self, config: &OutputConfig) -> String {
        let heading = format!("{} filter", self.filter);
        format!(
            "{}\n{}",
            heading.green().bold(),
            TableOutput::from_rows(
                &["Node", "Degree", "Input", "Output"],
                &self.rows(|v| config.number(v)),
                config,
            )
        )
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        CsvOutput::from_rows(
            &["node", "degree", "input", "output"],
            &self.rows(|v| v.to_string()),
        )
    }
}

/// Apply `kind` to `signal` on `graph`.
pub fn report(
    kind: FilterKind,
    graph: &mut Graph,
    signal: &Signal,
    seed: Option<u64>,
) -> Result<FilterReport> {
    let output = apply_filter(kind.filter().as_ref(), graph, signal)
        .with_context(|| format!("{} filter failed", kind))?;

    Ok(FilterReport {
        filter: kind,
        seed,
        coefficients: degree_coefficients(graph, signal.len()),
        input: signal.as_slice().to_vec(),
        output: output.into_inner(),
    })
}

/// Run the filter command.
pub fn run(
    ctx: &Context,
    kind: FilterKind,
    graph_args: &GraphArgs,
    signal_args: &SignalArgs,
) -> Result<()> {
    let settings = graph_args.resolve(&ctx.config.generator);
    let mut graph = build_graph(&settings);
    let signal = signal_args.build(settings.size, &ctx.config.signal)?;

    let report = report(kind, &mut graph, &signal, settings.seed)?;
    Output::with_config(report, ctx.output.clone()).render()
}
