//! Graph filters.
//!
//! A filter maps `(graph, coefficients, signal)` to a new signal, with exactly one
//! coefficient per node. Every filter validates that length before touching the
//! signal and returns [`GspError::DimensionMismatch`] without output on a mismatch.
//!
//! [`apply_filter`] is the standard driver: it refreshes the graph's adjacency
//! matrix, derives one coefficient per node from the node's out-degree, and runs
//! the filter with those coefficients.

mod fourier;
mod vertex;

pub use fourier::FourierFilter;
pub use vertex::{HighPassFilter, LaplacianFilter, LowPassFilter};

use crate::error::{GspError, Result};
use crate::graph::Graph;
use crate::signal::Signal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A pure function from a signal on a graph to a filtered signal.
pub trait Filter {
    /// Short identifier used in logs and output.
    fn name(&self) -> &'static str;

    /// Filter `signal` using one coefficient per node.
    fn apply(&self, graph: &Graph, coefficients: &[f64], signal: &Signal) -> Result<Signal>;
}

/// Closures with the filter signature are filters too.
impl<F> Filter for F
where
    F: Fn(&Graph, &[f64], &Signal) -> Result<Signal>,
{
    fn name(&self) -> &'static str {
        "custom"
    }

    fn apply(&self, graph: &Graph, coefficients: &[f64], signal: &Signal) -> Result<Signal> {
        GspError::check_len(signal.len(), coefficients.len())?;
        self(graph, coefficients, signal)
    }
}

/// Out-degree (number of outgoing edges) of nodes `0..len`, as filter coefficients.
pub fn degree_coefficients(graph: &Graph, len: usize) -> Vec<f64> {
    (0..len).map(|node| graph.out_degree(node) as f64).collect()
}

/// Run `filter` with degree-derived coefficients.
///
/// Forces a fresh adjacency matrix first, so the coefficients always reflect the
/// graph's current topology.
pub fn apply_filter<F: Filter + ?Sized>(
    filter: &F,
    graph: &mut Graph,
    signal: &Signal,
) -> Result<Signal> {
    graph.update_adjacency_matrix()?;
    let coefficients = degree_coefficients(graph, signal.len());
    tracing::debug!(filter = filter.name(), nodes = signal.len(), "Applying filter");
    filter.apply(graph, &coefficients, signal)
}

/// The built-in filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    Laplacian,
    HighPass,
    LowPass,
    Fourier,
}

impl FilterKind {
    /// All built-in filters, in demo order.
    pub fn all() -> [FilterKind; 4] {
        [
            FilterKind::Laplacian,
            FilterKind::HighPass,
            FilterKind::LowPass,
            FilterKind::Fourier,
        ]
    }

    pub fn filter(self) -> Box<dyn Filter> {
        match self {
            FilterKind::Laplacian => Box::new(LaplacianFilter),
            FilterKind::HighPass => Box::new(HighPassFilter),
            FilterKind::LowPass => Box::new(LowPassFilter),
            FilterKind::Fourier => Box::new(FourierFilter),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterKind::Laplacian => "laplacian",
            FilterKind::HighPass => "high-pass",
            FilterKind::LowPass => "low-pass",
            FilterKind::Fourier => "fourier",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "laplacian" => Ok(FilterKind::Laplacian),
            "high-pass" | "highpass" => Ok(FilterKind::HighPass),
            "low-pass" | "lowpass" => Ok(FilterKind::LowPass),
            "fourier" | "spectral" => Ok(FilterKind::Fourier),
            _ => Err(format!("Unknown filter: '{}'", s)),
        }
    }
}
