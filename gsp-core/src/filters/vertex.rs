//! Vertex-domain filters: they operate directly on node values and edges.

use super::Filter;
use crate::error::{GspError, Result};
use crate::graph::Graph;
use crate::signal::Signal;

/// Degree-scaled graph Laplacian applied to the signal:
/// `out[i] = c[i] * Σ_{i→j} w(i, j) * (s[i] - s[j])`.
///
/// Zero on locally constant signals.
#[derive(Debug, Clone, Copy, Default)]
pub struct LaplacianFilter;

impl Filter for LaplacianFilter {
    fn name(&self) -> &'static str {
        "laplacian"
    }

    fn apply(&self, graph: &Graph, coefficients: &[f64], signal: &Signal) -> Result<Signal> {
        GspError::check_len(signal.len(), coefficients.len())?;

        let size = signal.len();
        let mut output = Vec::with_capacity(size);
        for (node, (&value, &coefficient)) in signal.iter().zip(coefficients).enumerate() {
            let mut total = 0.0;
            for edge in graph.edges(node) {
                let neighbour = signal.get(edge.target).ok_or(GspError::NodeOutOfRange {
                    node: edge.target,
                    size,
                })?;
                total += edge.weight * (value - neighbour);
            }
            output.push(coefficient * total);
        }
        Ok(Signal::from(output))
    }
}

/// Pointwise reweighting `out[i] = c[i] * s[i]`.
///
/// With degree coefficients this emphasises well-connected nodes; it is not a
/// spectral cutoff.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighPassFilter;

impl Filter for HighPassFilter {
    fn name(&self) -> &'static str {
        "high-pass"
    }

    fn apply(&self, _graph: &Graph, coefficients: &[f64], signal: &Signal) -> Result<Signal> {
        GspError::check_len(signal.len(), coefficients.len())?;
        Ok(signal
            .iter()
            .zip(coefficients)
            .map(|(value, coefficient)| coefficient * value)
            .collect())
    }
}

/// Damping `out[i] = s[i] / (1 + max(c[i], 0))`.
///
/// Attenuation is measured in magnitude: `|out[i]|` never increases with
/// `c[i]`, so a negative sample moves up toward zero as its coefficient grows.
/// A zero coefficient passes the sample through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowPassFilter;

impl Filter for LowPassFilter {
    fn name(&self) -> &'static str {
        "low-pass"
    }

    fn apply(&self, _graph: &Graph, coefficients: &[f64], signal: &Signal) -> Result<Signal> {
        GspError::check_len(signal.len(), coefficients.len())?;
        Ok(signal
            .iter()
            .zip(coefficients)
            .map(|(value, coefficient)| value / (1.0 + coefficient.max(0.0)))
            .collect())
    }
}
