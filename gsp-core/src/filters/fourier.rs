use super::Filter;
use crate::error::{GspError, Result};
use crate::graph::Graph;
use crate::signal::Signal;
use crate::spectral::SpectralTransform;

/// Filtering in the Laplacian eigenbasis: forward GFT, pointwise scaling, inverse GFT.
///
/// Coefficient `k` scales spectral component `k`, i.e. the component of the `k`-th
/// smallest eigenvalue. The driver's degree coefficients are indexed by node, so with
/// [`super::apply_filter`] the weighting follows node order rather than frequency.
#[derive(Debug, Clone, Copy, Default)]
pub struct FourierFilter;

impl Filter for FourierFilter {
    fn name(&self) -> &'static str {
        "fourier"
    }

    fn apply(&self, graph: &Graph, coefficients: &[f64], signal: &Signal) -> Result<Signal> {
        GspError::check_len(signal.len(), coefficients.len())?;

        let transform = SpectralTransform::from_graph(graph)?;
        let spectrum = transform.forward(signal)?;
        let scaled: Signal = spectrum
            .iter()
            .zip(coefficients)
            .map(|(component, coefficient)| component * coefficient)
            .collect();
        transform.inverse(&scaled)
    }
}
