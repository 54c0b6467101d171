//! Graph Fourier Transform over the Laplacian eigenbasis.
//!
//! The Laplacian of an undirected graph is real symmetric, so it factorizes as
//! `L = V Λ Vᵗ` with orthonormal eigenvectors in the columns of `V`. Sorting the
//! eigenpairs by ascending eigenvalue orders the basis from the smoothest
//! ("lowest frequency") to the most oscillating vector.
//!
//! - forward: `ŝ = Vᵗ s`
//! - inverse: `s = V ŝ`
//!
//! Factorization is cubic in the node count. Build one [`SpectralTransform`] and
//! reuse it when transforming in both directions; the free functions refactorize on
//! every call.

use crate::error::{GspError, Result};
use crate::graph::{is_symmetric_matrix, Graph};
use crate::signal::Signal;
use nalgebra::{DMatrix, DVector, SymmetricEigen};
use std::time::Instant;

/// Eigendecomposition of a symmetric Laplacian.
#[derive(Debug, Clone)]
pub struct SpectralTransform {
    eigenvalues: DVector<f64>,
    eigenvectors: DMatrix<f64>,
}

impl SpectralTransform {
    /// Diagonalize a symmetric matrix.
    ///
    /// Fails if the matrix is not square, not symmetric, holds non-finite entries,
    /// or the solver does not converge.
    pub fn factorize(laplacian: &DMatrix<f64>) -> Result<Self> {
        if !laplacian.is_square() {
            return Err(GspError::factorization(format!(
                "matrix is {}x{}, expected square",
                laplacian.nrows(),
                laplacian.ncols()
            )));
        }
        if laplacian.iter().any(|value| !value.is_finite()) {
            return Err(GspError::factorization("matrix contains non-finite entries"));
        }
        if !is_symmetric_matrix(laplacian) {
            return Err(GspError::factorization(
                "matrix is not symmetric (graph has one-directional or unequal edges)",
            ));
        }

        let dimension = laplacian.nrows();
        if dimension == 0 {
            return Ok(Self {
                eigenvalues: DVector::zeros(0),
                eigenvectors: DMatrix::zeros(0, 0),
            });
        }

        let started = Instant::now();
        let eigen = SymmetricEigen::try_new(laplacian.clone(), f64::EPSILON, 0)
            .ok_or_else(|| GspError::factorization("eigensolver did not converge"))?;

        let mut order: Vec<usize> = (0..dimension).collect();
        order.sort_by(|&a, &b| eigen.eigenvalues[a].total_cmp(&eigen.eigenvalues[b]));

        let eigenvalues = DVector::from_iterator(
            dimension,
            order.iter().map(|&i| eigen.eigenvalues[i]),
        );
        let eigenvectors =
            DMatrix::from_fn(dimension, dimension, |row, col| eigen.eigenvectors[(row, order[col])]);

        tracing::debug!(
            dimension,
            elapsed_us = started.elapsed().as_micros() as u64,
            "Factorized Laplacian"
        );

        Ok(Self {
            eigenvalues,
            eigenvectors,
        })
    }

    /// Factorize the graph's current Laplacian.
    pub fn from_graph(graph: &Graph) -> Result<Self> {
        Self::factorize(graph.laplacian_matrix()?)
    }

    /// Eigenvalues in ascending order (graph frequencies).
    pub fn eigenvalues(&self) -> &DVector<f64> {
        &self.eigenvalues
    }

    /// Orthonormal eigenvectors as columns, matching [`Self::eigenvalues`].
    pub fn eigenvectors(&self) -> &DMatrix<f64> {
        &self.eigenvectors
    }

    pub fn dimension(&self) -> usize {
        self.eigenvalues.len()
    }

    /// Graph Fourier Transform: `result[k] = <v_k, signal>`.
    pub fn forward(&self, signal: &Signal) -> Result<Signal> {
        GspError::check_len(self.dimension(), signal.len())?;
        let values = DVector::from_column_slice(signal.as_slice());
        Ok(self.eigenvectors.tr_mul(&values).iter().copied().collect())
    }

    /// Inverse Graph Fourier Transform: `result = V · spectrum`.
    pub fn inverse(&self, spectrum: &Signal) -> Result<Signal> {
        GspError::check_len(self.dimension(), spectrum.len())?;
        let values = DVector::from_column_slice(spectrum.as_slice());
        Ok((&self.eigenvectors * values).iter().copied().collect())
    }
}

/// Factorize the graph's Laplacian and transform `signal` into the spectral domain.
pub fn graph_fourier_transform(graph: &Graph, signal: &Signal) -> Result<Signal> {
    SpectralTransform::from_graph(graph)?.forward(signal)
}

/// Factorize the graph's Laplacian and transform `spectrum` back to the vertex domain.
pub fn inverse_graph_fourier_transform(graph: &Graph, spectrum: &Signal) -> Result<Signal> {
    SpectralTransform::from_graph(graph)?.inverse(spectrum)
}

/// Eigenvalues (ascending) and eigenvectors, one eigenvector per row.
pub fn diagonalize(matrix: &DMatrix<f64>) -> Result<(Vec<f64>, Vec<Vec<f64>>)> {
    let transform = SpectralTransform::factorize(matrix)?;
    let eigenvalues = transform.eigenvalues.iter().copied().collect();
    let eigenvectors = transform
        .eigenvectors
        .column_iter()
        .map(|column| column.iter().copied().collect())
        .collect();
    Ok((eigenvalues, eigenvectors))
}
