//! GSP core - graph signal processing on small dense graphs.
//!
//! Signals live on the vertices of a weighted graph. The graph's Laplacian defines a
//! Fourier basis (its eigenvectors, ordered by eigenvalue), and filters act either
//! directly on vertex values or on the transformed signal.
//!
//! # Features
//!
//! - **Lazy matrix caches**: weighted, Laplacian and adjacency matrices are derived on
//!   demand and invalidated on every topology change
//! - **Graph Fourier Transform**: symmetric eigendecomposition via `nalgebra`
//! - **Filters**: Laplacian, high-pass, low-pass and spectral filters behind one trait
//! - **Random graphs**: connected random spanning trees via union-find
//!
//! # Usage
//!
//! ```
//! use gsp_core::{apply_filter, LaplacianFilter, RandomWeightedGraphGenerator, Signal, SpectralTransform};
//!
//! let mut graph = RandomWeightedGraphGenerator::seeded(42).generate(5);
//! let signal = Signal::from(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
//!
//! let transform = SpectralTransform::from_graph(&graph)?;
//! let spectrum = transform.forward(&signal)?;
//! let restored = transform.inverse(&spectrum)?;
//! assert!((restored[2] - 3.0).abs() < 1e-9);
//!
//! let filtered = apply_filter(&LaplacianFilter, &mut graph, &signal)?;
//! assert_eq!(filtered.len(), 5);
//! # Ok::<(), gsp_core::GspError>(())
//! ```

pub mod error;
pub mod fft;
pub mod filters;
pub mod generator;
pub mod graph;
pub mod signal;
pub mod spectral;
pub mod types;
pub mod union_find;

pub use error::{GspError, Result};
pub use filters::{
    apply_filter, degree_coefficients, Filter, FilterKind, FourierFilter, HighPassFilter,
    LaplacianFilter, LowPassFilter,
};
pub use generator::{random_weighted_graph, GeneratorConfig, RandomWeightedGraphGenerator};
pub use graph::{CacheState, Graph, MatrixState};
pub use signal::Signal;
pub use spectral::{
    diagonalize, graph_fourier_transform, inverse_graph_fourier_transform, SpectralTransform,
};
pub use types::{Edge, Node, NodeValue, Weight};
pub use union_find::UnionFind;

/// Matrix types used in the public API.
pub use nalgebra;

/// Get the version of gsp-core.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
