//! Error types for gsp-core.

use thiserror::Error;

/// Result type alias for gsp-core operations.
pub type Result<T> = std::result::Result<T, GspError>;

/// Errors that can occur while deriving matrices, transforming or filtering signals.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GspError {
    /// Two sequences that must have the same length do not.
    #[error("Dimension mismatch: expected length {expected}, got {actual}")]
    DimensionMismatch {
        /// Length required by the operation.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// The eigensolver rejected or failed to diagonalize the Laplacian.
    #[error("Failed to factorize Laplacian matrix: {reason}")]
    Factorization {
        /// Description of why the factorization failed.
        reason: String,
    },

    /// Node keys do not form the dense range `0..N`.
    #[error("Node keys are not dense: expected node {expected}, found {found}")]
    NonDenseNodes {
        /// Node id that should have been present at this position.
        expected: usize,
        /// Node id that was found instead.
        found: usize,
    },

    /// A node id lies outside the signal or graph it indexes into.
    #[error("Node {node} is out of range for size {size}")]
    NodeOutOfRange {
        /// Offending node id.
        node: usize,
        /// Size of the indexed structure.
        size: usize,
    },

    /// The signal cannot be processed (empty or zero variance).
    #[error("Degenerate signal: {reason}")]
    DegenerateSignal {
        /// Description of the degeneracy.
        reason: String,
    },
}

impl GspError {
    pub(crate) fn factorization(reason: impl Into<String>) -> Self {
        GspError::Factorization {
            reason: reason.into(),
        }
    }

    pub(crate) fn check_len(expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(GspError::DimensionMismatch { expected, actual })
        }
    }
}
