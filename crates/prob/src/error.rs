//! Error types for probability operations.

use thiserror::Error;

/// Errors that can occur in probability computations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProbError {
    /// A table or weight vector cannot be turned into a distribution.
    #[error("Invalid distribution: {reason}")]
    InvalidDistribution { reason: String },

    /// A name that is not part of the label set.
    #[error("Unknown label '{label}' in domain {domain}")]
    UnknownLabel { domain: &'static str, label: String },

    /// Index outside the label set it refers to.
    #[error("Index {index} out of range for domain {domain} (size {size})")]
    IndexOutOfRange {
        domain: &'static str,
        index: usize,
        size: usize,
    },

    /// Vector or matrix shapes don't line up.
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// The fused evidence assigns zero mass to every value.
    #[error("Degenerate evidence: every {domain} value has zero likelihood")]
    DegenerateEvidence { domain: &'static str },

    /// Data that the operation cannot accept (non-positive, NaN, empty).
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl ProbError {
    pub(crate) fn invalid_distribution(reason: impl Into<String>) -> Self {
        Self::InvalidDistribution {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
