//! Error types raised while validating scoring configuration.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when a [`ScoringConfig`](crate::ScoringConfig) is unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringConfigError {
    /// A dimension or penalty weight was negative or not finite.
    #[error("weight '{name}' must be finite and non-negative, got {value}")]
    InvalidWeight {
        /// Name of the offending weight.
        name: &'static str,
        /// Value supplied.
        value: f32,
    },
    /// A ratio threshold fell outside `0.0..=1.0`.
    #[error("threshold '{name}' must lie within 0..=1, got {value}")]
    InvalidThreshold {
        /// Name of the offending threshold.
        name: &'static str,
        /// Value supplied.
        value: f32,
    },
    /// The dislike saturation count was zero.
    #[error("dislike saturation must count at least one keyword hit")]
    ZeroDislikeSaturation,
}
