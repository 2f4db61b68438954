//! Error types for rule configuration.

use thiserror::Error;

/// Error produced when constructing a rule with invalid parameters.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum RuleConfigError {
    /// Attachment probabilities must lie in the closed unit interval.
    #[error("attachment probability must be within [0, 1] (got {got})")]
    InvalidProbability {
        /// The out-of-range probability supplied by the caller.
        got: f64,
    },
    /// Preferential attachment must form at least one connection per step.
    #[error("connection count must be at least 1 (got {got})")]
    InvalidConnectionCount {
        /// The invalid connection count supplied by the caller.
        got: usize,
    },
}
