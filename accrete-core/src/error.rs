//! Error types for the Accrete growth engine.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and the crate result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Identifies which of the two plug-in slots an error refers to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RuleKind {
    /// The termination predicate slot.
    Termination,
    /// The growth rule slot.
    Growth,
}

impl RuleKind {
    /// Returns the slot name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Termination => "termination",
            Self::Growth => "growth",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error raised by a caller-supplied rule.
///
/// Rules are host code; the engine treats their failures as opaque and
/// carries the message through [`ModelError::RuleIncompatible`] and
/// [`ModelError::RuleFailed`].
///
/// # Examples
/// ```
/// use accrete_core::RuleError;
///
/// let err = RuleError::new("candidate too small");
/// assert_eq!(err.message(), "candidate too small");
/// ```
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("{message}")]
pub struct RuleError {
    message: Arc<str>,
}

impl RuleError {
    /// Creates a rule error from a human-readable message.
    #[must_use]
    pub fn new(message: impl Into<Arc<str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message supplied by the rule.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Error type produced when constructing or running a [`crate::GrowthModel`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ModelError {
    /// The base graph does not carry enough structure to grow from.
    #[error("base graph must have at least two edges (got {edges})")]
    TooFewEdges {
        /// Edge count of the rejected graph.
        edges: usize,
    },
    /// A rule failed its trial invocation and was not installed.
    #[error("{kind} rule rejected on trial invocation: {error}")]
    RuleIncompatible {
        /// Which plug-in slot rejected the rule.
        kind: RuleKind,
        /// Failure reported by the trial invocation.
        #[source]
        error: RuleError,
    },
    /// An operation required a rule that has not been installed.
    #[error("no {kind} rule has been set")]
    RuleUnset {
        /// Which plug-in slot was empty.
        kind: RuleKind,
    },
    /// An installed rule failed while the engine was using it.
    #[error("{kind} rule failed: {error}")]
    RuleFailed {
        /// Which plug-in slot produced the failure.
        kind: RuleKind,
        /// Underlying rule error bubbled up by the engine.
        #[source]
        error: RuleError,
    },
    /// The maximum motif order must be at least two.
    #[error("max_order must be at least 2 (got {got})")]
    InvalidMaxOrder {
        /// The invalid order supplied by the caller.
        got: usize,
    },
    /// Ratio weighting was requested but no motif occurs in the base graph.
    #[error("ratio weighting is undefined when every occurrence count is zero")]
    WeightingUndefined,
    /// The sampler was handed an empty record sequence.
    #[error("cannot draw from an empty record sequence")]
    EmptyDistribution,
}

define_error_codes! {
    /// Stable codes describing [`ModelError`] variants.
    enum ModelErrorCode for ModelError {
        /// The base graph does not carry enough structure to grow from.
        TooFewEdges => TooFewEdges { .. } => "MODEL_TOO_FEW_EDGES",
        /// A rule failed its trial invocation and was not installed.
        RuleIncompatible => RuleIncompatible { .. } => "MODEL_RULE_INCOMPATIBLE",
        /// An operation required a rule that has not been installed.
        RuleUnset => RuleUnset { .. } => "MODEL_RULE_UNSET",
        /// An installed rule failed while the engine was using it.
        RuleFailed => RuleFailed { .. } => "MODEL_RULE_FAILED",
        /// The maximum motif order must be at least two.
        InvalidMaxOrder => InvalidMaxOrder { .. } => "MODEL_INVALID_MAX_ORDER",
        /// Ratio weighting was requested with all-zero occurrence counts.
        WeightingUndefined => WeightingUndefined => "MODEL_WEIGHTING_UNDEFINED",
        /// The sampler was handed an empty record sequence.
        EmptyDistribution => EmptyDistribution => "MODEL_EMPTY_DISTRIBUTION",
    }
}

impl ModelError {
    /// Retrieve the inner [`RuleError`] when the error originated in a
    /// caller-supplied rule.
    #[must_use]
    pub const fn rule_error(&self) -> Option<&RuleError> {
        match self {
            Self::RuleIncompatible { error, .. } | Self::RuleFailed { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the engine API.
pub type Result<T> = core::result::Result<T, ModelError>;
