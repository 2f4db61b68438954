//! Example growth and termination rules for the Accrete engine.
//!
//! The engine treats growth behaviour as host-supplied plug-ins; this crate
//! collects ready-made rules for reproducing classic random-graph models
//! with motif-driven growth:
//!
//! - [`PreferentialAttachment`] recovers Barabási–Albert-style scaling by
//!   attaching new structure in proportion to degree centrality.
//! - [`BinomialAttachment`] recovers Erdős–Rényi-style structure by
//!   attaching each new node to every base node with a fixed probability.
//! - [`RandomAttachment`] adds a single uniformly random anchor edge.
//! - [`NodeCeiling`] stops a simulation at a node-count ceiling.
//!
//! Each stochastic rule owns its own seeded RNG so simulations are
//! reproducible and independent models do not interfere.

mod compose;
mod error;
mod growth;
mod termination;

pub use crate::{
    compose::compose_offset,
    error::RuleConfigError,
    growth::{BinomialAttachment, PreferentialAttachment, RandomAttachment},
    termination::NodeCeiling,
};
