//! Accrete core library: a motif-driven graph growth simulation engine.
//!
//! The engine repeatedly measures which small connected sub-structures
//! ("motifs") are over- or under-represented in a base graph, draws one
//! motif from a selection-weight distribution, and fuses it into the base
//! through a caller-supplied growth rule until a caller-supplied
//! termination rule fires.
//!
//! Graphs are petgraph graphs and directedness is fixed at the type level
//! by [`MotifMode`]. Host code plugs behaviour in through the
//! [`TerminationRule`] and [`GrowthRule`] traits (closures adapt via
//! [`termination_fn`] and [`growth_fn`]) and drives the loop through
//! [`GrowthModel::run`]. The pipeline stages are also exposed directly:
//! [`enumerate_motifs`], [`count_occurrences`], [`assign_weights`], and
//! [`draw_weighted`].

mod catalog;
mod count;
mod error;
mod graph;
mod model;
mod rules;
mod sample;
mod weight;

pub use crate::{
    catalog::{MotifRecord, enumerate_motifs},
    count::count_occurrences,
    error::{ModelError, ModelErrorCode, Result, RuleError, RuleKind},
    graph::{
        CandidateGraph, DirectedGraph, MotifGraph, MotifMode, UndirectedGraph, to_directed,
        to_undirected,
    },
    model::{GrowthModel, GrowthModelBuilder},
    rules::{GrowthFn, GrowthRule, TerminationFn, TerminationRule, growth_fn, termination_fn},
    sample::{Weighted, draw_weighted},
    weight::{WeightPolicy, assign_weights},
};
