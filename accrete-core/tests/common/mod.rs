//! Shared fixtures for behavioural tests.

use accrete_core::{RuleError, UndirectedGraph};
use petgraph::{graph::NodeIndex, visit::EdgeRef};

/// Builds the five-node cycle used across behavioural tests.
#[must_use]
pub fn five_cycle() -> UndirectedGraph {
    UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)])
}

/// Appends `motif` to `base` and anchors its first node to node zero.
///
/// # Errors
/// Never fails; the signature matches the growth-rule contract.
pub fn anchor_growth(
    base: &UndirectedGraph,
    motif: &UndirectedGraph,
) -> Result<UndirectedGraph, RuleError> {
    let mut next = base.clone();
    let offset = next.node_count();
    for _ in 0..motif.node_count() {
        next.add_node(());
    }
    for edge in motif.edge_references() {
        next.add_edge(
            NodeIndex::new(offset + edge.source().index()),
            NodeIndex::new(offset + edge.target().index()),
            (),
        );
    }
    next.add_edge(NodeIndex::new(0), NodeIndex::new(offset), ());
    Ok(next)
}
