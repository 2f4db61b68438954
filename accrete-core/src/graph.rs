//! Graph storage modes and direction coercion.
//!
//! The engine stores graphs in petgraph and fixes directedness at the type
//! level: every entry point is generic over [`MotifMode`], implemented by
//! petgraph's [`Directed`] and [`Undirected`] markers. Host code holding a
//! graph of unknown direction wraps it in [`CandidateGraph`] and lets the
//! mode coerce it at the model boundary.

use petgraph::{Directed, EdgeType, Undirected, graph::Graph, visit::EdgeRef};

use crate::catalog;

/// Unlabelled petgraph graph in the engine's node-index space.
pub type MotifGraph<Ty> = Graph<(), (), Ty>;

/// Directed graph as exchanged across the [`CandidateGraph`] boundary.
pub type DirectedGraph = MotifGraph<Directed>;

/// Undirected graph as exchanged across the [`CandidateGraph`] boundary.
pub type UndirectedGraph = MotifGraph<Undirected>;

mod sealed {
    pub trait Sealed {}

    impl Sealed for petgraph::Directed {}
    impl Sealed for petgraph::Undirected {}
}

/// Directedness mode of a growth model.
///
/// Sealed: the engine supports exactly the two petgraph marker types. The
/// mode supplies the per-order motif sweep and the coercion from a runtime
/// [`CandidateGraph`] into the mode's graph type, so the rest of the engine
/// never branches on direction at runtime.
pub trait MotifMode: EdgeType + sealed::Sealed + Send + Sync + 'static {
    /// Enumerates every single-component motif on `order` nodes, in
    /// catalogue order.
    fn connected_motifs(order: usize) -> Vec<MotifGraph<Self>>
    where
        Self: Sized;

    /// Coerces a candidate of either direction into this mode.
    fn coerce(candidate: CandidateGraph) -> MotifGraph<Self>
    where
        Self: Sized;
}

impl MotifMode for Directed {
    fn connected_motifs(order: usize) -> Vec<MotifGraph<Self>> {
        catalog::directed_motifs(order)
    }

    fn coerce(candidate: CandidateGraph) -> MotifGraph<Self> {
        match candidate {
            CandidateGraph::Directed(graph) => graph,
            CandidateGraph::Undirected(graph) => to_directed(&graph),
        }
    }
}

impl MotifMode for Undirected {
    fn connected_motifs(order: usize) -> Vec<MotifGraph<Self>> {
        catalog::undirected_motifs(order)
    }

    fn coerce(candidate: CandidateGraph) -> MotifGraph<Self> {
        match candidate {
            CandidateGraph::Directed(graph) => to_undirected(&graph),
            CandidateGraph::Undirected(graph) => graph,
        }
    }
}

/// A graph of either direction, supplied by host code at the coercion
/// boundary of [`crate::GrowthModel::apply_growth_rule`].
///
/// # Examples
/// ```
/// use accrete_core::{CandidateGraph, UndirectedGraph};
///
/// let candidate = CandidateGraph::from(UndirectedGraph::from_edges([(0, 1)]));
/// assert!(matches!(candidate, CandidateGraph::Undirected(_)));
/// ```
#[derive(Debug, Clone)]
pub enum CandidateGraph {
    /// Directed candidate structure.
    Directed(DirectedGraph),
    /// Undirected candidate structure.
    Undirected(UndirectedGraph),
}

impl From<DirectedGraph> for CandidateGraph {
    fn from(graph: DirectedGraph) -> Self {
        Self::Directed(graph)
    }
}

impl From<UndirectedGraph> for CandidateGraph {
    fn from(graph: UndirectedGraph) -> Self {
        Self::Undirected(graph)
    }
}

/// Doubles every undirected edge into a reciprocal arc pair.
///
/// # Examples
/// ```
/// use accrete_core::{UndirectedGraph, to_directed};
///
/// let path = UndirectedGraph::from_edges([(0, 1), (1, 2)]);
/// let doubled = to_directed(&path);
/// assert_eq!(doubled.edge_count(), 4);
/// ```
#[must_use]
pub fn to_directed(graph: &UndirectedGraph) -> DirectedGraph {
    let mut directed = DirectedGraph::with_capacity(graph.node_count(), graph.edge_count() * 2);
    for _ in 0..graph.node_count() {
        directed.add_node(());
    }
    for edge in graph.edge_references() {
        directed.update_edge(edge.source(), edge.target(), ());
        directed.update_edge(edge.target(), edge.source(), ());
    }
    directed
}

/// Collapses arcs into undirected edges, merging reciprocal pairs.
///
/// # Examples
/// ```
/// use accrete_core::{DirectedGraph, to_undirected};
///
/// let arcs = DirectedGraph::from_edges([(0, 1), (1, 0), (1, 2)]);
/// let collapsed = to_undirected(&arcs);
/// assert_eq!(collapsed.edge_count(), 2);
/// ```
#[must_use]
pub fn to_undirected(graph: &DirectedGraph) -> UndirectedGraph {
    let mut undirected = UndirectedGraph::with_capacity(graph.node_count(), graph.edge_count());
    for _ in 0..graph.node_count() {
        undirected.add_node(());
    }
    for edge in graph.edge_references() {
        undirected.update_edge(edge.source(), edge.target(), ());
    }
    undirected
}

#[cfg(test)]
mod tests {
    use petgraph::graph::NodeIndex;

    use super::*;

    #[test]
    fn doubling_preserves_nodes_and_doubles_edges() {
        let cycle = UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 0)]);
        let doubled = to_directed(&cycle);
        assert_eq!(doubled.node_count(), 3);
        assert_eq!(doubled.edge_count(), 6);
        for edge in cycle.edge_references() {
            assert!(doubled.find_edge(edge.source(), edge.target()).is_some());
            assert!(doubled.find_edge(edge.target(), edge.source()).is_some());
        }
    }

    #[test]
    fn collapsing_merges_reciprocal_arcs() {
        let arcs = DirectedGraph::from_edges([(0, 1), (1, 0), (2, 1)]);
        let collapsed = to_undirected(&arcs);
        assert_eq!(collapsed.node_count(), 3);
        assert_eq!(collapsed.edge_count(), 2);
        assert!(
            collapsed
                .find_edge(NodeIndex::new(0), NodeIndex::new(1))
                .is_some()
        );
        assert!(
            collapsed
                .find_edge(NodeIndex::new(1), NodeIndex::new(2))
                .is_some()
        );
    }

    #[test]
    fn coercion_round_trip_keeps_structure() {
        let path = UndirectedGraph::from_edges([(0, 1), (1, 2)]);
        let doubled = Directed::coerce(CandidateGraph::from(path.clone()));
        let collapsed = Undirected::coerce(CandidateGraph::from(doubled));
        assert_eq!(collapsed.node_count(), path.node_count());
        assert_eq!(collapsed.edge_count(), path.edge_count());
    }
}
