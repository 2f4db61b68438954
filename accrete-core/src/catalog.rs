//! Motif catalogue enumeration.
//!
//! A motif is a small single-component graph used as a comparison template.
//! For each order the catalogue starts from the complete graph and removes
//! one edge at a time from the end of the canonical edge list, recording
//! every intermediate that still forms a single (weakly) connected component
//! spanning all nodes, then records the complete graph itself. Directed
//! catalogues additionally append the doubled orientation of undirected
//! motifs the sweep did not already produce.
//!
//! Entries are keyed by their labelled edge list, not by isomorphism class;
//! entries that coincide under relabelling may both appear.

use petgraph::{Directed, EdgeType, algo::connected_components, graph::NodeIndex, visit::EdgeRef};

use crate::{
    error::{ModelError, Result},
    graph::{DirectedGraph, MotifGraph, MotifMode, UndirectedGraph, to_directed},
};

/// One catalogue entry: a motif, its enumeration index, and a value that
/// holds an occurrence count after counting and a selection weight after
/// weighting.
#[derive(Debug, Clone)]
pub struct MotifRecord<Ty: MotifMode> {
    index: usize,
    motif: MotifGraph<Ty>,
    value: f64,
}

impl<Ty: MotifMode> MotifRecord<Ty> {
    pub(crate) fn new(index: usize, motif: MotifGraph<Ty>) -> Self {
        Self {
            index,
            motif,
            value: 0.0,
        }
    }

    /// Returns the motif's position in enumeration order.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the motif graph.
    #[must_use]
    pub fn motif(&self) -> &MotifGraph<Ty> {
        &self.motif
    }

    /// Returns the record's current value: zero after enumeration, an
    /// occurrence count after [`crate::count_occurrences`], a selection
    /// weight after [`crate::assign_weights`].
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    pub(crate) fn set_value(&mut self, value: f64) {
        self.value = value;
    }
}

/// Enumerates every motif from order 2 up to `max_order` inclusive.
///
/// Records carry a monotonically increasing index in enumeration order,
/// ascending through the orders, with `value` zeroed as a placeholder for
/// the counting stage.
///
/// # Errors
/// Returns [`ModelError::InvalidMaxOrder`] when `max_order < 2`.
///
/// # Examples
/// ```
/// use accrete_core::enumerate_motifs;
/// use petgraph::Undirected;
///
/// let records = enumerate_motifs::<Undirected>(3)?;
/// assert_eq!(records.len(), 3);
/// # Ok::<(), accrete_core::ModelError>(())
/// ```
pub fn enumerate_motifs<Ty: MotifMode>(max_order: usize) -> Result<Vec<MotifRecord<Ty>>> {
    if max_order < 2 {
        return Err(ModelError::InvalidMaxOrder { got: max_order });
    }
    let mut records = Vec::new();
    for order in 2..=max_order {
        for motif in Ty::connected_motifs(order) {
            records.push(MotifRecord::new(records.len(), motif));
        }
    }
    Ok(records)
}

pub(crate) fn undirected_motifs(order: usize) -> Vec<UndirectedGraph> {
    removal_sweep(order, &complete_undirected_edges(order))
}

pub(crate) fn directed_motifs(order: usize) -> Vec<DirectedGraph> {
    let mut graphs = removal_sweep::<Directed>(order, &complete_directed_edges(order));
    // Doubling step: an undirected motif is appended as a reciprocal arc
    // pair unless some orientation already carries exactly its pair list as
    // arcs. The comparison is over labelled edge lists, so the complete
    // orientation is re-added even though the sweep produced it.
    let arc_lists: Vec<Vec<(u32, u32)>> = graphs.iter().map(sorted_edge_list).collect();
    for motif in undirected_motifs(order) {
        let pairs = sorted_edge_list(&motif);
        if !arc_lists.contains(&pairs) {
            graphs.push(to_directed(&motif));
        }
    }
    graphs
}

/// Runs the end-removal sweep over a canonical complete edge list.
///
/// Removing from the end means every intermediate is a prefix of the list;
/// prefixes are recorded while they remain a single (weakly) connected
/// component over all `order` nodes, and the complete graph is recorded
/// last.
fn removal_sweep<Ty: MotifMode>(order: usize, complete: &[(u32, u32)]) -> Vec<MotifGraph<Ty>> {
    let mut graphs = Vec::new();
    for len in (1..complete.len()).rev() {
        let graph = graph_from_edges::<Ty>(order, &complete[..len]);
        if connected_components(&graph) == 1 {
            graphs.push(graph);
        }
    }
    graphs.push(graph_from_edges::<Ty>(order, complete));
    graphs
}

fn graph_from_edges<Ty: MotifMode>(order: usize, edges: &[(u32, u32)]) -> MotifGraph<Ty> {
    let mut graph = MotifGraph::<Ty>::with_capacity(order, edges.len());
    for _ in 0..order {
        graph.add_node(());
    }
    for &(source, target) in edges {
        graph.add_edge(
            NodeIndex::new(source as usize),
            NodeIndex::new(target as usize),
            (),
        );
    }
    graph
}

fn complete_undirected_edges(order: usize) -> Vec<(u32, u32)> {
    let mut edges = Vec::new();
    for i in 0..order as u32 {
        for j in (i + 1)..order as u32 {
            edges.push((i, j));
        }
    }
    edges
}

fn complete_directed_edges(order: usize) -> Vec<(u32, u32)> {
    let mut edges = Vec::new();
    for i in 0..order as u32 {
        for j in 0..order as u32 {
            if i != j {
                edges.push((i, j));
            }
        }
    }
    edges
}

fn sorted_edge_list<Ty: EdgeType>(graph: &MotifGraph<Ty>) -> Vec<(u32, u32)> {
    let mut edges: Vec<(u32, u32)> = graph
        .edge_references()
        .map(|edge| (edge.source().index() as u32, edge.target().index() as u32))
        .collect();
    edges.sort_unstable();
    edges
}
