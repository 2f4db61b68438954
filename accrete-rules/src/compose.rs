//! Structure-fusion helper shared by the example growth rules.

use accrete_core::{MotifGraph, MotifMode};
use petgraph::{graph::NodeIndex, visit::EdgeRef};

/// Unions `addition` into `base`, relabelling the addition's nodes to start
/// immediately after the base's node range.
///
/// The composed graph keeps the base's node indices unchanged; the
/// addition's node `i` lands at index `base.node_count() + i`. The helper
/// only fuses structure — connecting the two halves is each rule's job.
///
/// # Examples
/// ```
/// use accrete_core::UndirectedGraph;
/// use accrete_rules::compose_offset;
///
/// let base = UndirectedGraph::from_edges([(0, 1), (1, 2)]);
/// let addition = UndirectedGraph::from_edges([(0, 1)]);
/// let composed = compose_offset(&base, &addition);
/// assert_eq!(composed.node_count(), 5);
/// assert_eq!(composed.edge_count(), 3);
/// ```
#[must_use]
pub fn compose_offset<Ty: MotifMode>(
    base: &MotifGraph<Ty>,
    addition: &MotifGraph<Ty>,
) -> MotifGraph<Ty> {
    let mut composed = base.clone();
    let offset = composed.node_count();
    for _ in 0..addition.node_count() {
        composed.add_node(());
    }
    for edge in addition.edge_references() {
        composed.add_edge(
            NodeIndex::new(offset + edge.source().index()),
            NodeIndex::new(offset + edge.target().index()),
            (),
        );
    }
    composed
}

#[cfg(test)]
mod tests {
    use accrete_core::UndirectedGraph;
    use petgraph::graph::NodeIndex;

    use super::*;

    #[test]
    fn addition_lands_past_the_base_range() {
        let base = UndirectedGraph::from_edges([(0, 1), (1, 2)]);
        let addition = UndirectedGraph::from_edges([(0, 1), (1, 2)]);
        let composed = compose_offset(&base, &addition);
        assert_eq!(composed.node_count(), 6);
        assert_eq!(composed.edge_count(), 4);
        assert!(
            composed
                .find_edge(NodeIndex::new(3), NodeIndex::new(4))
                .is_some()
        );
        assert!(
            composed
                .find_edge(NodeIndex::new(4), NodeIndex::new(5))
                .is_some()
        );
        // The two halves stay disconnected until a rule anchors them.
        assert!(
            composed
                .find_edge(NodeIndex::new(2), NodeIndex::new(3))
                .is_none()
        );
    }
}
