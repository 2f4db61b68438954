//! Occurrence counting over the motif catalogue.
//!
//! A motif occurrence is an injective mapping from motif nodes to base nodes
//! under which the motif equals the structure induced on the mapped nodes.
//! Every distinct mapping counts, so a motif with non-trivial automorphisms
//! is counted once per labelling. The matcher is an exact backtracking
//! search with degree pruning; with the `parallel` feature the per-motif
//! counts fan out across rayon workers, and record order is preserved
//! because each worker writes its own record in place.

use petgraph::visit::EdgeRef;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::instrument;

use crate::{
    catalog::{self, MotifRecord},
    error::Result,
    graph::{MotifGraph, MotifMode},
};

/// Counts occurrences of every catalogue motif in `base`.
///
/// Builds the catalogue for `base`'s directedness mode up to `max_order` and
/// sets each record's value to the exact number of labelled embeddings of
/// that motif in `base`. A base with no edges yields all-zero counts, which
/// is valid input to the weighting stage.
///
/// # Errors
/// Returns [`crate::ModelError::InvalidMaxOrder`] when `max_order < 2`.
///
/// # Examples
/// ```
/// use accrete_core::{UndirectedGraph, count_occurrences};
///
/// let cycle = UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);
/// let records = count_occurrences(&cycle, 3)?;
/// let total: f64 = records.iter().map(|record| record.value()).sum();
/// assert_eq!(total, 20.0);
/// # Ok::<(), accrete_core::ModelError>(())
/// ```
#[instrument(
    name = "engine.count",
    err,
    skip(base),
    fields(
        nodes = base.node_count(),
        edges = base.edge_count(),
        directed = Ty::is_directed(),
    ),
)]
pub fn count_occurrences<Ty: MotifMode>(
    base: &MotifGraph<Ty>,
    max_order: usize,
) -> Result<Vec<MotifRecord<Ty>>> {
    let mut records = catalog::enumerate_motifs::<Ty>(max_order)?;
    let view = AdjacencyView::new(base);

    #[cfg(feature = "parallel")]
    records.par_iter_mut().for_each(|record| {
        let pattern = AdjacencyView::new(record.motif());
        record.set_value(view.count_embeddings(&pattern) as f64);
    });

    #[cfg(not(feature = "parallel"))]
    for record in &mut records {
        let pattern = AdjacencyView::new(record.motif());
        record.set_value(view.count_embeddings(&pattern) as f64);
    }

    Ok(records)
}

/// Flattened adjacency of a graph, precomputed once per counting pass so
/// the matcher's inner loop is a pair of array probes.
struct AdjacencyView {
    node_count: usize,
    adjacency: Vec<Vec<bool>>,
    out_degree: Vec<usize>,
    in_degree: Vec<usize>,
}

impl AdjacencyView {
    fn new<Ty: MotifMode>(graph: &MotifGraph<Ty>) -> Self {
        let node_count = graph.node_count();
        let mut view = Self {
            node_count,
            adjacency: vec![vec![false; node_count]; node_count],
            out_degree: vec![0; node_count],
            in_degree: vec![0; node_count],
        };
        for edge in graph.edge_references() {
            let source = edge.source().index();
            let target = edge.target().index();
            view.set_edge(source, target);
            if !Ty::is_directed() && source != target {
                view.set_edge(target, source);
            }
        }
        view
    }

    fn set_edge(&mut self, source: usize, target: usize) {
        if !self.adjacency[source][target] {
            self.adjacency[source][target] = true;
            self.out_degree[source] += 1;
            self.in_degree[target] += 1;
        }
    }

    /// Counts injective mappings of `pattern` into this view under which
    /// the induced structure matches exactly.
    fn count_embeddings(&self, pattern: &Self) -> u64 {
        if pattern.node_count > self.node_count {
            return 0;
        }
        let mut assigned = vec![usize::MAX; pattern.node_count];
        let mut used = vec![false; self.node_count];
        self.extend_embedding(pattern, 0, &mut assigned, &mut used)
    }

    fn extend_embedding(
        &self,
        pattern: &Self,
        depth: usize,
        assigned: &mut [usize],
        used: &mut [bool],
    ) -> u64 {
        if depth == pattern.node_count {
            return 1;
        }
        let mut total = 0;
        'candidates: for node in 0..self.node_count {
            if used[node]
                || self.out_degree[node] < pattern.out_degree[depth]
                || self.in_degree[node] < pattern.in_degree[depth]
            {
                continue;
            }
            for prior in 0..depth {
                let image = assigned[prior];
                if pattern.adjacency[depth][prior] != self.adjacency[node][image]
                    || pattern.adjacency[prior][depth] != self.adjacency[image][node]
                {
                    continue 'candidates;
                }
            }
            assigned[depth] = node;
            used[node] = true;
            total += self.extend_embedding(pattern, depth + 1, assigned, used);
            used[node] = false;
            assigned[depth] = usize::MAX;
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use petgraph::Directed;
    use rstest::{fixture, rstest};

    use crate::graph::{UndirectedGraph, to_directed};

    use super::*;

    #[fixture]
    fn five_cycle() -> UndirectedGraph {
        UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)])
    }

    fn values<Ty: MotifMode>(records: &[MotifRecord<Ty>]) -> Vec<f64> {
        records.iter().map(MotifRecord::value).collect()
    }

    #[rstest]
    fn undirected_five_cycle_counts_sum_to_twenty(five_cycle: UndirectedGraph) {
        let records = count_occurrences(&five_cycle, 3).expect("max_order 3 is valid");
        assert_eq!(values(&records), vec![10.0, 10.0, 0.0]);
    }

    #[rstest]
    fn directed_five_cycle_counts_sum_to_ten(five_cycle: UndirectedGraph) {
        let doubled = to_directed(&five_cycle);
        let records = count_occurrences(&doubled, 3).expect("max_order 3 is valid");
        let total: f64 = records.iter().map(MotifRecord::value).sum();
        assert_eq!(total, 10.0);
        // All ten embeddings sit on the reciprocal dyad; no triad motif is
        // induced in a doubled cycle.
        assert_eq!(records[1].value(), 10.0);
    }

    #[test]
    fn triangle_embeds_itself_and_its_edges() {
        let triangle = UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 0)]);
        let records = count_occurrences(&triangle, 3).expect("max_order 3 is valid");
        // Three edges with two labellings each, no induced open path, six
        // labellings of the triangle onto itself.
        assert_eq!(values(&records), vec![6.0, 0.0, 6.0]);
    }

    #[test]
    fn edgeless_base_counts_zero_everywhere() {
        let mut empty = UndirectedGraph::default();
        for _ in 0..3 {
            empty.add_node(());
        }
        let records = count_occurrences(&empty, 3).expect("max_order 3 is valid");
        assert!(records.iter().all(|record| record.value() == 0.0));
    }

    #[test]
    fn base_smaller_than_motif_counts_zero_for_it() {
        let dyads = UndirectedGraph::from_edges([(0, 1), (1, 2)]);
        let records = count_occurrences(&dyads, 4).expect("max_order 4 is valid");
        for record in &records {
            if record.motif().node_count() == 4 {
                assert_eq!(record.value(), 0.0);
            }
        }
    }

    #[rstest]
    #[case::zero(0)]
    #[case::one(1)]
    fn invalid_max_order_is_rejected(#[case] max_order: usize, five_cycle: UndirectedGraph) {
        let err = count_occurrences(&five_cycle, max_order)
            .expect_err("orders below two must be rejected");
        assert_eq!(err, crate::ModelError::InvalidMaxOrder { got: max_order });
    }

    #[test]
    fn direction_is_respected_by_the_matcher() {
        // A one-way triangle contains three single-arc embeddings and
        // nothing reciprocal.
        let one_way = MotifGraph::<Directed>::from_edges([(0, 1), (1, 2), (2, 0)]);
        let records = count_occurrences(&one_way, 2).expect("max_order 2 is valid");
        assert_eq!(values(&records), vec![3.0, 0.0]);
    }
}
