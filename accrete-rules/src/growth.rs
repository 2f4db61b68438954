//! Example growth rules over undirected bases.

use accrete_core::{GrowthRule, RuleError, UndirectedGraph};
use petgraph::{Undirected, graph::NodeIndex};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::{compose::compose_offset, error::RuleConfigError};

/// Barabási–Albert-style preferential attachment.
///
/// Fuses the candidate into the base, then forms a fixed number of anchor
/// edges from randomly chosen new nodes to base nodes accepted by rejection
/// sampling on degree centrality, so well-connected base nodes attract new
/// structure.
#[derive(Debug)]
pub struct PreferentialAttachment {
    connections: usize,
    rng: SmallRng,
}

impl PreferentialAttachment {
    /// Creates a rule forming `connections` preferential edges per step.
    ///
    /// # Errors
    /// Returns [`RuleConfigError::InvalidConnectionCount`] when
    /// `connections` is zero.
    pub fn new(connections: usize, seed: u64) -> Result<Self, RuleConfigError> {
        if connections == 0 {
            return Err(RuleConfigError::InvalidConnectionCount { got: connections });
        }
        Ok(Self {
            connections,
            rng: SmallRng::seed_from_u64(seed),
        })
    }
}

impl GrowthRule<Undirected> for PreferentialAttachment {
    fn apply(
        &mut self,
        base: &UndirectedGraph,
        candidate: &UndirectedGraph,
    ) -> Result<UndirectedGraph, RuleError> {
        let base_nodes = base.node_count();
        let new_nodes = candidate.node_count();
        if new_nodes == 0 {
            return Err(RuleError::new(
                "preferential attachment needs a non-empty candidate",
            ));
        }
        if base.edge_count() == 0 {
            // Every centrality would be zero and the rejection loop could
            // never accept.
            return Err(RuleError::new(
                "preferential attachment needs an edge-bearing base",
            ));
        }

        let mut next = compose_offset(base, candidate);
        let scale = base_nodes.saturating_sub(1).max(1) as f64;
        for _ in 0..self.connections {
            loop {
                let target = self.rng.gen_range(0..base_nodes);
                let centrality = base.neighbors(NodeIndex::new(target)).count() as f64 / scale;
                if self.rng.r#gen::<f64>() <= centrality {
                    let source = base_nodes + self.rng.gen_range(0..new_nodes);
                    next.update_edge(NodeIndex::new(source), NodeIndex::new(target), ());
                    break;
                }
            }
        }
        Ok(next)
    }
}

/// Erdős–Rényi-style binomial attachment.
///
/// Fuses the candidate into the base, then gives each new node an edge to
/// every base node independently with the configured probability.
#[derive(Debug)]
pub struct BinomialAttachment {
    probability: f64,
    rng: SmallRng,
}

impl BinomialAttachment {
    /// Creates a rule attaching with the given per-pair probability.
    ///
    /// # Errors
    /// Returns [`RuleConfigError::InvalidProbability`] unless
    /// `probability` lies in `[0, 1]`.
    pub fn new(probability: f64, seed: u64) -> Result<Self, RuleConfigError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(RuleConfigError::InvalidProbability { got: probability });
        }
        Ok(Self {
            probability,
            rng: SmallRng::seed_from_u64(seed),
        })
    }
}

impl GrowthRule<Undirected> for BinomialAttachment {
    fn apply(
        &mut self,
        base: &UndirectedGraph,
        candidate: &UndirectedGraph,
    ) -> Result<UndirectedGraph, RuleError> {
        let base_nodes = base.node_count();
        let mut next = compose_offset(base, candidate);
        for new in 0..candidate.node_count() {
            for target in 0..base_nodes {
                if self.rng.r#gen::<f64>() <= self.probability {
                    next.update_edge(
                        NodeIndex::new(base_nodes + new),
                        NodeIndex::new(target),
                        (),
                    );
                }
            }
        }
        Ok(next)
    }
}

/// Uniform random attachment.
///
/// Fuses the candidate into the base and adds a single edge between a
/// uniformly chosen base node and a uniformly chosen new node.
#[derive(Debug)]
pub struct RandomAttachment {
    rng: SmallRng,
}

impl RandomAttachment {
    /// Creates a rule drawing from the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl GrowthRule<Undirected> for RandomAttachment {
    fn apply(
        &mut self,
        base: &UndirectedGraph,
        candidate: &UndirectedGraph,
    ) -> Result<UndirectedGraph, RuleError> {
        let base_nodes = base.node_count();
        let new_nodes = candidate.node_count();
        if base_nodes == 0 || new_nodes == 0 {
            return Err(RuleError::new(
                "random attachment needs a non-empty base and candidate",
            ));
        }
        let mut next = compose_offset(base, candidate);
        let target = self.rng.gen_range(0..base_nodes);
        let source = base_nodes + self.rng.gen_range(0..new_nodes);
        next.update_edge(NodeIndex::new(source), NodeIndex::new(target), ());
        Ok(next)
    }
}
