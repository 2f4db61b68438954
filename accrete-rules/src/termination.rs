//! Example termination rules.

use accrete_core::{MotifGraph, MotifMode, RuleError, TerminationRule};

/// Stops a simulation once the base graph reaches a node-count ceiling.
///
/// # Examples
/// ```
/// use accrete_core::{TerminationRule, UndirectedGraph};
/// use accrete_rules::NodeCeiling;
///
/// let ceiling = NodeCeiling::new(4);
/// let base = UndirectedGraph::from_edges([(0, 1), (1, 2)]);
/// assert_eq!(ceiling.evaluate(&base), Ok(false));
/// let bigger = UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 3)]);
/// assert_eq!(ceiling.evaluate(&bigger), Ok(true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeCeiling {
    limit: usize,
}

impl NodeCeiling {
    /// Creates a predicate that fires once the base holds `limit` nodes.
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Returns the configured ceiling.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }
}

impl<Ty: MotifMode> TerminationRule<Ty> for NodeCeiling {
    fn evaluate(&self, base: &MotifGraph<Ty>) -> Result<bool, RuleError> {
        Ok(base.node_count() >= self.limit)
    }
}
