//! Growth-model orchestration.
//!
//! [`GrowthModel`] owns the mutable base graph, a frozen snapshot of the
//! original, the installed rules, and the seeded sampler RNG, and composes
//! the catalogue, counting, weighting, and sampling stages into the
//! simulation loop.

use std::fmt;

use rand::{SeedableRng, rngs::SmallRng};
use tracing::{debug, info, instrument, warn};

use crate::{
    count::count_occurrences,
    error::{ModelError, Result, RuleKind},
    graph::{CandidateGraph, MotifGraph, MotifMode},
    rules::{GrowthRule, TerminationRule, probe_graph},
    sample::draw_weighted,
    weight::{WeightPolicy, assign_weights},
};

/// Configures and constructs [`GrowthModel`] instances.
///
/// # Examples
/// ```
/// use accrete_core::{GrowthModelBuilder, UndirectedGraph};
///
/// let base = UndirectedGraph::from_edges([(0, 1), (1, 2)]);
/// let model = GrowthModelBuilder::new()
///     .with_seed(42)
///     .build(base)
///     .expect("a two-edge base is valid");
/// assert_eq!(model.base().edge_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GrowthModelBuilder {
    seed: u64,
}

impl GrowthModelBuilder {
    /// Creates a builder with the default seed of zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the seed for the model's sampler RNG, making runs reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the configured seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Validates the base graph and constructs a model around it.
    ///
    /// The base becomes the working graph and a deep copy is frozen as the
    /// original for [`GrowthModel::revert_base`]. Node identifiers are
    /// dense and contiguous from zero by construction of the graph type.
    ///
    /// # Errors
    /// Returns [`ModelError::TooFewEdges`] when the base has fewer than two
    /// edges.
    pub fn build<Ty: MotifMode>(self, base: MotifGraph<Ty>) -> Result<GrowthModel<Ty>> {
        if base.edge_count() < 2 {
            return Err(ModelError::TooFewEdges {
                edges: base.edge_count(),
            });
        }
        let original = base.clone();
        Ok(GrowthModel {
            base,
            original,
            termination: None,
            growth: None,
            rng: SmallRng::seed_from_u64(self.seed),
        })
    }
}

/// Motif-driven growth simulation over a single base graph.
///
/// The base is uniquely owned and replaced wholesale when a growth rule
/// commits; callers observe it through [`Self::base`] and the frozen
/// construction-time snapshot through [`Self::original`].
///
/// # Examples
/// ```
/// use accrete_core::{GrowthModelBuilder, UndirectedGraph, WeightPolicy,
///     growth_fn, termination_fn};
/// use petgraph::{graph::NodeIndex, visit::EdgeRef};
///
/// let base = UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 0)]);
/// let mut model = GrowthModelBuilder::new().with_seed(7).build(base)?;
/// model.set_termination_rule(termination_fn(|graph: &UndirectedGraph| {
///     Ok(graph.node_count() >= 12)
/// }))?;
/// model.set_growth_rule(growth_fn(
///     |base: &UndirectedGraph, motif: &UndirectedGraph| {
///         // Append the motif and anchor its first node to the base.
///         let mut next = base.clone();
///         let offset = next.node_count();
///         for _ in 0..motif.node_count() {
///             next.add_node(());
///         }
///         for edge in motif.edge_references() {
///             next.add_edge(
///                 NodeIndex::new(offset + edge.source().index()),
///                 NodeIndex::new(offset + edge.target().index()),
///                 (),
///             );
///         }
///         next.add_edge(NodeIndex::new(0), NodeIndex::new(offset), ());
///         Ok(next)
///     },
/// ))?;
/// model.run(3, WeightPolicy::Poisson)?;
/// assert!(model.base().node_count() >= 12);
/// assert_eq!(model.original().node_count(), 3);
/// # Ok::<(), accrete_core::ModelError>(())
/// ```
pub struct GrowthModel<Ty: MotifMode> {
    base: MotifGraph<Ty>,
    original: MotifGraph<Ty>,
    termination: Option<Box<dyn TerminationRule<Ty>>>,
    growth: Option<Box<dyn GrowthRule<Ty>>>,
    rng: SmallRng,
}

impl<Ty: MotifMode> fmt::Debug for GrowthModel<Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowthModel")
            .field("base", &self.base)
            .field("original", &self.original)
            .field("termination", &self.termination.is_some())
            .field("growth", &self.growth.is_some())
            .field("rng", &self.rng)
            .finish()
    }
}

impl<Ty: MotifMode> GrowthModel<Ty> {
    /// Returns a read-only view of the current base graph.
    #[must_use]
    pub fn base(&self) -> &MotifGraph<Ty> {
        &self.base
    }

    /// Returns a read-only view of the construction-time snapshot.
    #[must_use]
    pub fn original(&self) -> &MotifGraph<Ty> {
        &self.original
    }

    /// Replaces the working base graph, leaving the original untouched.
    ///
    /// # Errors
    /// Returns [`ModelError::TooFewEdges`] when `base` has fewer than two
    /// edges; the current base is retained.
    pub fn set_base(&mut self, base: MotifGraph<Ty>) -> Result<()> {
        if base.edge_count() < 2 {
            return Err(ModelError::TooFewEdges {
                edges: base.edge_count(),
            });
        }
        self.base = base;
        Ok(())
    }

    /// Restores the base graph from the construction-time snapshot,
    /// discarding all simulated growth. Installed rules and the sampler RNG
    /// are untouched.
    pub fn revert_base(&mut self) {
        self.base = self.original.clone();
    }

    /// Installs a termination rule after a trial evaluation against the
    /// current base. The trial result is discarded.
    ///
    /// # Errors
    /// Returns [`ModelError::RuleIncompatible`] when the trial fails; a
    /// previously installed rule is retained.
    pub fn set_termination_rule<R>(&mut self, rule: R) -> Result<()>
    where
        R: TerminationRule<Ty> + 'static,
    {
        if let Err(error) = rule.evaluate(&self.base) {
            warn!(kind = %RuleKind::Termination, %error, "rule rejected on trial invocation");
            return Err(ModelError::RuleIncompatible {
                kind: RuleKind::Termination,
                error,
            });
        }
        self.termination = Some(Box::new(rule));
        Ok(())
    }

    /// Installs a growth rule after a trial application to a fixed
    /// three-node path probe. The trial result is discarded and the base is
    /// not altered.
    ///
    /// # Errors
    /// Returns [`ModelError::RuleIncompatible`] when the trial fails; a
    /// previously installed rule is retained.
    pub fn set_growth_rule<R>(&mut self, mut rule: R) -> Result<()>
    where
        R: GrowthRule<Ty> + 'static,
    {
        let probe = probe_graph::<Ty>();
        if let Err(error) = rule.apply(&self.base, &probe) {
            warn!(kind = %RuleKind::Growth, %error, "rule rejected on trial invocation");
            return Err(ModelError::RuleIncompatible {
                kind: RuleKind::Growth,
                error,
            });
        }
        self.growth = Some(Box::new(rule));
        Ok(())
    }

    /// Coerces `candidate` to the model's directedness mode and applies the
    /// installed growth rule to it.
    ///
    /// With `commit` the rule's result replaces the base; without it the
    /// base is left untouched and the result is only returned.
    ///
    /// # Errors
    /// Returns [`ModelError::RuleUnset`] when no growth rule is installed
    /// and [`ModelError::RuleFailed`] when the rule fails; the base is
    /// unchanged in both cases.
    pub fn apply_growth_rule(
        &mut self,
        candidate: impl Into<CandidateGraph>,
        commit: bool,
    ) -> Result<MotifGraph<Ty>> {
        let coerced = Ty::coerce(candidate.into());
        let result = self.apply_installed_rule(&coerced)?;
        if commit {
            self.base = result.clone();
        }
        Ok(result)
    }

    /// Runs the simulation loop until the termination rule evaluates true.
    ///
    /// Each iteration counts motif occurrences in the current base at
    /// `max_order`, converts the counts to weights under `policy`, draws
    /// one motif, and commits the growth rule's result as the new base. The
    /// catalogue is recomputed every iteration because the base changes
    /// under it. There is no iteration cap: a termination rule that never
    /// fires loops forever.
    ///
    /// # Errors
    /// Returns [`ModelError::InvalidMaxOrder`] when `max_order < 2`,
    /// [`ModelError::RuleUnset`] when either rule is missing,
    /// [`ModelError::WeightingUndefined`] when the ratio policy meets
    /// all-zero counts, and [`ModelError::RuleFailed`] when a rule fails
    /// mid-loop; a failed iteration commits nothing.
    #[instrument(
        name = "engine.run",
        err,
        skip(self),
        fields(
            nodes = self.base.node_count(),
            edges = self.base.edge_count(),
            directed = Ty::is_directed(),
        ),
    )]
    pub fn run(&mut self, max_order: usize, policy: WeightPolicy) -> Result<()> {
        if max_order < 2 {
            return Err(ModelError::InvalidMaxOrder { got: max_order });
        }
        if self.termination.is_none() {
            return Err(ModelError::RuleUnset {
                kind: RuleKind::Termination,
            });
        }
        if self.growth.is_none() {
            return Err(ModelError::RuleUnset {
                kind: RuleKind::Growth,
            });
        }

        let mut iterations = 0u64;
        while !self.evaluate_termination()? {
            let mut records = count_occurrences(&self.base, max_order)?;
            assign_weights(&mut records, policy)?;
            let chosen = draw_weighted(&records, &mut self.rng)?;
            let index = chosen.index();
            let motif = chosen.motif().clone();
            self.base = self.apply_installed_rule(&motif)?;
            iterations += 1;
            debug!(
                iteration = iterations,
                motif = index,
                nodes = self.base.node_count(),
                edges = self.base.edge_count(),
                "committed growth step"
            );
        }
        info!(
            iterations,
            nodes = self.base.node_count(),
            edges = self.base.edge_count(),
            "termination rule satisfied"
        );
        Ok(())
    }

    fn evaluate_termination(&self) -> Result<bool> {
        let rule = self.termination.as_ref().ok_or(ModelError::RuleUnset {
            kind: RuleKind::Termination,
        })?;
        rule.evaluate(&self.base)
            .map_err(|error| ModelError::RuleFailed {
                kind: RuleKind::Termination,
                error,
            })
    }

    fn apply_installed_rule(&mut self, candidate: &MotifGraph<Ty>) -> Result<MotifGraph<Ty>> {
        let rule = self.growth.as_mut().ok_or(ModelError::RuleUnset {
            kind: RuleKind::Growth,
        })?;
        rule.apply(&self.base, candidate)
            .map_err(|error| ModelError::RuleFailed {
                kind: RuleKind::Growth,
                error,
            })
    }
}
