//! Plug-in contracts for host-supplied growth behaviour.
//!
//! Both contracts are validated by a trial invocation at install time:
//! [`crate::GrowthModel::set_termination_rule`] evaluates the candidate
//! against the current base, and [`crate::GrowthModel::set_growth_rule`]
//! applies it to a fixed three-node path probe. A rule that fails its trial
//! is rejected and any previously installed rule is retained.

use crate::{
    error::RuleError,
    graph::{MotifGraph, MotifMode},
};

/// Decides whether the simulation loop should stop.
///
/// Returning `Ok(true)` stops the loop. Implementations should be pure with
/// respect to the graph's structure; the engine never relies on side
/// effects.
pub trait TerminationRule<Ty: MotifMode> {
    /// Evaluates the predicate against the current base graph.
    ///
    /// # Errors
    /// Implementations may fail; at install time a failure rejects the
    /// rule, during [`crate::GrowthModel::run`] it aborts the run.
    fn evaluate(&self, base: &MotifGraph<Ty>) -> Result<bool, RuleError>;
}

/// Fuses a selected candidate structure into the base graph.
///
/// The returned graph replaces the base wholesale when committed. It is
/// expected, though only exercised by the trial invocation, that the result
/// incorporates both inputs.
pub trait GrowthRule<Ty: MotifMode> {
    /// Applies the rule to the base and a candidate structure of the same
    /// directedness.
    ///
    /// # Errors
    /// A failure during [`crate::GrowthModel::run`] aborts the run without
    /// committing the iteration.
    fn apply(
        &mut self,
        base: &MotifGraph<Ty>,
        candidate: &MotifGraph<Ty>,
    ) -> Result<MotifGraph<Ty>, RuleError>;
}

/// Closure adapter returned by [`termination_fn`].
#[derive(Debug, Clone)]
pub struct TerminationFn<F>(F);

impl<Ty, F> TerminationRule<Ty> for TerminationFn<F>
where
    Ty: MotifMode,
    F: Fn(&MotifGraph<Ty>) -> Result<bool, RuleError>,
{
    fn evaluate(&self, base: &MotifGraph<Ty>) -> Result<bool, RuleError> {
        (self.0)(base)
    }
}

/// Adapts a plain closure into a [`TerminationRule`].
///
/// # Examples
/// ```
/// use accrete_core::{TerminationRule, UndirectedGraph, termination_fn};
///
/// let ceiling = termination_fn(|graph: &UndirectedGraph| Ok(graph.node_count() >= 5));
/// let base = UndirectedGraph::from_edges([(0, 1), (1, 2)]);
/// assert_eq!(ceiling.evaluate(&base), Ok(false));
/// ```
pub fn termination_fn<Ty, F>(rule: F) -> TerminationFn<F>
where
    Ty: MotifMode,
    F: Fn(&MotifGraph<Ty>) -> Result<bool, RuleError>,
{
    TerminationFn(rule)
}

/// Closure adapter returned by [`growth_fn`].
#[derive(Debug, Clone)]
pub struct GrowthFn<F>(F);

impl<Ty, F> GrowthRule<Ty> for GrowthFn<F>
where
    Ty: MotifMode,
    F: FnMut(&MotifGraph<Ty>, &MotifGraph<Ty>) -> Result<MotifGraph<Ty>, RuleError>,
{
    fn apply(
        &mut self,
        base: &MotifGraph<Ty>,
        candidate: &MotifGraph<Ty>,
    ) -> Result<MotifGraph<Ty>, RuleError> {
        (self.0)(base, candidate)
    }
}

/// Adapts a plain closure into a [`GrowthRule`].
pub fn growth_fn<Ty, F>(rule: F) -> GrowthFn<F>
where
    Ty: MotifMode,
    F: FnMut(&MotifGraph<Ty>, &MotifGraph<Ty>) -> Result<MotifGraph<Ty>, RuleError>,
{
    GrowthFn(rule)
}

/// Builds the fixed three-node path probe used to trial growth rules.
pub(crate) fn probe_graph<Ty: MotifMode>() -> MotifGraph<Ty> {
    MotifGraph::<Ty>::from_edges([(0, 1), (1, 2)])
}
