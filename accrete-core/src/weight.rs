//! Selection-weight assignment over occurrence counts.
//!
//! Both policies rewrite each record's value in place, so the same record
//! sequence flows from the counting stage straight into the sampler.

use crate::{
    catalog::MotifRecord,
    error::{ModelError, Result},
    graph::MotifMode,
};

/// Policy converting raw occurrence counts into selection weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WeightPolicy {
    /// Each motif's weight is its share of the total occurrence count.
    /// Motifs that never occur can never be selected.
    Ratio,
    /// Each motif's weight is the Poisson probability mass at its catalogue
    /// index, with the mean occurrence count as the shape parameter. The
    /// index stands in for structural complexity, and every motif keeps a
    /// strictly positive weight however rarely it occurs.
    #[default]
    Poisson,
}

/// Rewrites each record's value from occurrence count to selection weight.
///
/// Ratio weights sum to one. Poisson weights are strictly positive whenever
/// the mean count is positive but do not sum to one; the sampler normalises
/// at draw time. When every count is zero the Poisson policy falls back to
/// uniform weights so no motif becomes unselectable.
///
/// # Errors
/// Returns [`ModelError::WeightingUndefined`] when the ratio policy is
/// requested and every occurrence count is zero.
///
/// # Examples
/// ```
/// use accrete_core::{UndirectedGraph, WeightPolicy, assign_weights, count_occurrences};
///
/// let cycle = UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);
/// let mut records = count_occurrences(&cycle, 3)?;
/// assign_weights(&mut records, WeightPolicy::Poisson)?;
/// assert!(records.iter().all(|record| record.value() > 0.0));
/// # Ok::<(), accrete_core::ModelError>(())
/// ```
pub fn assign_weights<Ty: MotifMode>(
    records: &mut [MotifRecord<Ty>],
    policy: WeightPolicy,
) -> Result<()> {
    match policy {
        WeightPolicy::Ratio => assign_ratio(records),
        WeightPolicy::Poisson => {
            assign_poisson(records);
            Ok(())
        }
    }
}

fn assign_ratio<Ty: MotifMode>(records: &mut [MotifRecord<Ty>]) -> Result<()> {
    let total: f64 = records.iter().map(MotifRecord::value).sum();
    if total <= 0.0 {
        return Err(ModelError::WeightingUndefined);
    }
    for record in records.iter_mut() {
        record.set_value(record.value() / total);
    }
    Ok(())
}

fn assign_poisson<Ty: MotifMode>(records: &mut [MotifRecord<Ty>]) {
    if records.is_empty() {
        return;
    }
    let total: f64 = records.iter().map(MotifRecord::value).sum();
    let lambda = total / records.len() as f64;
    if lambda <= 0.0 {
        let uniform = 1.0 / records.len() as f64;
        for record in records.iter_mut() {
            record.set_value(uniform);
        }
        return;
    }
    for record in records.iter_mut() {
        record.set_value(poisson_pmf(record.index(), lambda));
    }
}

/// Poisson probability mass at rank `k`, evaluated in log space so large
/// means and ranks stay finite.
fn poisson_pmf(k: usize, lambda: f64) -> f64 {
    let rank = k as f64;
    (rank * lambda.ln() - lambda - ln_factorial(k)).exp()
}

fn ln_factorial(k: usize) -> f64 {
    (2..=k).map(|i| (i as f64).ln()).sum()
}
