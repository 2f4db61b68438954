//! Weighted random selection over an ordered record sequence.

use rand::Rng;

use crate::{
    catalog::MotifRecord,
    error::{ModelError, Result},
    graph::MotifMode,
};

/// An item the sampler can draw by weight.
pub trait Weighted {
    /// Returns the item's non-negative selection weight.
    fn weight(&self) -> f64;
}

impl<Ty: MotifMode> Weighted for MotifRecord<Ty> {
    fn weight(&self) -> f64 {
        self.value()
    }
}

impl<T> Weighted for (T, f64) {
    fn weight(&self) -> f64 {
        self.1
    }
}

/// Draws one item with probability proportional to its weight.
///
/// Weights are normalised by their total at draw time, one uniform unit
/// draw is taken from `rng`, and the items are walked in sequence order
/// accumulating normalised weights until the running sum reaches the draw.
/// Sequence order is part of the contract: ties resolve to the earliest
/// item, and callers must not re-sort between weighting and drawing. The
/// threshold is taken from `(0, 1]` so an item holding the entire mass is
/// selected whatever the draw, and zero-weight prefixes never are. If
/// rounding keeps the running sum below the threshold the final item is
/// returned.
///
/// # Errors
/// Returns [`ModelError::EmptyDistribution`] for an empty sequence and
/// [`ModelError::WeightingUndefined`] when the weight total is zero,
/// negative, or non-finite.
///
/// # Examples
/// ```
/// use accrete_core::draw_weighted;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let items = [("rare", 0.0), ("always", 1.0), ("never", 0.0)];
/// let mut rng = SmallRng::seed_from_u64(7);
/// let chosen = draw_weighted(&items, &mut rng)?;
/// assert_eq!(chosen.0, "always");
/// # Ok::<(), accrete_core::ModelError>(())
/// ```
pub fn draw_weighted<'items, T, R>(items: &'items [T], rng: &mut R) -> Result<&'items T>
where
    T: Weighted,
    R: Rng + ?Sized,
{
    let Some(last) = items.last() else {
        return Err(ModelError::EmptyDistribution);
    };
    let total: f64 = items.iter().map(Weighted::weight).sum();
    if !(total.is_finite() && total > 0.0) {
        return Err(ModelError::WeightingUndefined);
    }
    let threshold = 1.0 - rng.r#gen::<f64>();
    let mut cumulative = 0.0;
    for item in items {
        cumulative += item.weight() / total;
        if cumulative >= threshold {
            return Ok(item);
        }
    }
    Ok(last)
}
