//! Property tests for the weighted sampler.

use accrete_core::{ModelError, draw_weighted};
use proptest::prelude::*;
use rand::{SeedableRng, rngs::SmallRng};

proptest! {
    #[test]
    fn draw_returns_a_member_or_a_typed_error(
        weights in proptest::collection::vec(0.0f64..10.0, 1..16),
        seed in any::<u64>(),
    ) {
        let items: Vec<(usize, f64)> = weights.iter().copied().enumerate().collect();
        let total: f64 = weights.iter().sum();
        let mut rng = SmallRng::seed_from_u64(seed);
        let result = draw_weighted(&items, &mut rng);
        if total > 0.0 {
            let chosen = result.expect("positive totals must draw");
            prop_assert!(items.iter().any(|item| item.0 == chosen.0));
        } else {
            prop_assert_eq!(result.expect_err("zero totals must fail"), ModelError::WeightingUndefined);
        }
    }

    #[test]
    fn scaling_weights_preserves_the_draw(
        weights in proptest::collection::vec(0.01f64..10.0, 1..16),
        seed in any::<u64>(),
        scale in proptest::sample::select(vec![0.25f64, 0.5, 2.0, 4.0, 8.0]),
    ) {
        let items: Vec<(usize, f64)> = weights.iter().copied().enumerate().collect();
        let scaled: Vec<(usize, f64)> = weights
            .iter()
            .map(|weight| weight * scale)
            .enumerate()
            .collect();
        let plain = {
            let mut rng = SmallRng::seed_from_u64(seed);
            draw_weighted(&items, &mut rng).expect("positive totals must draw").0
        };
        let rescaled = {
            let mut rng = SmallRng::seed_from_u64(seed);
            draw_weighted(&scaled, &mut rng).expect("positive totals must draw").0
        };
        prop_assert_eq!(plain, rescaled);
    }
}
