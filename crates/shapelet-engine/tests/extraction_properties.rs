//! End-to-end properties of fitted shapelet extractors

use ndarray::{Array2, Array3};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use shapelet_engine::{
    candidate_budget, candidate_count, length_weights, min_znorm_distance, LengthAllocation,
    ShapeletConfig, ShapeletError, UltraFastShapelets,
};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn dataset(n: usize, m: usize, seed: u64) -> Array2<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Array2::from_shape_fn((n, m), |_| rand::Rng::gen_range(&mut rng, -5.0..5.0))
}

#[test]
fn seeded_fits_are_reproducible() {
    init_logging();
    let x = dataset(30, 25, 1);
    let config = ShapeletConfig::default().with_percentage(0.4).with_seed(2024);

    let mut first = UltraFastShapelets::new(config.clone()).unwrap();
    let mut second = UltraFastShapelets::new(config).unwrap();
    let a = first.fit_transform(&x).unwrap();
    let b = second.fit_transform(&x).unwrap();

    assert_eq!(first.shapelets(), second.shapelets());
    assert_eq!(first.allocation(), second.allocation());
    assert_eq!(a, b);
}

#[test]
fn different_seeds_usually_differ() {
    let x = dataset(30, 25, 1);
    let mut first = UltraFastShapelets::new(ShapeletConfig::dense().with_seed(1)).unwrap();
    let mut second = UltraFastShapelets::new(ShapeletConfig::dense().with_seed(2)).unwrap();
    first.fit(&x).unwrap();
    second.fit(&x).unwrap();

    assert_ne!(first.shapelets(), second.shapelets());
}

#[test]
fn refit_with_same_seed_repeats() {
    let x = dataset(10, 16, 3);
    let mut extractor = UltraFastShapelets::new(ShapeletConfig::dense().with_seed(77)).unwrap();
    let before = extractor.fit(&x).unwrap().shapelets().to_vec();
    let after = extractor.fit(&x).unwrap().shapelets().to_vec();
    assert_eq!(before, after);
}

#[test]
fn small_scenario_yields_single_zero_column() {
    init_logging();
    let x = dataset(5, 10, 9);
    let config = ShapeletConfig::default().with_percentage(0.2).with_seed(0);
    let mut extractor = UltraFastShapelets::new(config).unwrap();
    let features = extractor.fit_transform(&x).unwrap();

    assert_eq!(extractor.budget(), 1);
    assert_eq!(features.dim(), (5, 1));
    assert_eq!(features[[extractor.shapelets()[0].series(), 0]], 0.0);
}

#[test]
fn single_series_full_percentage_has_one_shapelet() {
    let x = dataset(1, 8, 4);
    let mut extractor = UltraFastShapelets::new(ShapeletConfig::dense().with_seed(5)).unwrap();
    let features = extractor.fit_transform(&x).unwrap();
    assert_eq!(extractor.budget(), 1);
    assert_eq!(features.dim(), (1, 1));
}

#[test]
fn multivariate_distances_use_shapelet_channel() {
    // Channel 1 is channel 0 shifted by a constant, which raw distance must see
    let x = Array3::from_shape_fn((8, 14, 2), |(i, t, k)| {
        (t as f64 * 0.7 + i as f64).sin() + k as f64 * 100.0
    });
    let mut extractor = UltraFastShapelets::new(ShapeletConfig::dense().with_seed(10)).unwrap();
    let features = extractor.fit_transform(&x).unwrap();

    for (j, shapelet) in extractor.shapelets().iter().enumerate() {
        let column = features.column(j);
        assert_eq!(column[shapelet.series()], 0.0);
        assert!(column.iter().all(|&d| d < 100.0));
    }
}

#[test]
fn invalid_percentage_fails_construction() {
    for pct in [0.0, 1.5, -1.0] {
        let result = UltraFastShapelets::new(ShapeletConfig::default().with_percentage(pct));
        assert!(matches!(result, Err(ShapeletError::InvalidPercentage(_))));
    }
}

proptest! {
    #[test]
    fn allocation_sums_to_budget(
        n in 1usize..60,
        m in 3usize..60,
        pct in 0.001f64..=1.0,
        seed in any::<u64>(),
    ) {
        let budget = candidate_budget(n, pct);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let allocation = LengthAllocation::plan(budget, &length_weights(n, m), &mut rng).unwrap();

        prop_assert!(budget >= 1);
        prop_assert_eq!(allocation.len(), m - 2);
        prop_assert_eq!(allocation.total(), budget);
    }

    #[test]
    fn allocation_sums_for_arbitrary_weights(
        weights in proptest::collection::vec(0usize..500, 1..40),
        budget in 1usize..200,
        seed in any::<u64>(),
    ) {
        prop_assume!(weights.iter().sum::<usize>() > 0);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let allocation = LengthAllocation::plan(budget, &weights, &mut rng).unwrap();
        prop_assert_eq!(allocation.total(), budget);
    }

    #[test]
    fn candidate_count_formula(n in 0usize..100, m in 1usize..100, l in 1usize..120) {
        let expected = if l >= m { n } else { n * (m - l + 1) };
        prop_assert_eq!(candidate_count(n, m, l), expected);
    }

    #[test]
    fn znorm_distance_nonnegative_and_affine_invariant(
        values in proptest::collection::vec(-100.0f64..100.0, 4..40),
        start in 0usize..4,
        scale in 0.5f64..5.0,
        shift in -50.0f64..50.0,
    ) {
        let len = 3;
        let start = start.min(values.len() - len);
        let series = ndarray::Array1::from(values.clone());
        let window = &values[start..start + len];
        let mean = window.iter().sum::<f64>() / len as f64;
        let spread = window.iter().map(|v| (v - mean).abs()).fold(0.0, f64::max);
        prop_assume!(spread > 1.0);

        let shapelet: ndarray::Array1<f64> = window.iter().map(|v| v * scale + shift).collect();
        let d = min_znorm_distance(series.view(), shapelet.view()).unwrap();
        prop_assert!(d >= 0.0);
        prop_assert!(d < 1e-3, "distance {}", d);
    }

    #[test]
    fn transform_shape_matches_rows_and_budget(
        n_fit in 1usize..20,
        n_new in 1usize..20,
        m in 4usize..24,
        extra in 0usize..10,
        seed in any::<u64>(),
    ) {
        let mut extractor = UltraFastShapelets::new(
            ShapeletConfig::default().with_percentage(0.5).with_seed(seed),
        ).unwrap();
        extractor.fit(&dataset(n_fit, m, seed)).unwrap();

        let features = extractor.transform(&dataset(n_new, m + extra, seed ^ 1)).unwrap();
        prop_assert_eq!(features.dim(), (n_new, extractor.budget()));
    }
}
