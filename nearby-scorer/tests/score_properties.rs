#![expect(
    clippy::expect_used,
    clippy::float_arithmetic,
    reason = "property tests fail fast and compare floating point values"
)]

//! Property coverage for score bounds and sub-score invariants.

use nearby_core::{Category, LatLng, Place};
use nearby_scorer::{ConvenienceScorer, density_score, distance_score};
use proptest::prelude::*;

fn nearby_place() -> impl Strategy<Value = Place> {
    (
        -0.05_f64..=0.05,
        -0.05_f64..=0.05,
        prop::collection::vec("[a-z]{1,8}", 0..4),
    )
        .prop_map(|(dlat, dlng, tags)| {
            Place::at(LatLng::new(48.8566 + dlat, 2.3522 + dlng)).with_types(tags)
        })
}

fn category() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(Category::ALL.to_vec()).prop_map(|c| c.as_str().to_owned()),
        "[a-z_]{1,12}",
    ]
}

proptest! {
    #[test]
    fn score_stays_within_scale(
        places in prop::collection::vec(nearby_place(), 0..25),
        category in category(),
    ) {
        let origin = LatLng::new(48.8566, 2.3522);
        let score = ConvenienceScorer::default()
            .score(&places, &category, &origin)
            .expect("valid inputs");
        prop_assert!((0.0..=10.0).contains(&score));
        prop_assert!(((score * 10.0).round() - score * 10.0).abs() < 1e-6);
    }

    #[test]
    fn distance_score_is_normalised_and_non_increasing(
        a in 0.0_f64..20.0,
        b in 0.0_f64..20.0,
        max in 0.1_f64..10.0,
    ) {
        let (near, far) = if a <= b { (a, b) } else { (b, a) };
        let near_score = distance_score(near, max);
        let far_score = distance_score(far, max);
        prop_assert!((0.0..=1.0).contains(&near_score));
        prop_assert!((0.0..=1.0).contains(&far_score));
        prop_assert!(near_score + 1e-12 >= far_score);
    }

    #[test]
    fn density_never_exceeds_one(count in 0_usize..1000, ideal in 1_u32..50) {
        let density = density_score(count, ideal);
        prop_assert!((0.0..=1.0).contains(&density));
    }
}
