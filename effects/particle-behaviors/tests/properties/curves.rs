use particle_behaviors::{Curve, Keyframe};
use proptest::prelude::*;

const EPS: f32 = 1e-5;

/// Keys with strictly increasing times at least 0.01 apart
fn spaced_keys() -> impl Strategy<Value = Vec<Keyframe<f32>>> {
    prop::collection::btree_set(0u32..=100, 2..8).prop_flat_map(|ticks| {
        let times: Vec<f32> = ticks.into_iter().map(|t| t as f32 / 100.0).collect();
        let len = times.len();
        prop::collection::vec(-10.0f32..10.0, len).prop_map(move |values| {
            values
                .into_iter()
                .zip(times.iter().copied())
                .map(|(value, time)| Keyframe::new(value, time))
                .collect()
        })
    })
}

/// Keys with non-decreasing times, duplicates allowed
fn sorted_keys() -> impl Strategy<Value = Vec<Keyframe<f32>>> {
    prop::collection::vec((-100.0f32..100.0, 0.0f32..=1.0), 1..8).prop_map(|mut pairs| {
        pairs.sort_by(|a, b| a.1.total_cmp(&b.1));
        pairs
            .into_iter()
            .map(|(value, time)| Keyframe::new(value, time))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_before_first_key_is_first_value(
        keys in sorted_keys(),
        stepped in any::<bool>(),
        before in 0.0f32..10.0,
    ) {
        let first = keys[0];
        let curve = Curve::new(keys, stepped).unwrap();
        prop_assert_eq!(curve.interpolate(first.time - before), first.value);
        prop_assert_eq!(curve.interpolate(first.time), first.value);
    }

    #[test]
    fn prop_after_last_key_is_last_value(
        keys in spaced_keys(),
        stepped in any::<bool>(),
        after in 0.0f32..10.0,
    ) {
        let last = keys[keys.len() - 1];
        let curve = Curve::new(keys, stepped).unwrap();
        prop_assert_eq!(curve.interpolate(last.time + after), last.value);
    }

    #[test]
    fn prop_interpolate_is_idempotent(
        keys in sorted_keys(),
        stepped in any::<bool>(),
        age in -0.5f32..1.5,
    ) {
        let curve = Curve::new(keys, stepped).unwrap();
        let first = curve.interpolate(age);
        let second = curve.interpolate(age);
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn prop_smooth_is_continuous_at_keys(keys in spaced_keys()) {
        let curve = Curve::new(keys.clone(), false).unwrap();
        for key in &keys[1..keys.len() - 1] {
            prop_assert_eq!(curve.interpolate(key.time), key.value);
            let left = curve.interpolate(key.time - EPS);
            let right = curve.interpolate(key.time + EPS);
            prop_assert!((left - key.value).abs() < 0.05, "left {} vs {}", left, key.value);
            prop_assert!((right - key.value).abs() < 0.05, "right {} vs {}", right, key.value);
        }
    }

    #[test]
    fn prop_stepped_holds_left_value(keys in spaced_keys()) {
        let curve = Curve::new(keys.clone(), true).unwrap();
        for pair in keys.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert_eq!(curve.interpolate(b.time - EPS), a.value);
            prop_assert_eq!(curve.interpolate(b.time), b.value);
            prop_assert_eq!(curve.interpolate(b.time + EPS), b.value);
        }
    }

    #[test]
    fn prop_smooth_stays_between_brackets(keys in spaced_keys(), age in 0.0f32..=1.0) {
        let curve = Curve::new(keys.clone(), false).unwrap();
        let value = curve.interpolate(age);
        let lo = keys.iter().map(|k| k.value).fold(f32::INFINITY, f32::min);
        let hi = keys.iter().map(|k| k.value).fold(f32::NEG_INFINITY, f32::max);
        prop_assert!(value >= lo - 1e-4 && value <= hi + 1e-4);
    }
}
