use particle_behaviors::{Curve, Keyframe};
use test_case::test_case;

use crate::common::assert_close;

fn fade_in_out(stepped: bool) -> Curve<f32> {
    Curve::new(
        vec![
            Keyframe::new(0.0, 0.0),
            Keyframe::new(1.0, 0.25),
            Keyframe::new(0.0, 1.0),
        ],
        stepped,
    )
    .unwrap()
}

#[test_case(0.0, 0.0 ; "at spawn")]
#[test_case(0.25, 1.0 ; "exact middle key")]
#[test_case(0.625, 0.5 ; "halfway down")]
#[test_case(1.0, 0.0 ; "at death")]
#[test_case(-0.5, 0.0 ; "before first key clamps")]
#[test_case(1.5, 0.0 ; "after last key clamps")]
fn test_smooth_fade(age: f32, expected: f32) {
    assert_close(fade_in_out(false).interpolate(age), expected);
}

#[test_case(0.1, 0.0 ; "before first step")]
#[test_case(0.25, 1.0 ; "on the step")]
#[test_case(0.5, 1.0 ; "holds the passed key")]
#[test_case(0.999, 1.0 ; "just before last key")]
#[test_case(1.0, 0.0 ; "at last key")]
fn test_stepped_fade(age: f32, expected: f32) {
    assert_eq!(fade_in_out(true).interpolate(age), expected);
}

#[test]
fn test_first_value_needs_no_search() {
    let curve = fade_in_out(false);
    assert_eq!(curve.first_value(), curve.interpolate(0.0));
    assert_eq!(curve.last_value(), 0.0);
}

#[test]
fn test_long_curve_uses_same_brackets() {
    // Enough keys to leave the linear scan
    let keys: Vec<_> = (0..=10)
        .map(|i| Keyframe::new(i as f32 * 10.0, i as f32 / 10.0))
        .collect();
    let curve = Curve::new(keys, false).unwrap();
    assert_close(curve.interpolate(0.55), 55.0);
    assert_close(curve.interpolate(0.3), 30.0);
}
