use particle_behaviors::{Behavior, BehaviorOrder, BehaviorSet};
use test_case::test_case;

use crate::common::{double_alpha, set_alpha, spawn_into_new_pool};

fn alpha_after_init(behaviors: Vec<Behavior>) -> f32 {
    let mut set = BehaviorSet::new();
    for behavior in behaviors {
        set.push(behavior).unwrap();
    }
    let pool = spawn_into_new_pool(&set, 1, 1.0, 1);
    pool.iter_live().next().unwrap().alpha
}

#[test_case(false ; "writer registered first")]
#[test_case(true ; "reader registered first")]
fn test_tiers_decide_order_not_registration(reader_first: bool) {
    let writer = set_alpha(0.5, BehaviorOrder::Spawn);
    let reader = double_alpha(BehaviorOrder::Normal);
    let behaviors = if reader_first {
        vec![reader, writer]
    } else {
        vec![writer, reader]
    };
    assert_eq!(alpha_after_init(behaviors), 1.0);
}

#[test]
fn test_swapping_tiers_changes_result() {
    let expected = alpha_after_init(vec![
        set_alpha(0.5, BehaviorOrder::Spawn),
        double_alpha(BehaviorOrder::Normal),
    ]);
    let swapped = alpha_after_init(vec![
        set_alpha(0.5, BehaviorOrder::Normal),
        double_alpha(BehaviorOrder::Spawn),
    ]);
    assert_eq!(expected, 1.0);
    assert_eq!(swapped, 0.5);
    assert_ne!(expected, swapped);
}

#[test]
fn test_ties_run_in_registration_order() {
    let writer_then_reader = alpha_after_init(vec![
        set_alpha(0.25, BehaviorOrder::Normal),
        double_alpha(BehaviorOrder::Normal),
    ]);
    let reader_then_writer = alpha_after_init(vec![
        double_alpha(BehaviorOrder::Normal),
        set_alpha(0.25, BehaviorOrder::Normal),
    ]);
    assert_eq!(writer_then_reader, 0.5);
    assert_eq!(reader_then_writer, 0.25);
}

#[test]
fn test_late_tier_runs_last() {
    let alpha = alpha_after_init(vec![
        double_alpha(BehaviorOrder::Late),
        set_alpha(0.2, BehaviorOrder::Normal),
        set_alpha(0.1, BehaviorOrder::Spawn),
    ]);
    assert_eq!(alpha, 0.4);
}
