use glam::{Vec2, Vec3};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

use particle_behaviors::behavior::{
    RangedAlphaBehavior, RangedAlphaConfig, StaticScaleBehavior, StaticScaleConfig,
};
use particle_behaviors::particle::ScratchSlot;
use particle_behaviors::{
    Behavior, BehaviorConfig, BehaviorError, BehaviorRegistry, BehaviorSet, EmitterBehavior,
    EmitterConfig, ParticlePool, ParticleRng,
};

use crate::common::{assert_close, init_logging, spawn_into_new_pool};

#[test]
fn test_ranged_alpha_thousand_particles() {
    let mut set = BehaviorSet::new();
    set.push(Behavior::AlphaRanged(
        RangedAlphaBehavior::new(&RangedAlphaConfig { min: 0.2, max: 0.8 }).unwrap(),
    ))
    .unwrap();

    let mut pool = spawn_into_new_pool(&set, 1000, 10.0, 42);
    assert_eq!(pool.live_count(), 1000);
    let spawned: Vec<f32> = pool.iter_live().map(|p| p.alpha).collect();
    assert!(spawned.iter().all(|a| (0.2..0.8).contains(a)));

    for _ in 0..30 {
        set.step(&mut pool, 1.0 / 60.0);
    }
    let later: Vec<f32> = pool.iter_live().map(|p| p.alpha).collect();
    assert_eq!(spawned, later);
}

#[test_case(0.0, 0.0 ; "at spawn")]
#[test_case(0.25, 1.0 ; "halfway through growth")]
#[test_case(0.5, 2.0 ; "growth complete")]
#[test_case(0.75, 2.0 ; "frozen after duration")]
#[test_case(1.5, 2.0 ; "frozen long after")]
fn test_duration_gated_scale(age: f32, expected: f32) {
    let mut set = BehaviorSet::new();
    set.push(Behavior::ScaleStatic(
        StaticScaleBehavior::new(&StaticScaleConfig {
            min: 2.0,
            max: 2.0,
            scale_duration: 0.5,
            is_spawn_fully_scaled: false,
        })
        .unwrap(),
    ))
    .unwrap();

    let mut pool = spawn_into_new_pool(&set, 1, 2.0, 9);
    let frames = (age / 0.25).round() as usize;
    for _ in 0..frames {
        set.step(&mut pool, 0.25);
    }

    let particle = pool.iter_live().next().unwrap();
    assert_close(particle.age, age);
    assert_eq!(particle.scale, Vec2::splat(expected));
}

#[test]
fn test_duration_gated_scale_reaches_drawn_final() {
    let mut set = BehaviorSet::new();
    set.push(Behavior::ScaleStatic(
        StaticScaleBehavior::new(&StaticScaleConfig {
            min: 1.0,
            max: 3.0,
            scale_duration: 0.5,
            is_spawn_fully_scaled: false,
        })
        .unwrap(),
    ))
    .unwrap();

    let mut pool = spawn_into_new_pool(&set, 16, 2.0, 5);
    assert!(pool.iter_live().all(|p| p.scale == Vec2::ZERO));

    set.step(&mut pool, 0.5);
    set.step(&mut pool, 0.3);
    // The only scale behavior owns the first scratch slot
    for particle in pool.iter_live() {
        let final_scale = particle.scratch.get(ScratchSlot::default());
        assert!((1.0..3.0).contains(&final_scale));
        assert_eq!(particle.scale, Vec2::splat(final_scale));
    }
}

#[test]
fn test_fully_scaled_spawn_has_no_update() {
    let behavior = StaticScaleBehavior::new(&StaticScaleConfig {
        min: 1.5,
        max: 1.5,
        scale_duration: 0.5,
        is_spawn_fully_scaled: true,
    })
    .unwrap();
    assert!(!behavior.has_update());
    assert_eq!(behavior.scratch_slots(), 0);

    let mut set = BehaviorSet::new();
    set.push(Behavior::ScaleStatic(behavior)).unwrap();
    let pool = spawn_into_new_pool(&set, 3, 1.0, 1);
    assert!(pool.iter_live().all(|p| p.scale == Vec2::splat(1.5)));
}

#[cfg(feature = "yaml")]
const EMITTER_YAML: &str = r"
behaviors:
  - type: color
    config:
      color:
        list:
          - { value: [1.0, 1.0, 1.0], time: 0.0 }
          - { value: [1.0, 0.0, 0.0], time: 1.0 }
  - type: alpha
    config:
      alpha:
        list:
          - { value: 0.0, time: 0.0 }
          - { value: 1.0, time: 0.25 }
          - { value: 0.0, time: 1.0 }
  - type: scale
    config:
      scale:
        list:
          - { value: 1.0, time: 0.0 }
          - { value: 3.0, time: 1.0 }
      minMult: 0.5
  - type: spawnPoint
    config: { minX: -4, maxX: 4, minY: 0, maxY: 0 }
";

#[cfg(feature = "yaml")]
#[test]
fn test_yaml_emitter_end_to_end() {
    init_logging();
    let config = EmitterConfig::from_yaml_str(EMITTER_YAML).unwrap();
    let set = BehaviorSet::from_emitter_config(&BehaviorRegistry::builtin(), &config).unwrap();

    let order: Vec<&str> = set.iter().map(|b| b.type_key()).collect();
    assert_eq!(order, vec!["spawnPoint", "color", "alpha", "scale"]);

    let mut pool = ParticlePool::with_capacity(8);
    let mut rng = ParticleRng::new(11);
    assert_eq!(set.spawn(&mut pool, 8, 1.0, &mut rng).unwrap(), 8);

    for particle in pool.iter_live() {
        assert_eq!(particle.alpha, 0.0);
        assert_eq!(particle.tint, Vec3::ONE);
        assert_eq!(particle.position.y, 0.0);
        assert!((-4.0..=4.0).contains(&particle.position.x));
        assert_eq!(particle.position.x.fract(), 0.0);
    }

    set.step(&mut pool, 0.5);
    for particle in pool.iter_live() {
        assert_close(particle.age_percent, 0.5);
        assert_close(particle.alpha, 2.0 / 3.0);
        assert_close(particle.tint.y, 0.5);
        // Curve value 2.0 scaled by a multiplier in [0.5, 1)
        assert!((1.0..2.0).contains(&particle.scale.x));
    }
}

#[test]
fn test_registry_rejects_bad_entry_before_spawn() {
    init_logging();
    let registry = BehaviorRegistry::builtin();
    let result = BehaviorSet::from_configs(
        &registry,
        &[
            BehaviorConfig::new("alphaStatic", json!({ "value": 1.0 })),
            BehaviorConfig::new("alpha", json!({ "alpha": { "list": [] } })),
        ],
    );
    assert!(matches!(
        result.unwrap_err(),
        BehaviorError::EmptyCurve { property: "alpha" }
    ));
}
