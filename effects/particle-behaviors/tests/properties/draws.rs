use particle_behaviors::behavior::{ScaleBehavior, ScaleConfig};
use particle_behaviors::random::{draw, draw_int};
use particle_behaviors::{Behavior, BehaviorSet, Keyframe, ParticleRng, ValueList};
use proptest::prelude::*;

use crate::common::spawn_into_new_pool;

proptest! {
    #[test]
    fn prop_draw_stays_in_half_open_range(
        seed in any::<u64>(),
        min in -100.0f32..100.0,
        width in 0.0f32..100.0,
    ) {
        let max = min + width;
        let mut rng = ParticleRng::new(seed);
        for _ in 0..32 {
            let value = draw(&mut rng, min, max);
            if max > min {
                prop_assert!(value >= min && value < max, "{} not in [{}, {})", value, min, max);
            } else {
                prop_assert_eq!(value, min);
            }
        }
    }

    #[test]
    fn prop_draw_int_is_whole_and_inclusive(
        seed in any::<u64>(),
        min in -50i32..50,
        width in 0i32..20,
    ) {
        let (min, max) = (min as f32, (min + width) as f32);
        let mut rng = ParticleRng::new(seed);
        for _ in 0..32 {
            let value = draw_int(&mut rng, min, max);
            prop_assert_eq!(value.fract(), 0.0);
            prop_assert!((min..=max).contains(&value));
        }
    }

    #[test]
    fn prop_same_seed_same_draws(seed in any::<u64>()) {
        let mut a = ParticleRng::new(seed);
        let mut b = ParticleRng::new(seed);
        for _ in 0..16 {
            prop_assert_eq!(draw(&mut a, 0.0, 1.0).to_bits(), draw(&mut b, 0.0, 1.0).to_bits());
        }
    }

    #[test]
    fn prop_scale_multiplier_is_drawn_once(
        seed in any::<u64>(),
        min_mult in 0.0f32..1.0,
        frames in 1usize..40,
    ) {
        let behavior = ScaleBehavior::new(&ScaleConfig {
            scale: ValueList::smooth(vec![Keyframe::new(1.0, 0.0), Keyframe::new(4.0, 1.0)]),
            min_mult,
        })
        .unwrap();
        let mut set = BehaviorSet::new();
        set.push(Behavior::Scale(behavior)).unwrap();
        let slot = match set.iter().next() {
            Some(Behavior::Scale(bound)) => bound.multiplier_slot(),
            other => panic!("unexpected behavior {other:?}"),
        };

        let mut pool = spawn_into_new_pool(&set, 8, 100.0, seed);
        let drawn: Vec<f32> = pool.iter_live().map(|p| p.scratch.get(slot)).collect();
        prop_assert!(drawn.iter().all(|m| (min_mult..1.0).contains(m)));

        for _ in 0..frames {
            set.step(&mut pool, 0.1);
        }
        let kept: Vec<f32> = pool.iter_live().map(|p| p.scratch.get(slot)).collect();
        prop_assert_eq!(&drawn, &kept);

        for particle in pool.iter_live() {
            let mult = particle.scratch.get(slot);
            let expected = (1.0 + 3.0 * particle.age_percent) * mult;
            prop_assert!((particle.scale.x - expected).abs() < 1e-4);
        }
    }
}
