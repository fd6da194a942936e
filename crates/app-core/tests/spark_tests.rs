use app_core::constants::*;
use app_core::{spark_burst, step_sparks};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn burst_size_stays_in_range() {
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let burst = spark_burst(&mut rng, Vec2::ZERO);
        assert!(burst.len() >= SPARK_COUNT_MIN);
        assert!(burst.len() < SPARK_COUNT_MIN + SPARK_COUNT_JITTER);
    }
}

#[test]
fn burst_parameters_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let burst = spark_burst(&mut rng, Vec2::new(5.0, 7.0));
        for (i, s) in burst.iter().enumerate() {
            assert_eq!(s.pos, Vec2::new(5.0, 7.0));
            assert_eq!(s.life, 1.0);
            assert!(s.speed >= SPARK_SPEED_BASE);
            assert!(s.speed < SPARK_SPEED_BASE + SPARK_SPEED_SPAN);
            assert!(s.size >= SPARK_SIZE_BASE);
            assert!(s.size < SPARK_SIZE_BASE + SPARK_SIZE_SPAN);
            assert!(s.hue == SPARK_HUE_CYAN || s.hue == SPARK_HUE_MAGENTA);

            // Angles spread evenly around the circle with bounded jitter.
            let base = std::f32::consts::TAU * i as f32 / burst.len() as f32;
            assert!((s.angle - base).abs() <= SPARK_ANGLE_JITTER / 2.0 + 1e-6);
        }
    }
}

#[test]
fn both_hues_occur() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut cyan = false;
    let mut magenta = false;
    for _ in 0..20 {
        for s in spark_burst(&mut rng, Vec2::ZERO) {
            cyan |= s.hue == SPARK_HUE_CYAN;
            magenta |= s.hue == SPARK_HUE_MAGENTA;
        }
    }
    assert!(cyan && magenta);
}

#[test]
fn step_applies_drag_and_linear_life_decay() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut sparks: Vec<_> = spark_burst(&mut rng, Vec2::ZERO).into_vec();
    let before = sparks.clone();

    let dt = 1.0 / 60.0;
    step_sparks(&mut sparks, dt);

    for (s, b) in sparks.iter().zip(&before) {
        assert!((s.speed - b.speed * SPARK_DRAG_PER_FRAME).abs() < 1e-4);
        assert!((s.life - (b.life - SPARK_LIFE_DECAY_PER_SEC * dt)).abs() < 1e-5);
        let moved = s.pos - b.pos;
        assert!((moved - b.velocity() * dt).length() < 1e-4);
    }
}

#[test]
fn sparks_die_within_a_short_burst_lifetime() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut sparks: Vec<_> = spark_burst(&mut rng, Vec2::ZERO).into_vec();
    assert!(!sparks.is_empty());

    // Life 1.0 at 3.5/s decay: gone well before half a second.
    let dt = 1.0 / 60.0;
    for _ in 0..20 {
        step_sparks(&mut sparks, dt);
    }
    assert!(sparks.is_empty());
}

#[test]
fn step_clamps_oversized_timesteps() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut sparks: Vec<_> = spark_burst(&mut rng, Vec2::ZERO).into_vec();
    // One huge frame is treated as DT_MAX_SEC, not instant death.
    step_sparks(&mut sparks, 10.0);
    assert!(!sparks.is_empty());
    for s in &sparks {
        let expected = 1.0 - SPARK_LIFE_DECAY_PER_SEC * DT_MAX_SEC;
        assert!((s.life - expected).abs() < 1e-5);
    }
}

#[test]
fn streak_length_scales_with_size() {
    let mut rng = StdRng::seed_from_u64(5);
    for s in spark_burst(&mut rng, Vec2::ZERO) {
        assert!((s.streak_len() - s.size * SPARK_STREAK_COEFF).abs() < 1e-6);
        let v = s.velocity();
        assert!((v.length() - s.speed).abs() < 1e-3);
    }
}
