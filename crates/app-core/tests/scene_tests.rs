use app_core::constants::*;
use app_core::{window_lit, DriveInput, Phase, SceneState};

const DT: f32 = 1.0 / 60.0;

fn running_scene(seed: u64) -> SceneState {
    let mut scene = SceneState::new(seed);
    assert!(scene.start());
    scene
}

fn step_idle(scene: &mut SceneState, frames: usize) {
    for _ in 0..frames {
        scene.step(DT, DriveInput::default());
    }
}

#[test]
fn generation_invariants() {
    let scene = SceneState::new(1234);

    assert_eq!(scene.stars.len(), STAR_COUNT);
    for star in &scene.stars {
        assert!(star.x >= 0.0 && star.x <= 1.0);
        assert!(star.y >= 0.0 && star.y <= STAR_BAND);
        assert!(star.size >= STAR_SIZE_BASE);
        assert!(star.size <= STAR_SIZE_BASE + STAR_SIZE_SPAN);
    }

    assert_eq!(scene.buildings.len(), BUILDINGS_PER_SIDE * 2);
    let (left, right) = scene.buildings.split_at(BUILDINGS_PER_SIDE);
    for b in left {
        assert!(b.x >= 0.0 && b.x <= BUILDING_SIDE_BAND);
    }
    for b in right {
        assert!(b.x >= 1.0 - BUILDING_SIDE_BAND && b.x <= 1.0);
    }
    for b in &scene.buildings {
        assert!(b.w >= BUILDING_W_BASE && b.w <= BUILDING_W_BASE + BUILDING_W_SPAN);
        assert!(b.h >= BUILDING_H_BASE && b.h <= BUILDING_H_BASE + BUILDING_H_SPAN);
        assert!(b.window_rows >= WINDOW_ROWS_MIN);
        assert!(b.window_rows < WINDOW_ROWS_MIN + WINDOW_ROWS_SPAN);
    }

    assert_eq!(scene.obstacles.len(), OBSTACLE_COUNT);
    for obs in &scene.obstacles {
        assert!(obs.lane >= OBSTACLE_SPAWN_LANE_BASE);
        assert!(obs.lane <= OBSTACLE_SPAWN_LANE_BASE + OBSTACLE_SPAWN_LANE_SPAN);
        assert!(obs.z >= 0.0 && obs.z <= 1.0);
    }

    assert_eq!(scene.phase, Phase::Intro);
    assert_eq!(scene.car_x, 0.5);
    assert_eq!(scene.distance, 0.0);
}

#[test]
fn same_seed_same_scene() {
    let a = SceneState::new(7);
    let b = SceneState::new(7);
    for (sa, sb) in a.stars.iter().zip(&b.stars) {
        assert_eq!((sa.x, sa.y, sa.size), (sb.x, sb.y, sb.size));
    }
    for (ba, bb) in a.buildings.iter().zip(&b.buildings) {
        assert_eq!(ba.seed, bb.seed);
    }
}

#[test]
fn start_is_one_way() {
    let mut scene = SceneState::new(1);
    assert!(scene.start());
    assert!(!scene.start());
    assert_eq!(scene.phase, Phase::Running);

    scene.toggle_pause();
    assert!(!scene.start(), "start must not resume from Paused");
    assert_eq!(scene.phase, Phase::Paused);
}

#[test]
fn intro_ignores_stepping_and_toggling() {
    let mut scene = SceneState::new(1);
    assert_eq!(scene.toggle_pause(), None);
    assert_eq!(scene.step(DT, DriveInput::default()), None);
    assert_eq!(scene.distance, 0.0);
    assert_eq!(scene.elapsed, 0.0);
    assert_eq!(scene.phase, Phase::Intro);
}

#[test]
fn toggle_flips_running_and_paused() {
    let mut scene = running_scene(1);
    assert_eq!(scene.toggle_pause(), Some(false));
    assert_eq!(scene.phase, Phase::Paused);
    assert_eq!(scene.toggle_pause(), Some(true));
    assert!(scene.is_running());
}

#[test]
fn set_paused_is_idempotent() {
    let mut scene = running_scene(1);
    assert_eq!(scene.set_paused(true), Some(false));
    assert_eq!(scene.set_paused(true), None);
    assert_eq!(scene.set_paused(false), Some(true));
    assert_eq!(scene.set_paused(false), None);

    let mut intro = SceneState::new(1);
    assert_eq!(intro.set_paused(true), None);
    assert_eq!(intro.set_paused(false), None);
}

#[test]
fn held_right_drives_monotonically_to_the_lane_clamp() {
    let mut scene = running_scene(2);
    let input = DriveInput {
        left: false,
        right: true,
    };
    let mut prev = scene.car_x;
    for _ in 0..60 {
        scene.step(DT, input);
        assert!(scene.car_x >= prev);
        assert!(scene.car_x <= CAR_X_MAX);
        prev = scene.car_x;
    }
    // 1.2 units/s from center reaches the clamp inside one second.
    assert_eq!(scene.car_x, CAR_X_MAX);
}

#[test]
fn held_left_reaches_the_opposite_clamp() {
    let mut scene = running_scene(2);
    let input = DriveInput {
        left: true,
        right: false,
    };
    for _ in 0..60 {
        scene.step(DT, input);
    }
    assert_eq!(scene.car_x, CAR_X_MIN);
}

#[test]
fn opposing_keys_cancel() {
    let mut scene = running_scene(2);
    let input = DriveInput {
        left: true,
        right: true,
    };
    step_idle(&mut scene, 1);
    scene.step(DT, input);
    assert!((scene.car_x - 0.5).abs() < 1e-6);
}

#[test]
fn distance_accumulates_at_speed_times_scale() {
    let mut scene = running_scene(3);
    step_idle(&mut scene, 60);
    let expected = DRIVE_SPEED * DISTANCE_SCALE;
    assert!(
        (scene.distance - expected).abs() < 0.5,
        "distance {} after 1s",
        scene.distance
    );
    assert!(scene.road_offset >= 0.0 && scene.road_offset < 1.0);
}

#[test]
fn obstacle_wraps_to_behind_the_camera() {
    let mut scene = running_scene(4);
    scene.obstacles[0].z = 1.05;
    let lane_before = scene.obstacles[0].lane;
    let passed_before = scene.passed;

    let mut wrapped = false;
    for _ in 0..20 {
        scene.step(DT, DriveInput::default());
        if scene.obstacles[0].z < 0.0 {
            wrapped = true;
            break;
        }
    }
    assert!(wrapped, "obstacle never wrapped past {OBSTACLE_WRAP_DEPTH}");
    assert_eq!(scene.obstacles[0].z, OBSTACLE_RESET_DEPTH);
    assert_eq!(scene.passed, passed_before + 1);

    let lane = scene.obstacles[0].lane;
    assert!(lane >= OBSTACLE_LANE_BASE);
    assert!(lane <= OBSTACLE_LANE_BASE + OBSTACLE_LANE_SPAN);
    // Not a hard guarantee for any single wrap, but with a fresh lane draw
    // an exactly preserved f32 lane would be astronomically unlucky.
    assert_ne!(lane, lane_before);
}

#[test]
fn lanes_are_stable_between_wraps() {
    let mut scene = running_scene(5);
    let lanes: Vec<f32> = scene.obstacles.iter().map(|o| o.lane).collect();
    // Deepest initial obstacle sits at z=0.8; a handful of frames cannot
    // push it past the wrap depth.
    step_idle(&mut scene, 5);
    for (obs, lane) in scene.obstacles.iter().zip(&lanes) {
        assert_eq!(obs.lane, *lane);
    }
}

#[test]
fn pause_freezes_all_motion() {
    let mut scene = running_scene(6);
    step_idle(&mut scene, 30);
    scene.toggle_pause();

    let distance = scene.distance;
    let elapsed = scene.elapsed;
    let offset = scene.road_offset;
    let zs: Vec<f32> = scene.obstacles.iter().map(|o| o.z).collect();

    for _ in 0..120 {
        assert_eq!(scene.step(DT, DriveInput { left: false, right: true }), None);
    }
    assert_eq!(scene.distance, distance);
    assert_eq!(scene.elapsed, elapsed);
    assert_eq!(scene.road_offset, offset);
    for (obs, z) in scene.obstacles.iter().zip(&zs) {
        assert_eq!(obs.z, *z);
    }
}

#[test]
fn resume_continues_from_the_frozen_state() {
    let mut scene = running_scene(6);
    step_idle(&mut scene, 30);
    scene.toggle_pause();
    let distance = scene.distance;
    scene.toggle_pause();
    step_idle(&mut scene, 1);
    assert!(scene.distance > distance);
}

#[test]
fn hud_snapshots_are_throttled_near_ten_hertz() {
    let mut scene = running_scene(8);
    let mut snapshots = 0;
    for _ in 0..600 {
        if scene.step(DT, DriveInput::default()).is_some() {
            snapshots += 1;
        }
    }
    // 10 simulated seconds at a 0.1s republish period.
    assert!(
        (90..=110).contains(&snapshots),
        "got {snapshots} snapshots in 10s"
    );
}

#[test]
fn hud_rounds_distance_to_whole_units() {
    let mut scene = running_scene(9);
    step_idle(&mut scene, 10);
    let hud = scene.hud();
    assert_eq!(hud.distance, scene.distance.round() as u32);
    assert_eq!(hud.passed, scene.passed);
}

#[test]
fn step_clamps_oversized_timesteps() {
    let mut scene = running_scene(10);
    scene.step(100.0, DriveInput::default());
    assert!((scene.elapsed - DT_MAX_SEC).abs() < 1e-6);
    assert!(scene.distance <= DRIVE_SPEED * DT_MAX_SEC * DISTANCE_SCALE + 1e-3);
}

#[test]
fn window_lit_is_deterministic_per_window() {
    for seed in [0u64, 1, 0xDEAD_BEEF, u64::MAX] {
        for row in 0..4 {
            for col in 0..6 {
                let first = window_lit(seed, row, col);
                for _ in 0..10 {
                    assert_eq!(window_lit(seed, row, col), first);
                }
            }
        }
    }
}

#[test]
fn window_lit_rate_tracks_probability() {
    let mut lit = 0;
    let mut total = 0;
    for seed in 0..40u64 {
        for row in 0..4 {
            for col in 0..6 {
                total += 1;
                if window_lit(seed, row, col) {
                    lit += 1;
                }
            }
        }
    }
    let rate = lit as f32 / total as f32;
    assert!((rate - WINDOW_LIT_PROB).abs() < 0.1, "lit rate {rate}");
}

#[test]
fn window_lit_varies_across_buildings() {
    // Two buildings with different seeds disagree on at least one window.
    let differs = (0..4)
        .flat_map(|r| (0..6).map(move |c| (r, c)))
        .any(|(r, c)| window_lit(1, r, c) != window_lit(2, r, c));
    assert!(differs);
}
