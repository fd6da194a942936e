//! Drive simulation scene state: starfield, skyline, obstacle pool, player
//! lane position and the Intro/Running/Paused phase machine.
//!
//! The state is owned by one mounted instance and mutated in place by the
//! frame loop; only the throttled HUD snapshot is read back by the host.

use crate::constants::*;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Fully static; one paint at time 0 until the user explicitly starts.
    Intro,
    Running,
    Paused,
}

/// Held-key lateral input sampled once per frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct DriveInput {
    pub left: bool,
    pub right: bool,
}

/// Readback tuple republished to the host at a throttled cadence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HudSnapshot {
    pub distance: u32,
    pub passed: u32,
}

#[derive(Clone, Copy, Debug)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub twinkle: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct Building {
    pub x: f32,
    pub w: f32,
    pub h: f32,
    pub window_rows: u32,
    /// Drives the stable lit-window pattern via `window_lit`.
    pub seed: u64,
}

#[derive(Clone, Copy, Debug)]
pub struct Obstacle {
    pub lane: f32,
    pub z: f32,
    /// Index into `OBSTACLE_PALETTE`.
    pub color: usize,
}

pub struct SceneState {
    pub car_x: f32,
    pub speed: f32,
    pub road_offset: f32,
    pub distance: f32,
    pub passed: u32,
    /// Accumulated simulation time; frozen while not Running, so paused and
    /// intro paints are static by construction.
    pub elapsed: f32,
    pub phase: Phase,
    pub stars: Vec<Star>,
    pub buildings: Vec<Building>,
    pub obstacles: Vec<Obstacle>,
    hud_accum: f32,
    rng: StdRng,
}

impl SceneState {
    /// One-shot scene generation. Stars and buildings are never mutated
    /// after this; obstacles are re-randomized only at depth wraparound.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                x: rng.gen::<f32>(),
                y: rng.gen::<f32>() * STAR_BAND,
                size: STAR_SIZE_BASE + rng.gen::<f32>() * STAR_SIZE_SPAN,
                twinkle: rng.gen::<f32>() * std::f32::consts::TAU,
            })
            .collect();

        let mut buildings = Vec::with_capacity(BUILDINGS_PER_SIDE * 2);
        for side in 0..2 {
            let x_base = if side == 0 { 0.0 } else { 1.0 - BUILDING_SIDE_BAND };
            for _ in 0..BUILDINGS_PER_SIDE {
                buildings.push(Building {
                    x: x_base + rng.gen::<f32>() * BUILDING_SIDE_BAND,
                    w: BUILDING_W_BASE + rng.gen::<f32>() * BUILDING_W_SPAN,
                    h: BUILDING_H_BASE + rng.gen::<f32>() * BUILDING_H_SPAN,
                    window_rows: WINDOW_ROWS_MIN + rng.gen_range(0..WINDOW_ROWS_SPAN),
                    seed: rng.gen(),
                });
            }
        }

        let obstacles = (0..OBSTACLE_COUNT)
            .map(|i| Obstacle {
                lane: OBSTACLE_SPAWN_LANE_BASE + rng.gen::<f32>() * OBSTACLE_SPAWN_LANE_SPAN,
                z: 0.3 + i as f32 * 0.25,
                color: i % crate::palette::OBSTACLE_PALETTE.len(),
            })
            .collect();

        Self {
            car_x: 0.5,
            speed: DRIVE_SPEED,
            road_offset: 0.0,
            distance: 0.0,
            passed: 0,
            elapsed: 0.0,
            phase: Phase::Intro,
            stars,
            buildings,
            obstacles,
            hud_accum: 0.0,
            rng,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Intro -> Running, one-way. Returns true if the transition happened.
    pub fn start(&mut self) -> bool {
        if self.phase == Phase::Intro {
            self.phase = Phase::Running;
            true
        } else {
            false
        }
    }

    /// Running <-> Paused. No effect in Intro. Returns the new running flag
    /// when the phase changed.
    pub fn toggle_pause(&mut self) -> Option<bool> {
        match self.phase {
            Phase::Running => {
                self.phase = Phase::Paused;
                Some(false)
            }
            Phase::Paused => {
                self.phase = Phase::Running;
                Some(true)
            }
            Phase::Intro => None,
        }
    }

    /// Idempotent pause control for scroll-driven gating.
    pub fn set_paused(&mut self, paused: bool) -> Option<bool> {
        match (self.phase, paused) {
            (Phase::Running, true) | (Phase::Paused, false) => self.toggle_pause(),
            _ => None,
        }
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            distance: self.distance.round() as u32,
            passed: self.passed,
        }
    }

    /// Advance the simulation one frame. No-op unless Running. Returns a HUD
    /// snapshot only after `HUD_PERIOD_SEC` of accumulated simulation time,
    /// so the host is not re-rendered every frame.
    pub fn step(&mut self, dt: f32, input: DriveInput) -> Option<HudSnapshot> {
        if self.phase != Phase::Running {
            return None;
        }
        let dt = dt.clamp(0.0, DT_MAX_SEC);
        self.elapsed += dt;

        if input.left {
            self.car_x -= CAR_LATERAL_RATE * dt;
        }
        if input.right {
            self.car_x += CAR_LATERAL_RATE * dt;
        }
        self.car_x = self.car_x.clamp(CAR_X_MIN, CAR_X_MAX);

        self.road_offset = (self.road_offset + self.speed * dt).fract();
        self.distance += self.speed * dt * DISTANCE_SCALE;

        for obs in &mut self.obstacles {
            obs.z += self.speed * dt * OBSTACLE_DEPTH_RATE;
            if obs.z > OBSTACLE_WRAP_DEPTH {
                obs.z = OBSTACLE_RESET_DEPTH;
                obs.lane = OBSTACLE_LANE_BASE + self.rng.gen::<f32>() * OBSTACLE_LANE_SPAN;
                obs.color = self.rng.gen_range(0..crate::palette::OBSTACLE_PALETTE.len());
                self.passed += 1;
            }
        }

        self.hud_accum += dt;
        if self.hud_accum >= HUD_PERIOD_SEC {
            self.hud_accum = 0.0;
            Some(self.hud())
        } else {
            None
        }
    }
}

/// Stable lit/unlit decision for one building window.
///
/// The per-frame unseeded randomness of early prototypes made the skyline
/// windows flicker at frame rate; deriving the pattern from the building
/// seed keeps it fixed for the lifetime of the scene.
#[inline]
pub fn window_lit(seed: u64, row: u32, col: u32) -> bool {
    let mut x = seed
        ^ ((row as u64) << 32 | col as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    // splitmix64 finalizer
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^= x >> 31;
    let unit = (x >> 40) as f32 / (1u64 << 24) as f32;
    unit < WINDOW_LIT_PROB
}
