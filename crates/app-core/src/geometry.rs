//! Pure screen-space mappings for the drive scene: perspective depth curve,
//! vanishing-point drift, grid rung placement, sprite placement.
//!
//! All inputs are CSS-pixel canvas dimensions; the web renderer applies the
//! device-pixel-ratio transform separately.

use crate::constants::*;
use crate::scene::{Obstacle, Star};

/// CSS-pixel canvas size plus derived scene anchors.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub w: f32,
    pub h: f32,
}

impl Viewport {
    pub fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }

    #[inline]
    pub fn horizon_y(&self) -> f32 {
        self.h * HORIZON_FRAC
    }

    #[inline]
    pub fn road_left(&self) -> f32 {
        self.w * ROAD_LEFT_FRAC
    }

    #[inline]
    pub fn road_right(&self) -> f32 {
        self.w * ROAD_RIGHT_FRAC
    }

    #[inline]
    pub fn road_span(&self) -> f32 {
        self.road_right() - self.road_left()
    }

    /// Player sprite anchor, fixed near the bottom edge.
    #[inline]
    pub fn player_y(&self) -> f32 {
        self.h - PLAYER_BOTTOM_MARGIN_PX
    }

    #[inline]
    pub fn player_x(&self, car_x: f32) -> f32 {
        self.road_left() + self.road_span() * car_x
    }
}

/// Power-curve mapping of normalized depth to a screen parameter; biases
/// density toward the horizon.
#[inline]
pub fn perspective_depth(z: f32) -> f32 {
    z.max(0.0).powf(PERSPECTIVE_EXP)
}

/// Vanishing point with its slow lateral drift, driven by low-frequency
/// oscillators of global elapsed time (never by input).
#[inline]
pub fn vanish_x(vp: &Viewport, t: f32) -> f32 {
    vp.w * 0.5 + (t * DRIFT_X_RATE).sin() * DRIFT_X_AMPLITUDE_PX
}

#[inline]
pub fn drift_y(t: f32) -> f32 {
    (t * DRIFT_Y_RATE).cos() * DRIFT_Y_AMPLITUDE_PX
}

/// One horizontal grid rung.
#[derive(Clone, Copy, Debug)]
pub struct GridRung {
    pub y: f32,
    pub alpha: f32,
    pub width: f32,
}

/// Horizontal rung for index `i` of `GRID_H_LINES`, cyclically offset by the
/// road scroll phase.
pub fn grid_rung(vp: &Viewport, i: usize, road_offset: f32) -> GridRung {
    let n = GRID_H_LINES as f32;
    let t01 = (i as f32 / n + road_offset / n).fract();
    let horizon = vp.horizon_y();
    GridRung {
        y: horizon + (vp.h - horizon) * perspective_depth(t01),
        alpha: 0.08 + t01 * 0.25,
        width: 0.5 + t01,
    }
}

/// Bottom anchor and alpha for vertical fan line `i` of `GRID_V_LINES + 1`.
pub fn grid_fan_line(vp: &Viewport, i: usize) -> (f32, f32) {
    let t01 = i as f32 / GRID_V_LINES as f32;
    let bottom_x = vp.road_left() + vp.road_span() * t01;
    let alpha = 0.15 - (t01 - 0.5).abs() * 0.15 + 0.05;
    (bottom_x, alpha)
}

/// Perspective-scaled obstacle placement, or None while the obstacle is
/// behind the horizon or out of the drawable band.
#[derive(Clone, Copy, Debug)]
pub struct SpritePlacement {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

pub fn obstacle_placement(vp: &Viewport, vanish: f32, obs: &Obstacle) -> Option<SpritePlacement> {
    if obs.z < 0.0 {
        return None;
    }
    let pz = perspective_depth(obs.z);
    let horizon = vp.horizon_y();
    let y = horizon + (vp.h - horizon) * pz;
    if y <= horizon || y >= vp.h - PLAYER_BOTTOM_MARGIN_PX {
        return None;
    }
    Some(SpritePlacement {
        x: vanish + (obs.lane - 0.5) * vp.road_span() * pz,
        y,
        w: OBSTACLE_W_BASE + OBSTACLE_W_SPAN * pz,
        h: OBSTACLE_H_BASE + OBSTACLE_H_SPAN * pz,
    })
}

/// Twinkle brightness for one star at global elapsed time `t`.
#[inline]
pub fn star_alpha(star: &Star, t: f32) -> f32 {
    0.4 + 0.5 * (t * STAR_TWINKLE_RATE + star.twinkle).sin()
}
