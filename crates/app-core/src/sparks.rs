//! Click-triggered spark particles: short-lived radial streaks emitted in a
//! burst around a full circle.

use crate::constants::*;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug)]
pub struct Spark {
    pub pos: Vec2,
    pub angle: f32,
    pub speed: f32,
    pub size: f32,
    pub hue: f32,
    pub life: f32,
}

impl Spark {
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.angle.cos(), self.angle.sin()) * self.speed
    }

    /// Rendered streak length, trailing opposite the velocity vector.
    #[inline]
    pub fn streak_len(&self) -> f32 {
        self.size * SPARK_STREAK_COEFF
    }
}

/// Emit a burst of 6-9 sparks at `pos`, angularly distributed around the
/// full circle with random jitter.
pub fn spark_burst(rng: &mut impl Rng, pos: Vec2) -> SmallVec<[Spark; 16]> {
    let count = SPARK_COUNT_MIN + rng.gen_range(0..SPARK_COUNT_JITTER);
    let mut out = SmallVec::new();
    for i in 0..count {
        let base = std::f32::consts::TAU * i as f32 / count as f32;
        let angle = base + (rng.gen::<f32>() - 0.5) * SPARK_ANGLE_JITTER;
        let hue = if rng.gen::<f32>() > 0.5 {
            SPARK_HUE_CYAN
        } else {
            SPARK_HUE_MAGENTA
        };
        out.push(Spark {
            pos,
            angle,
            speed: SPARK_SPEED_BASE + rng.gen::<f32>() * SPARK_SPEED_SPAN,
            size: SPARK_SIZE_BASE + rng.gen::<f32>() * SPARK_SIZE_SPAN,
            hue,
            life: 1.0,
        });
    }
    out
}

/// Advance all sparks by one frame and drop dead ones. Speed decays by a
/// fixed multiplicative factor per frame; life decays linearly in time.
pub fn step_sparks(sparks: &mut Vec<Spark>, dt: f32) {
    let dt = dt.min(DT_MAX_SEC);
    for s in sparks.iter_mut() {
        s.pos += s.velocity() * dt;
        s.speed *= SPARK_DRAG_PER_FRAME;
        s.life -= SPARK_LIFE_DECAY_PER_SEC * dt;
    }
    sparks.retain(|s| s.life > 0.0);
}
