//! Decaying pointer trail: raw samples plus interpolated sub-samples,
//! rendered as a tapered glow stroke by the web frontend.

use crate::constants::*;
use glam::Vec2;

#[derive(Clone, Copy, Debug)]
pub struct TrailPoint {
    pub pos: Vec2,
    pub life: f32,
}

/// One renderable trail segment between two consecutive points.
///
/// `taper` is 1 at the trail tip and 0 at the visible-length cutoff; `width`
/// and `alpha` are derived from it and from the endpoint lifetimes.
#[derive(Clone, Copy, Debug)]
pub struct TrailSegment {
    pub a: Vec2,
    pub b: Vec2,
    pub taper: f32,
    pub width: f32,
    pub alpha: f32,
}

#[derive(Default)]
pub struct TrailBuffer {
    points: Vec<TrailPoint>,
    last_raw: Option<Vec2>,
}

impl TrailBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[TrailPoint] {
        &self.points
    }

    /// Append a raw pointer sample, densified with linearly interpolated
    /// sub-samples at `TRAIL_SPACING_PX` so fast pointer motion does not
    /// leave visual gaps. The buffer is truncated (oldest first) whenever it
    /// exceeds 3x the nominal capacity.
    pub fn push_sample(&mut self, pos: Vec2) {
        if let Some(prev) = self.last_raw {
            let delta = pos - prev;
            let dist = delta.length();
            if dist >= TRAIL_SPACING_PX {
                let steps = (dist / TRAIL_SPACING_PX).floor() as usize;
                for i in 1..=steps {
                    let t = i as f32 / (steps + 1) as f32;
                    self.points.push(TrailPoint {
                        pos: prev + delta * t,
                        life: 1.0,
                    });
                }
            }
        }
        self.points.push(TrailPoint { pos, life: 1.0 });

        if self.points.len() > TRAIL_MAX_POINTS * 3 {
            let keep = TRAIL_MAX_POINTS * 2;
            let drop = self.points.len() - keep;
            self.points.drain(..drop);
        }
        self.last_raw = Some(pos);
    }

    /// Decay every point's life and drop dead points. `dt` is expected to be
    /// pre-clamped to `DT_MAX_SEC` by the frame loop; clamped again here so
    /// the decay stays bounded regardless of caller.
    pub fn decay(&mut self, dt: f32) {
        let dt = dt.min(DT_MAX_SEC);
        for p in &mut self.points {
            p.life -= TRAIL_DECAY_PER_SEC * dt;
        }
        self.points.retain(|p| p.life > TRAIL_LIFE_EPSILON);
    }

    /// Visible segments ordered oldest -> newest, with segments farther than
    /// `TRAIL_MAX_LEN_PX` from the tip (newest point) culled.
    pub fn segments(&self) -> Vec<TrailSegment> {
        let n = self.points.len();
        if n < 2 {
            return Vec::new();
        }

        // Cumulative path distance from each point to the newest point.
        let mut dist_to_tip = vec![0.0_f32; n];
        for i in (0..n - 1).rev() {
            let step = (self.points[i + 1].pos - self.points[i].pos).length();
            dist_to_tip[i] = dist_to_tip[i + 1] + step;
        }

        let mut out = Vec::with_capacity(n - 1);
        for i in 0..n - 1 {
            let d = dist_to_tip[i];
            if d > TRAIL_MAX_LEN_PX {
                continue;
            }
            let taper = 1.0 - d / TRAIL_MAX_LEN_PX;
            let p0 = &self.points[i];
            let p1 = &self.points[i + 1];
            let alpha = taper * p0.life.min(p1.life) * TRAIL_ALPHA_COEFF;
            if alpha < TRAIL_ALPHA_EPSILON {
                continue;
            }
            out.push(TrailSegment {
                a: p0.pos,
                b: p1.pos,
                taper,
                width: taper * TRAIL_WIDTH_MAX + TRAIL_WIDTH_MIN,
                alpha,
            });
        }
        out
    }
}
