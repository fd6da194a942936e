/// Animation tuning constants for both canvas subsystems.
///
/// These constants express intended behavior (decay rates, clamp limits,
/// pool sizes) and keep magic numbers out of the update/render code.
// Delta-time clamp shared by both frame loops; guards against the large
// timestep delivered after a backgrounded tab resumes.
pub const DT_MAX_SEC: f32 = 0.05;

// ---------------- Cursor trail ----------------

// Nominal trail buffer size; the raw buffer may briefly hold up to 3x this
// before being truncated back to 2x.
pub const TRAIL_MAX_POINTS: usize = 28;
// Spacing of interpolated sub-samples between two raw pointer positions
pub const TRAIL_SPACING_PX: f32 = 3.0;
// Life decay per second; points are dropped at or below the epsilon
pub const TRAIL_DECAY_PER_SEC: f32 = 6.0;
pub const TRAIL_LIFE_EPSILON: f32 = 0.01;
// Maximum visible trail length, measured along the path from the tip
pub const TRAIL_MAX_LEN_PX: f32 = 55.0;
// Stroke taper: width = taper * MAX + MIN, alpha = taper * life * COEFF
pub const TRAIL_WIDTH_MAX: f32 = 3.5;
pub const TRAIL_WIDTH_MIN: f32 = 0.3;
pub const TRAIL_ALPHA_COEFF: f32 = 0.7;
pub const TRAIL_ALPHA_EPSILON: f32 = 0.005;

// ---------------- Spark particles ----------------

pub const SPARK_COUNT_MIN: usize = 6;
pub const SPARK_COUNT_JITTER: usize = 4; // burst size in [MIN, MIN+JITTER)
pub const SPARK_ANGLE_JITTER: f32 = 0.8; // +-0.4 rad around the even spread
pub const SPARK_SPEED_BASE: f32 = 35.0;
pub const SPARK_SPEED_SPAN: f32 = 50.0;
pub const SPARK_SIZE_BASE: f32 = 1.5;
pub const SPARK_SIZE_SPAN: f32 = 2.0;
// Multiplicative speed decay per frame and linear life decay per second
pub const SPARK_DRAG_PER_FRAME: f32 = 0.96;
pub const SPARK_LIFE_DECAY_PER_SEC: f32 = 3.5;
pub const SPARK_HUE_CYAN: f32 = 187.0;
pub const SPARK_HUE_MAGENTA: f32 = 310.0;
// Rendered streak length relative to spark size
pub const SPARK_STREAK_COEFF: f32 = 2.5;

// ---------------- Drive simulation ----------------

// Legal lane band for the player's normalized horizontal position
pub const CAR_X_MIN: f32 = 0.15;
pub const CAR_X_MAX: f32 = 0.85;
pub const CAR_LATERAL_RATE: f32 = 1.2; // normalized units per second
pub const DRIVE_SPEED: f32 = 2.0;
pub const DISTANCE_SCALE: f32 = 22.0; // display units per speed unit-second

pub const OBSTACLE_COUNT: usize = 3;
pub const OBSTACLE_DEPTH_RATE: f32 = 0.3; // depth advance per speed unit-second
pub const OBSTACLE_WRAP_DEPTH: f32 = 1.1;
pub const OBSTACLE_RESET_DEPTH: f32 = -0.1;
// Lane redraw band at wraparound (central portion of the road)
pub const OBSTACLE_LANE_BASE: f32 = 0.25;
pub const OBSTACLE_LANE_SPAN: f32 = 0.5;
// Initial spawn band is slightly wider
pub const OBSTACLE_SPAWN_LANE_BASE: f32 = 0.2;
pub const OBSTACLE_SPAWN_LANE_SPAN: f32 = 0.6;

pub const STAR_COUNT: usize = 80;
pub const STAR_BAND: f32 = 0.45; // stars live in the top 45% of the canvas
pub const STAR_SIZE_BASE: f32 = 0.5;
pub const STAR_SIZE_SPAN: f32 = 1.8;
pub const STAR_TWINKLE_RATE: f32 = 1.5;

pub const BUILDINGS_PER_SIDE: usize = 8;
pub const BUILDING_SIDE_BAND: f32 = 0.2; // left band [0, 0.2], right [0.8, 1.0]
pub const BUILDING_W_BASE: f32 = 0.03;
pub const BUILDING_W_SPAN: f32 = 0.06;
pub const BUILDING_H_BASE: f32 = 0.08;
pub const BUILDING_H_SPAN: f32 = 0.15;
pub const WINDOW_ROWS_MIN: u32 = 2;
pub const WINDOW_ROWS_SPAN: u32 = 3; // rows in [MIN, MIN+SPAN)
pub const WINDOW_LIT_PROB: f32 = 0.65;

// HUD republish cadence (~10 Hz of accumulated simulation time)
pub const HUD_PERIOD_SEC: f32 = 0.1;

// ---------------- Scene geometry ----------------

pub const HORIZON_FRAC: f32 = 0.48;
pub const ROAD_LEFT_FRAC: f32 = 0.05;
pub const ROAD_RIGHT_FRAC: f32 = 0.95;
// Power-curve exponent biasing grid rung density toward the horizon
pub const PERSPECTIVE_EXP: f32 = 1.8;
pub const GRID_H_LINES: usize = 20;
pub const GRID_V_LINES: usize = 16;
// Vanishing point drift oscillators (slow, not input-coupled)
pub const DRIFT_X_AMPLITUDE_PX: f32 = 2.0;
pub const DRIFT_X_RATE: f32 = 0.5;
pub const DRIFT_Y_AMPLITUDE_PX: f32 = 1.0;
pub const DRIFT_Y_RATE: f32 = 0.35;

pub const SUN_RADIUS_FRAC: f32 = 0.13;
pub const SUN_SCANLINES: usize = 12;

// Obstacle sprite sizing at full depth
pub const OBSTACLE_W_BASE: f32 = 20.0;
pub const OBSTACLE_W_SPAN: f32 = 30.0;
pub const OBSTACLE_H_BASE: f32 = 14.0;
pub const OBSTACLE_H_SPAN: f32 = 22.0;

// Player sprite
pub const PLAYER_W_PX: f32 = 48.0;
pub const PLAYER_H_PX: f32 = 36.0;
pub const PLAYER_BOTTOM_MARGIN_PX: f32 = 30.0;
