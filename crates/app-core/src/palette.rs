//! Theme-dependent color palettes as CSS color strings, ready for Canvas2D
//! fill/stroke styles.

/// Obstacle body colors, theme-independent. Obstacles index into this table
/// and are recolored only at depth wraparound.
pub const OBSTACLE_PALETTE: [&str; 4] = ["#e879f9", "#22d3ee", "#f97316", "#a855f7"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    #[inline]
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }
}

/// RGB triple with runtime alpha, for strokes whose opacity varies per line.
#[derive(Clone, Copy, Debug)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn rgba(&self, alpha: f32) -> String {
        format!(
            "rgba({},{},{},{:.3})",
            self.0,
            self.1,
            self.2,
            alpha.clamp(0.0, 1.0)
        )
    }
}

pub struct Palette {
    /// Sky gradient stops, top to horizon.
    pub sky: &'static [(f32, &'static str)],
    /// Ground gradient stops, horizon to bottom edge.
    pub ground: &'static [(f32, &'static str)],
    /// Fill for the sun scanline occlusion bands (matches the sky top).
    pub scanline: &'static str,
    pub building: &'static str,
    pub window: &'static str,
    pub grid_h: Rgb,
    pub grid_v: Rgb,
    pub center_line: &'static str,
    pub car_body: &'static str,
    pub car_glow: &'static str,
    pub hint_text: &'static str,
}

static DARK: Palette = Palette {
    sky: &[
        (0.0, "#05050f"),
        (0.5, "#0c0820"),
        (0.85, "#1a0a3a"),
        (1.0, "#3a1060"),
    ],
    ground: &[(0.0, "#0a0418"), (1.0, "#000008")],
    scanline: "#05050f",
    building: "#08081a",
    window: "rgba(255,230,120,0.4)",
    grid_h: Rgb(232, 121, 249),
    grid_v: Rgb(34, 211, 238),
    center_line: "rgba(34,211,238,0.3)",
    car_body: "#22d3ee",
    car_glow: "rgba(34,211,238,0.6)",
    hint_text: "rgba(255,255,255,0.15)",
};

static LIGHT: Palette = Palette {
    sky: &[(0.0, "#1a0a3a"), (0.5, "#3a1060"), (1.0, "#e060a0")],
    ground: &[(0.0, "#1a0830"), (1.0, "#0a0418")],
    scanline: "#1a0a3a",
    building: "#120828",
    window: "rgba(255,200,100,0.5)",
    grid_h: Rgb(180, 138, 216),
    grid_v: Rgb(110, 198, 192),
    center_line: "rgba(110,198,192,0.4)",
    car_body: "#6ec6c0",
    car_glow: "rgba(110,198,192,0.6)",
    hint_text: "rgba(255,255,255,0.25)",
};
