//! Core state types for the central-mass simulation.
//!
//! Defines the 2D vector alias, the display color and the `Body` record.
//! A body's mass, radius and color are fixed at creation; position,
//! velocity and orbit history are only mutated by the integrator.

use nalgebra::Vector2;

use super::history::OrbitHistory;

pub type NVec2 = Vector2<f64>;

/// Opaque RGBA display color. Has no effect on the physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    // raylib palette
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const LIGHTGRAY: Color = Color::new(200, 200, 200, 255);
    pub const GRAY: Color = Color::new(130, 130, 130, 255);
    pub const DARKGRAY: Color = Color::new(80, 80, 80, 255);
    pub const YELLOW: Color = Color::new(253, 249, 0, 255);
    pub const GOLD: Color = Color::new(255, 203, 0, 255);
    pub const ORANGE: Color = Color::new(255, 161, 0, 255);
    pub const PINK: Color = Color::new(255, 109, 194, 255);
    pub const RED: Color = Color::new(230, 41, 55, 255);
    pub const MAROON: Color = Color::new(190, 33, 55, 255);
    pub const GREEN: Color = Color::new(0, 228, 48, 255);
    pub const LIME: Color = Color::new(0, 158, 47, 255);
    pub const DARKGREEN: Color = Color::new(0, 117, 44, 255);
    pub const SKYBLUE: Color = Color::new(102, 191, 255, 255);
    pub const BLUE: Color = Color::new(0, 121, 241, 255);
    pub const DARKBLUE: Color = Color::new(0, 82, 172, 255);
    pub const PURPLE: Color = Color::new(200, 122, 255, 255);
    pub const VIOLET: Color = Color::new(135, 60, 190, 255);
    pub const BEIGE: Color = Color::new(211, 176, 131, 255);
    pub const BROWN: Color = Color::new(127, 106, 79, 255);
    pub const DARKBROWN: Color = Color::new(76, 63, 47, 255);

    /// Look up a palette entry by (case-insensitive) name
    pub fn from_name(name: &str) -> Option<Color> {
        let color = match name.to_ascii_lowercase().as_str() {
            "white" => Color::WHITE,
            "black" => Color::BLACK,
            "lightgray" => Color::LIGHTGRAY,
            "gray" | "grey" => Color::GRAY,
            "darkgray" => Color::DARKGRAY,
            "yellow" => Color::YELLOW,
            "gold" => Color::GOLD,
            "orange" => Color::ORANGE,
            "pink" => Color::PINK,
            "red" => Color::RED,
            "maroon" => Color::MAROON,
            "green" => Color::GREEN,
            "lime" => Color::LIME,
            "darkgreen" => Color::DARKGREEN,
            "skyblue" => Color::SKYBLUE,
            "blue" => Color::BLUE,
            "darkblue" => Color::DARKBLUE,
            "purple" => Color::PURPLE,
            "violet" => Color::VIOLET,
            "beige" => Color::BEIGE,
            "brown" => Color::BROWN,
            "darkbrown" => Color::DARKBROWN,
            _ => return None,
        };
        Some(color)
    }

    /// Same color with its alpha replaced by `alpha` (clamped to [0, 1])
    pub fn fade(self, alpha: f32) -> Color {
        let alpha = alpha.clamp(0.0, 1.0);
        Color {
            a: (255.0 * alpha).round() as u8,
            ..self
        }
    }
}

/// Handle returned by [`Registry::add_body`](super::registry::Registry::add_body).
///
/// `BodyId(0)` is always the anchor, `BodyId(k)` the k-th orbiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

impl BodyId {
    pub const ANCHOR: BodyId = BodyId(0);

    pub fn is_anchor(self) -> bool {
        self.0 == 0
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub(crate) position: NVec2, // simulation-space position
    pub(crate) velocity: NVec2, // units per simulated second
    mass: f64,
    radius: f64, // rendering only
    color: Color,
    pub(crate) orbit_history: OrbitHistory, // oldest first
}

impl Body {
    pub(crate) fn new(position: NVec2, velocity: NVec2, mass: f64, radius: f64, color: Color, history_cap: usize) -> Self {
        Self {
            position,
            velocity,
            mass,
            radius,
            color,
            orbit_history: OrbitHistory::with_capacity(history_cap),
        }
    }

    pub fn position(&self) -> NVec2 {
        self.position
    }

    pub fn velocity(&self) -> NVec2 {
        self.velocity
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn orbit_history(&self) -> &OrbitHistory {
        &self.orbit_history
    }
}
