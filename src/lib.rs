//! Evil Circle - bouncing balls eaten by a keyboard-driven circle
//!
//! Core modules:
//! - `sim`: Frame simulation (entities, collisions, per-frame loop)
//! - `renderer`: Drawing surface abstraction (canvas on web, recording elsewhere)
//! - `input`: Keyboard code mapping
//! - `hud`: Displayed ball counter

pub mod hud;
pub mod input;
pub mod renderer;
pub mod sim;

pub use hud::{CounterDisplay, TextCounter};
pub use input::KeyDirection;

use glam::Vec2;
use rand::Rng;

/// Simulation constants
pub mod consts {
    /// Target number of stored balls (spawned until reached, never replaced)
    pub const NUMBER_OF_BALLS: usize = 10;

    /// Minimum spawn coordinate for a new ball on both axes
    pub const BALL_SPAWN_MIN: i32 = 20;
    /// Lowest ball velocity per axis (inclusive)
    pub const BALL_VEL_MIN: i32 = -7;
    /// Highest ball velocity per axis (exclusive)
    pub const BALL_VEL_MAX: i32 = 7;
    /// Smallest ball radius (inclusive)
    pub const BALL_SIZE_MIN: i32 = 10;
    /// Largest ball radius (exclusive)
    pub const BALL_SIZE_MAX: i32 = 20;

    /// Evil circle defaults
    pub const EVIL_CIRCLE_SIZE: f32 = 10.0;
    pub const EVIL_CIRCLE_HORIZONTAL_SPEED: f32 = 20.0;
    pub const EVIL_CIRCLE_VERTICAL_SPEED: f32 = 20.0;
    /// Outline width; also extends the eating reach
    pub const EVIL_CIRCLE_LINE_WIDTH: f32 = 3.0;
    pub const EVIL_CIRCLE_COLOR: &str = "white";

    /// Translucent fill painted over the canvas each frame (motion trails)
    pub const FADE_STYLE: &str = "rgba(0, 0, 0, 0.25)";

    /// Upper bound (exclusive) for each random color channel
    pub const COLOR_CHANNEL_MAX: i32 = 255;
}

/// Euclidean distance between two centers
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Random integer in `[min, max)`.
///
/// Degenerate ranges (tiny windows) collapse to `min` instead of panicking.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    if max <= min {
        return min;
    }
    rng.random_range(min..max)
}

/// An `rgb(r,g,b)` color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS color string for the drawing surface
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Random color, each channel in `[0, 255)`
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    let mut channel = || random_int(&mut *rng, 0, consts::COLOR_CHANNEL_MAX) as u8;
    Rgb::new(channel(), channel(), channel())
}
