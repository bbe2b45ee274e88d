//! Drift Rocks - a wrap-around asteroid field arcade game
//!
//! Core modules:
//! - `sim`: Simulation core (kinematics, spawning, collisions, game state)
//! - `settings`: Data-driven simulation constants
//! - `error`: Configuration errors

pub mod error;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::SimConfig;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Play plane dimensions
    pub const PLANE_WIDTH: f32 = 800.0;
    pub const PLANE_HEIGHT: f32 = 500.0;

    /// Ship half-length (also its collision radius)
    pub const SHIP_HALF_LENGTH: f32 = 20.0;

    /// Bullet speed (units/ms)
    pub const BULLET_SPEED: f32 = 0.5;

    /// Ship thrust (units/ms²)
    pub const SHIP_THRUST: f32 = 0.001;
    /// Maximum ship speed (units/ms)
    pub const MAX_SHIP_SPEED: f32 = 0.4;
    /// Ship rotation rate (degrees/ms)
    pub const ROTATION_RATE: f32 = 0.45;
    /// Per-tick velocity retention when not thrusting
    pub const SHIP_DRAG: f32 = 0.95;

    /// Live asteroid population the spawner tops up to
    pub const TARGET_ASTEROIDS: usize = 100;
    /// Asteroid speed range (units/ms)
    pub const ASTEROID_MIN_SPEED: f32 = 0.1;
    pub const ASTEROID_MAX_SPEED: f32 = 0.5;
    /// Asteroid radius range
    pub const ASTEROID_MIN_RADIUS: f32 = 10.0;
    pub const ASTEROID_MAX_RADIUS: f32 = 100.0;

    /// Random samples are integers in [SAMPLE_MIN, SAMPLE_MAX]
    pub const SAMPLE_MIN: u8 = 1;
    pub const SAMPLE_MAX: u8 = 10;

    /// Host refresh interval (ms, ~60 Hz)
    pub const FRAME_MS: f32 = 1000.0 / 60.0;
}

/// Unit direction vector for a heading in degrees
///
/// Headings are never normalized; `f32` trig stays usable for any heading a
/// session can realistically accumulate, but precision degrades once the
/// magnitude reaches the millions of degrees.
#[inline]
pub fn heading_vector(degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(radians.cos(), radians.sin())
}

/// Linear interpolation between `min` and `max`
#[inline]
pub fn lerp(min: f32, max: f32, t: f32) -> f32 {
    min + (max - min) * t
}
