//! Simulation state and body types
//!
//! Everything a tick reads or writes lives in [`SimulationState`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::input::InputFlags;
use crate::consts::SAMPLE_MIN;
use crate::settings::SimConfig;

/// Position and heading (degrees, unnormalized) of a moving body
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    pub pos: Vec2,
    pub heading: f32,
}

impl Pose {
    pub fn new(x: f32, y: f32, heading: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            heading,
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub pose: Pose,
    /// Velocity (units/ms)
    pub vel: Vec2,
}

impl Ship {
    /// Ship at rest in the middle of the plane, facing +x
    pub fn centered(config: &SimConfig) -> Self {
        Self {
            pose: Pose::new(config.width / 2.0, config.height / 2.0, 0.0),
            vel: Vec2::ZERO,
        }
    }
}

/// A projectile moving at the configured bullet speed along its heading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pose: Pose,
}

/// A drifting asteroid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub pose: Pose,
    pub radius: f32,
    /// Scalar speed along heading (units/ms)
    pub speed: f32,
}

impl Asteroid {
    #[inline]
    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub ship: Ship,
    /// Live bullets, in firing order
    pub bullets: Vec<Bullet>,
    /// Live asteroids, in spawn order
    pub asteroids: Vec<Asteroid>,
    /// Population the spawner tops up to
    pub target_asteroids: usize,
    /// Held controls
    pub input: InputFlags,
    /// Sample consumed by the most recent tick
    pub last_sample: u8,
    /// Set once the ship is destroyed; only reachable with
    /// `SimConfig::ship_collision_ends_session`
    pub game_over: bool,
    /// Completed ticks
    pub time_ticks: u64,
    /// Accumulated simulated time (ms)
    pub elapsed_ms: f64,
}

impl SimulationState {
    /// Fresh session: centered ship, empty field
    pub fn new(config: &SimConfig) -> Self {
        Self {
            ship: Ship::centered(config),
            bullets: Vec::new(),
            asteroids: Vec::with_capacity(config.target_asteroids),
            target_asteroids: config.target_asteroids,
            input: InputFlags::default(),
            last_sample: SAMPLE_MIN,
            game_over: false,
            time_ticks: 0,
            elapsed_ms: 0.0,
        }
    }

    /// Fire one bullet from the ship's current pose
    pub fn fire(&mut self) {
        self.bullets.push(Bullet {
            pose: self.ship.pose,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let config = SimConfig::default();
        let state = SimulationState::new(&config);
        assert_eq!(state.ship.pose, Pose::new(400.0, 250.0, 0.0));
        assert_eq!(state.ship.vel, Vec2::ZERO);
        assert!(state.bullets.is_empty());
        assert!(state.asteroids.is_empty());
        assert_eq!(state.target_asteroids, 100);
        assert!(!state.game_over);
    }

    #[test]
    fn test_fire_copies_ship_pose() {
        let mut state = SimulationState::new(&SimConfig::default());
        state.ship.pose = Pose::new(12.0, 34.0, 270.0);
        state.fire();
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.bullets[0].pose, Pose::new(12.0, 34.0, 270.0));
    }
}
