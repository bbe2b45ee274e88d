//! Simulation settings
//!
//! Every tuning constant the core reads lives here. Defaults match
//! [`crate::consts`]; a JSON file may override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Simulation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Plane ===
    /// Plane width
    pub width: f32,
    /// Plane height
    pub height: f32,

    // === Ship ===
    /// Ship half-length (collision radius when termination is enabled)
    pub ship_half_length: f32,
    /// Thrust acceleration (units/ms²)
    pub thrust: f32,
    /// Speed cap (units/ms)
    pub max_ship_speed: f32,
    /// Rotation rate (degrees/ms)
    pub rotation_rate: f32,
    /// Velocity retained per tick while coasting
    pub drag: f32,
    /// End the session when the ship touches an asteroid
    pub ship_collision_ends_session: bool,

    // === Bullets ===
    /// Bullet speed (units/ms)
    pub bullet_speed: f32,

    // === Asteroids ===
    /// Population the spawner tops up to
    pub target_asteroids: usize,
    /// Speed range (units/ms)
    pub asteroid_speed: (f32, f32),
    /// Radius range
    pub asteroid_radius: (f32, f32),
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: PLANE_WIDTH,
            height: PLANE_HEIGHT,

            ship_half_length: SHIP_HALF_LENGTH,
            thrust: SHIP_THRUST,
            max_ship_speed: MAX_SHIP_SPEED,
            rotation_rate: ROTATION_RATE,
            drag: SHIP_DRAG,
            ship_collision_ends_session: false,

            bullet_speed: BULLET_SPEED,

            target_asteroids: TARGET_ASTEROIDS,
            asteroid_speed: (ASTEROID_MIN_SPEED, ASTEROID_MAX_SPEED),
            asteroid_radius: (ASTEROID_MIN_RADIUS, ASTEROID_MAX_RADIUS),
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config; absent fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Pretty JSON, suitable as a config template
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("ship_half_length", self.ship_half_length)?;
        positive("thrust", self.thrust)?;
        positive("max_ship_speed", self.max_ship_speed)?;
        positive("rotation_rate", self.rotation_rate)?;
        positive("bullet_speed", self.bullet_speed)?;

        if !(0.0..=1.0).contains(&self.drag) {
            return Err(ConfigError::invalid(
                "drag",
                format!("{} is outside [0, 1]", self.drag),
            ));
        }

        range("asteroid_speed", self.asteroid_speed)?;
        range("asteroid_radius", self.asteroid_radius)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            field,
            format!("{value} must be finite and > 0"),
        ))
    }
}

fn range(field: &'static str, (min, max): (f32, f32)) -> Result<(), ConfigError> {
    positive(field, min)?;
    positive(field, max)?;
    if min > max {
        return Err(ConfigError::invalid(
            field,
            format!("min {min} exceeds max {max}"),
        ));
    }
    Ok(())
}
