//! Logical controls and held-input tracking

use serde::{Deserialize, Serialize};

/// Abstract control a host maps raw key events onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    Thrust,
    RotateLeft,
    RotateRight,
    Fire,
    /// Anything unmapped; always ignored
    Unknown,
}

impl Control {
    /// Map a browser-style key name onto a control
    pub fn from_key(key: &str) -> Self {
        match key {
            " " | "Space" | "Spacebar" => Control::Fire,
            "ArrowUp" | "Up" => Control::Thrust,
            "ArrowLeft" | "Left" => Control::RotateLeft,
            "ArrowRight" | "Right" => Control::RotateRight,
            _ => Control::Unknown,
        }
    }
}

/// Level-triggered control state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputFlags {
    pub thrust: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    /// Tracked for observers only; firing is edge-triggered
    pub fire: bool,
}

impl InputFlags {
    /// Record a control going down (`held = true`) or up
    pub fn set(&mut self, control: Control, held: bool) {
        match control {
            Control::Thrust => self.thrust = held,
            Control::RotateLeft => self.rotate_left = held,
            Control::RotateRight => self.rotate_right = held,
            Control::Fire => self.fire = held,
            Control::Unknown => {}
        }
    }

    /// Angular velocity sign: right wins when both are held
    pub fn turn_direction(&self) -> f32 {
        if self.rotate_right {
            1.0
        } else if self.rotate_left {
            -1.0
        } else {
            0.0
        }
    }
}
