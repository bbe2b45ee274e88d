//! Read-only view of a committed state for renderers

use glam::Vec2;
use serde::Serialize;

use super::state::{Pose, SimulationState};

/// Asteroid as a renderer needs it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AsteroidView {
    pub pose: Pose,
    pub radius: f32,
}

/// Everything a renderer draws for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub time_ticks: u64,
    pub elapsed_ms: f64,
    pub ship: Pose,
    pub ship_velocity: Vec2,
    pub bullets: Vec<Pose>,
    pub asteroids: Vec<AsteroidView>,
    pub game_over: bool,
}

impl From<&SimulationState> for Snapshot {
    fn from(state: &SimulationState) -> Self {
        Self {
            time_ticks: state.time_ticks,
            elapsed_ms: state.elapsed_ms,
            ship: state.ship.pose,
            ship_velocity: state.ship.vel,
            bullets: state.bullets.iter().map(|b| b.pose).collect(),
            asteroids: state
                .asteroids
                .iter()
                .map(|a| AsteroidView {
                    pose: a.pose,
                    radius: a.radius,
                })
                .collect(),
            game_over: state.game_over,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SimConfig;
    use crate::sim::state::Asteroid;

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = SimulationState::new(&SimConfig::default());
        state.fire();
        state.asteroids.push(Asteroid {
            pose: Pose::new(10.0, 20.0, 30.0),
            radius: 40.0,
            speed: 0.2,
        });

        let snap = Snapshot::from(&state);
        assert_eq!(snap.ship, state.ship.pose);
        assert_eq!(snap.bullets, vec![state.ship.pose]);
        assert_eq!(snap.asteroids.len(), 1);
        assert_eq!(snap.asteroids[0].radius, 40.0);
        assert!(!snap.game_over);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = SimulationState::new(&SimConfig::default());
        let json = serde_json::to_value(Snapshot::from(&state)).unwrap();
        assert_eq!(json["time_ticks"], 0);
        assert_eq!(json["game_over"], false);
        assert!(json["asteroids"].as_array().unwrap().is_empty());
    }
}
