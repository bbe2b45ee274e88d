//! Asteroid spawning
//!
//! One sample per tick drives every random choice of a spawn: speed, radius,
//! edge, the free coordinate along that edge and the heading are all linear
//! rescalings of the same value. Spawns are therefore correlated and heavily
//! quantized (ten possible candidates); this is the intended behaviour.

use super::collision::circles_overlap;
use super::state::{Asteroid, Pose};
use crate::consts::{SAMPLE_MAX, SAMPLE_MIN};
use crate::lerp;
use crate::settings::SimConfig;

/// Plane edge an asteroid enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnEdge {
    Top,
    Right,
    Bottom,
    Left,
}

impl SpawnEdge {
    /// Edge for a unit value in `[0, 1)`
    pub fn from_unit(u: f32) -> Self {
        match (u * 4.0).floor() as i32 {
            i32::MIN..=0 => SpawnEdge::Top,
            1 => SpawnEdge::Right,
            2 => SpawnEdge::Bottom,
            _ => SpawnEdge::Left,
        }
    }

    /// Heading range (degrees) pointing into the plane
    pub fn heading_range(&self) -> (f32, f32) {
        match self {
            SpawnEdge::Top => (0.0, 180.0),
            SpawnEdge::Right => (90.0, 270.0),
            SpawnEdge::Bottom => (-180.0, 0.0),
            SpawnEdge::Left => (-90.0, 90.0),
        }
    }
}

/// Unit value `(s - 1) / 10` in `[0, 0.9]` for a sample in `[1, 10]`
#[inline]
pub fn sample_unit(sample: u8) -> f32 {
    let s = sample.clamp(SAMPLE_MIN, SAMPLE_MAX);
    f32::from(s - SAMPLE_MIN) / f32::from(SAMPLE_MAX)
}

/// Candidate asteroid for a sample, before any overlap check
pub fn candidate(sample: u8, config: &SimConfig) -> Asteroid {
    let u = sample_unit(sample);
    let speed = lerp(config.asteroid_speed.0, config.asteroid_speed.1, u);
    let radius = lerp(config.asteroid_radius.0, config.asteroid_radius.1, u);
    let edge = SpawnEdge::from_unit(u);
    let (min_heading, max_heading) = edge.heading_range();
    let heading = lerp(min_heading, max_heading, u);

    let (x, y) = match edge {
        SpawnEdge::Top => (lerp(-radius, config.width + radius, u), -radius),
        SpawnEdge::Right => (config.width + radius, config.height * u),
        // Bottom spawns are pinned to the horizontal midpoint
        SpawnEdge::Bottom => (config.width / 2.0, config.height + radius),
        SpawnEdge::Left => (-radius, config.height * u),
    };

    Asteroid {
        pose: Pose::new(x, y, heading),
        radius,
        speed,
    }
}

/// Zero or one new asteroid for this tick
///
/// Nothing is produced when the field is already at `target`, or when the
/// candidate would overlap an existing asteroid. A rejected candidate is not
/// retried until the next tick.
pub fn generate(
    existing: &[Asteroid],
    target: usize,
    sample: u8,
    config: &SimConfig,
) -> Option<Asteroid> {
    if existing.len() >= target {
        return None;
    }

    let rock = candidate(sample, config);
    let blocked = existing
        .iter()
        .any(|other| circles_overlap(rock.pose.pos, rock.radius, other.pose.pos, other.radius));
    if blocked {
        log::debug!(
            "Spawn rejected: sample {} overlaps field at ({:.1}, {:.1})",
            sample,
            rock.pose.pos.x,
            rock.pose.pos.y
        );
        return None;
    }

    log::debug!(
        "Spawned asteroid r={:.1} speed={:.2} at ({:.1}, {:.1}) heading {:.1}",
        rock.radius,
        rock.speed,
        rock.pose.pos.x,
        rock.pose.pos.y,
        rock.pose.heading
    );
    Some(rock)
}
