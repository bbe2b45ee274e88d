//! Per-body motion integration
//!
//! Stateless transforms of ship, bullets and asteroids over `dt` milliseconds.
//! Bullets and asteroids that leave the plane produce no successor.

use glam::Vec2;

use super::collision::{circles_overlap, is_out_of_bounds};
use super::input::InputFlags;
use super::state::{Asteroid, Bullet, Pose, Ship};
use crate::heading_vector;
use crate::settings::SimConfig;

/// Advance the ship: rotate, thrust or coast, clamp speed, move, wrap
pub fn integrate_ship(ship: &Ship, input: &InputFlags, dt: f32, config: &SimConfig) -> Ship {
    let heading = ship.pose.heading + input.turn_direction() * config.rotation_rate * dt;
    let dir = heading_vector(heading);

    let mut vel = if input.thrust {
        Vec2::new(
            thrust_axis(ship.vel.x, dir.x, config.thrust, dt),
            thrust_axis(ship.vel.y, dir.y, config.thrust, dt),
        )
    } else {
        ship.vel * config.drag
    };

    // Clamping re-derives direction from heading, not from the old velocity
    if vel.length() > config.max_ship_speed {
        vel = dir * config.max_ship_speed;
    }

    let mut pos = ship.pose.pos + vel * dt;

    // Leaving through the left edge lands at x = height, not x = width
    if pos.x > config.width {
        pos.x = 0.0;
    } else if pos.x < 0.0 {
        pos.x = config.height;
    }

    if pos.y > config.height {
        pos.y -= config.height;
    } else if pos.y < 0.0 {
        pos.y += config.height;
    }

    Ship {
        pose: Pose { pos, heading },
        vel,
    }
}

/// Thrust along one axis. Motion opposing the thrust component is zeroed
/// before the acceleration is applied.
#[inline]
fn thrust_axis(v: f32, component: f32, thrust: f32, dt: f32) -> f32 {
    let base = if component >= 0.0 { v.max(0.0) } else { v.min(0.0) };
    base + component * thrust * dt
}

/// Advance a bullet; `None` once it leaves the plane
pub fn integrate_bullet(bullet: &Bullet, dt: f32, config: &SimConfig) -> Option<Bullet> {
    let mut pose = bullet.pose;
    pose.pos += heading_vector(pose.heading) * config.bullet_speed * dt;

    if is_out_of_bounds(pose.pos, 0.0, config.width, config.height) {
        return None;
    }
    Some(Bullet { pose })
}

/// Advance every asteroid against the pre-tick field and bullets
///
/// An asteroid takes the heading of the first body in `asteroids` order it
/// overlaps, itself included, so an overlapping group follows its earliest
/// member. Lookups read only the pre-tick field, so results do not depend on
/// the order survivors are produced in.
pub fn integrate_asteroids(
    asteroids: &[Asteroid],
    bullets: &[Bullet],
    dt: f32,
    config: &SimConfig,
) -> Vec<Asteroid> {
    let mut survivors = Vec::with_capacity(asteroids.len());

    for (i, asteroid) in asteroids.iter().enumerate() {
        let heading = asteroids[..i]
            .iter()
            .find(|other| {
                circles_overlap(
                    asteroid.pose.pos,
                    asteroid.radius,
                    other.pose.pos,
                    other.radius,
                )
            })
            .map_or(asteroid.pose.heading, |other| other.pose.heading);

        let mut moved = *asteroid;
        moved.pose.heading = heading;
        moved.pose.pos += heading_vector(heading) * asteroid.speed * dt;

        if is_out_of_bounds(moved.pose.pos, moved.diameter(), config.width, config.height) {
            continue;
        }

        let shot = bullets
            .iter()
            .any(|b| circles_overlap(moved.pose.pos, moved.radius, b.pose.pos, 0.0));
        if shot {
            log::debug!(
                "Asteroid r={:.1} destroyed at ({:.1}, {:.1})",
                moved.radius,
                moved.pose.pos.x,
                moved.pose.pos.y
            );
            continue;
        }

        survivors.push(moved);
    }

    survivors
}
