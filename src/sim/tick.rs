//! Per-frame state transition
//!
//! One call advances ship, bullets and asteroids by `dt`, tops the field up by
//! at most one asteroid and commits the result.

use super::collision::circles_overlap;
use super::kinematics::{integrate_asteroids, integrate_bullet, integrate_ship};
use super::spawn;
use super::state::SimulationState;
use crate::consts::{SAMPLE_MAX, SAMPLE_MIN};
use crate::settings::SimConfig;

/// Advance the simulation by `dt` milliseconds using one random `sample`
pub fn tick(state: &mut SimulationState, dt: f32, sample: u8, config: &SimConfig) {
    // Terminal sessions are frozen
    if state.game_over {
        return;
    }

    let dt = if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::warn!("Ignoring invalid dt {dt}, treating as 0");
        0.0
    };

    let sample = if (SAMPLE_MIN..=SAMPLE_MAX).contains(&sample) {
        sample
    } else {
        log::warn!("Sample {sample} outside [{SAMPLE_MIN}, {SAMPLE_MAX}], clamping");
        sample.clamp(SAMPLE_MIN, SAMPLE_MAX)
    };

    let ship = integrate_ship(&state.ship, &state.input, dt, config);

    let bullets: Vec<_> = state
        .bullets
        .iter()
        .filter_map(|b| integrate_bullet(b, dt, config))
        .collect();

    // Bullet contact uses pre-tick bullet positions
    let mut asteroids = integrate_asteroids(&state.asteroids, &state.bullets, dt, config);

    if let Some(rock) = spawn::generate(&asteroids, state.target_asteroids, sample, config) {
        asteroids.push(rock);
    }

    if config.ship_collision_ends_session {
        let hit = asteroids.iter().any(|rock| {
            circles_overlap(
                ship.pose.pos,
                config.ship_half_length,
                rock.pose.pos,
                rock.radius,
            )
        });
        if hit {
            log::debug!(
                "Ship destroyed at tick {} ({:.1}, {:.1})",
                state.time_ticks + 1,
                ship.pose.pos.x,
                ship.pose.pos.y
            );
            state.game_over = true;
        }
    }

    state.ship = ship;
    state.bullets = bullets;
    state.asteroids = asteroids;
    state.last_sample = sample;
    state.time_ticks += 1;
    state.elapsed_ms += f64::from(dt);

    log::trace!(
        "Tick {}: {} bullets, {} asteroids",
        state.time_ticks,
        state.bullets.len(),
        state.asteroids.len()
    );
}
