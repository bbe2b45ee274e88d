//! Session: the single owner of simulation state
//!
//! Hosts call [`Session::advance`] once per display refresh and forward
//! control events in between. Nothing else mutates the state.

use super::input::Control;
use super::random::SampleSource;
use super::snapshot::Snapshot;
use super::state::SimulationState;
use super::tick::tick;
use crate::settings::SimConfig;

/// A running game
#[derive(Debug, Clone)]
pub struct Session<S: SampleSource> {
    config: SimConfig,
    state: SimulationState,
    source: S,
}

impl<S: SampleSource> Session<S> {
    pub fn new(config: SimConfig, source: S) -> Self {
        let state = SimulationState::new(&config);
        log::info!(
            "Session started: {}x{} plane, {} target asteroids",
            config.width,
            config.height,
            config.target_asteroids
        );
        Self {
            config,
            state,
            source,
        }
    }

    /// Advance by `dt_ms`, consuming one sample
    pub fn advance(&mut self, dt_ms: f32) {
        let was_over = self.state.game_over;
        let sample = self.source.next_sample();
        tick(&mut self.state, dt_ms, sample, &self.config);

        if self.state.game_over && !was_over {
            log::info!(
                "Session over after {} ticks ({:.0} ms)",
                self.state.time_ticks,
                self.state.elapsed_ms
            );
        }
    }

    /// A control went down (level-triggered)
    pub fn on_control_down(&mut self, control: Control) {
        self.state.input.set(control, true);
    }

    /// A control came up (level-triggered)
    pub fn on_control_up(&mut self, control: Control) {
        self.state.input.set(control, false);
    }

    /// A discrete press (edge-triggered); only `Fire` reacts
    pub fn on_control_pressed(&mut self, control: Control) {
        if control == Control::Fire && !self.state.game_over {
            self.state.fire();
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn is_over(&self) -> bool {
        self.state.game_over
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&self.state)
    }
}
