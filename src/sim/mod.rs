//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - State is owned by a single `Session`, never global
//! - Randomness only through an injected `SampleSource`
//! - Stable iteration order (firing order for bullets, spawn order for asteroids)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod kinematics;
pub mod random;
pub mod session;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, is_out_of_bounds};
pub use input::{Control, InputFlags};
pub use random::{PcgSampleSource, SampleSource, ScriptedSamples};
pub use session::Session;
pub use snapshot::{AsteroidView, Snapshot};
pub use spawn::SpawnEdge;
pub use state::{Asteroid, Bullet, Pose, Ship, SimulationState};
pub use tick::tick;
