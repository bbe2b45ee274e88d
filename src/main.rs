//! Drift Rocks headless host
//!
//! Drives a session at a fixed refresh rate with a scripted pilot and prints
//! the final snapshot as JSON. Rendering and keyboard wiring belong to real
//! front-ends.
//!
//! Usage: `drift-rocks [seed] [frames] [config.json]`

use std::error::Error;

use drift_rocks::SimConfig;
use drift_rocks::consts::FRAME_MS;
use drift_rocks::sim::{Control, PcgSampleSource, Session};

const DEFAULT_SEED: u64 = 12345;
const DEFAULT_FRAMES: u32 = 3600;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(s) => s.parse()?,
        None => DEFAULT_SEED,
    };
    let frames = match args.next() {
        Some(s) => s.parse()?,
        None => DEFAULT_FRAMES,
    };
    let config = match args.next() {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };

    let mut session = Session::new(config, PcgSampleSource::new(seed));
    for frame in 0..frames {
        pilot(&mut session, frame);
        session.advance(FRAME_MS);
        if session.is_over() {
            break;
        }
    }

    println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    Ok(())
}

/// Scripted key events: thrust in bursts, sweep left and right, fire twice a second
fn pilot<S: drift_rocks::sim::SampleSource>(session: &mut Session<S>, frame: u32) {
    match frame % 240 {
        0 => session.on_control_down(Control::Thrust),
        60 => {
            session.on_control_up(Control::Thrust);
            session.on_control_down(Control::RotateLeft);
        }
        120 => {
            session.on_control_up(Control::RotateLeft);
            session.on_control_down(Control::RotateRight);
        }
        180 => session.on_control_up(Control::RotateRight),
        _ => {}
    }

    if frame % 30 == 0 {
        session.on_control_pressed(Control::Fire);
    }
}
