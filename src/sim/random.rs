//! Random sample source
//!
//! The core draws exactly one small integer per tick. The source is injected
//! so hosts can seed it and tests can script it.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{SAMPLE_MAX, SAMPLE_MIN};

/// Supplies one integer in `[SAMPLE_MIN, SAMPLE_MAX]` per call
pub trait SampleSource {
    fn next_sample(&mut self) -> u8;
}

/// Seeded PCG source; the same seed replays the same session
#[derive(Debug, Clone)]
pub struct PcgSampleSource {
    seed: u64,
    rng: Pcg32,
}

impl PcgSampleSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl SampleSource for PcgSampleSource {
    fn next_sample(&mut self) -> u8 {
        self.rng.random_range(SAMPLE_MIN..=SAMPLE_MAX)
    }
}

/// Scripted source cycling through fixed samples
#[derive(Debug, Clone)]
pub struct ScriptedSamples {
    samples: Vec<u8>,
    cursor: usize,
}

impl ScriptedSamples {
    pub fn new(samples: Vec<u8>) -> Self {
        Self { samples, cursor: 0 }
    }

    /// Always returns `sample`
    pub fn constant(sample: u8) -> Self {
        Self::new(vec![sample])
    }
}

impl SampleSource for ScriptedSamples {
    fn next_sample(&mut self) -> u8 {
        if self.samples.is_empty() {
            return SAMPLE_MIN;
        }
        let sample = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        sample
    }
}
