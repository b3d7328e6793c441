//! Held standard-normal noise sample
//!
//! The generator never draws fresh noise. It rescales one buffer of N(0, 1)
//! samples, which only changes when the caller builds a new `NoiseSource`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::domain::{HarmonicError, HarmonicResult, Sample};

/// Fixed-length buffer of standard-normal samples
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseSource {
    samples: Vec<Sample>,
}

impl NoiseSource {
    /// Draw `len` samples from a seeded generator. Same seed, same buffer.
    pub fn from_seed(seed: u64, len: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::from_rng(&mut rng, len)
    }

    /// Draw `len` samples from OS entropy
    pub fn from_entropy(len: usize) -> Self {
        let mut rng = StdRng::from_entropy();
        Self::from_rng(&mut rng, len)
    }

    /// Draw `len` samples from any random number generator
    pub fn from_rng<R: Rng>(rng: &mut R, len: usize) -> Self {
        let samples: Vec<Sample> = (0..len).map(|_| rng.sample(StandardNormal)).collect();
        log::debug!("noise source drawn: {len} samples");
        Self { samples }
    }

    /// Wrap caller-provided samples, e.g. a buffer restored from disk
    pub fn from_samples(samples: Vec<Sample>) -> HarmonicResult<Self> {
        if let Some(bad) = samples.iter().find(|s| !s.is_finite()) {
            return Err(HarmonicError::invalid(format!(
                "noise samples must be finite, got {bad}"
            )));
        }
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
