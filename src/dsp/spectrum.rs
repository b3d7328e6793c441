//! Magnitude spectrum of a waveform

use std::sync::Arc;
use num_complex::Complex;
use rustfft::{Fft, FftPlanner};

use crate::domain::Sample;

/// FFT-based spectrum analyser with a cached plan and Hann window
pub struct Spectrum {
    fft: Arc<dyn Fft<f64>>,
    size: usize,
    window: Vec<f64>,
}

impl Spectrum {
    /// Create a new analyser for blocks of `size` samples
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(size);

        let window: Vec<f64> = (0..size)
            .map(|i| {
                let x = std::f64::consts::PI * i as f64 / size as f64;
                0.5 * (1.0 - (2.0 * x).cos())
            })
            .collect();

        Self { fft, size, window }
    }

    /// Linear magnitudes of the positive-frequency bins.
    /// Shorter inputs are zero-padded, longer ones truncated to `size`.
    pub fn magnitudes(&self, samples: &[Sample]) -> Vec<f64> {
        let mut buffer: Vec<Complex<f64>> = samples
            .iter()
            .take(self.size)
            .zip(self.window.iter())
            .map(|(&s, &w)| Complex::new(s * w, 0.0))
            .collect();
        buffer.resize(self.size, Complex::new(0.0, 0.0));

        self.fft.process(&mut buffer);

        buffer[..self.size / 2].iter().map(|c| c.norm()).collect()
    }

    /// Frequency of the strongest non-DC bin, `None` if there is no such bin
    /// or every non-DC bin is silent
    pub fn dominant_frequency(&self, samples: &[Sample], sample_rate: f64) -> Option<f64> {
        let magnitudes = self.magnitudes(samples);
        magnitudes
            .iter()
            .enumerate()
            .skip(1)
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .filter(|(_, peak)| **peak > 0.0)
            .map(|(bin, _)| bin as f64 * sample_rate / self.size as f64)
    }

    /// Energy in bins above `fraction` of Nyquist (0.0..=1.0)
    pub fn high_band_energy(&self, samples: &[Sample], fraction: f64) -> f64 {
        let magnitudes = self.magnitudes(samples);
        let start = ((magnitudes.len() as f64) * fraction.clamp(0.0, 1.0)) as usize;
        magnitudes[start..].iter().map(|m| m * m).sum()
    }
}
