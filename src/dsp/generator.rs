//! Noisy harmonic generator

use std::f64::consts::PI;

use crate::domain::{GeneratorParams, HarmonicError, HarmonicResult, Waveform};
use super::noise::NoiseSource;

/// Number of samples in every generated waveform
pub const SAMPLE_COUNT: usize = 1000;

/// Length of the time axis in seconds, starting at 0
pub const DURATION_SECONDS: f64 = 10.0;

/// `len` evenly spaced instants over `[0, duration]`, both ends included
pub fn time_axis(len: usize, duration: f64) -> Vec<f64> {
    match len {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = (len - 1) as f64;
            (0..len).map(|i| duration * i as f64 / last).collect()
        }
    }
}

/// Generate `A·sin(2π·f·t + φ)` over the fixed time axis, plus
/// `mean + sqrt(dispersion)·noise[i]` when noise is enabled.
///
/// The noise term is an affine rescaling of the held sample, so repeated calls
/// with the same `noise` and parameters return bit-identical waveforms.
pub fn generate(params: &GeneratorParams, noise: &NoiseSource) -> HarmonicResult<Waveform> {
    validate(params)?;
    if noise.len() != SAMPLE_COUNT {
        return Err(HarmonicError::invalid(format!(
            "noise source has {} samples, expected {SAMPLE_COUNT}",
            noise.len()
        )));
    }

    let time = time_axis(SAMPLE_COUNT, DURATION_SECONDS);
    let omega = 2.0 * PI * params.frequency;
    let mut amplitude: Vec<f64> = time
        .iter()
        .map(|&t| params.amplitude * (omega * t + params.phase).sin())
        .collect();

    if params.include_noise {
        let scale = params.noise_dispersion.sqrt();
        for (y, &n) in amplitude.iter_mut().zip(noise.samples()) {
            *y += params.noise_mean + scale * n;
        }
    }

    Ok(Waveform { time, amplitude })
}

fn validate(params: &GeneratorParams) -> HarmonicResult<()> {
    let named = [
        ("amplitude", params.amplitude),
        ("frequency", params.frequency),
        ("phase", params.phase),
        ("noise_mean", params.noise_mean),
        ("noise_dispersion", params.noise_dispersion),
    ];
    if let Some((name, value)) = named.iter().find(|(_, v)| !v.is_finite()) {
        return Err(HarmonicError::invalid(format!("{name} must be finite, got {value}")));
    }
    if params.noise_dispersion < 0.0 {
        return Err(HarmonicError::invalid(format!(
            "noise_dispersion must be >= 0, got {}",
            params.noise_dispersion
        )));
    }
    Ok(())
}
