//! Session state
//!
//! Holds the current configuration and the shared noise snapshot. Every
//! recompute derives the waveform and its filtered copy from scratch.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::{Configuration, HarmonicError, HarmonicResult, Sample, Waveform};
use crate::dsp::{apply_filter, generate, NoiseSource, SAMPLE_COUNT};
use crate::ports::{ExportRecord, WaveformExporter};

/// One generated waveform plus its filtered copy
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub waveform: Waveform,
    pub filtered: Vec<Sample>,
}

/// Generate and filter in one step
pub fn compute_frame(config: &Configuration, noise: &NoiseSource) -> HarmonicResult<Frame> {
    let waveform = generate(&config.generator, noise)?;
    let filtered = apply_filter(&waveform.amplitude, &config.filter.to_spec())?;
    Ok(Frame { waveform, filtered })
}

/// Shared session state.
///
/// The noise buffer is an immutable snapshot behind an `Arc`; regenerating
/// swaps the reference, so readers holding the old snapshot are unaffected.
pub struct Session {
    config: Mutex<Configuration>,
    noise: Mutex<Arc<NoiseSource>>,
}

impl Session {
    pub fn new(config: Configuration, noise: NoiseSource) -> Self {
        Self {
            config: Mutex::new(config),
            noise: Mutex::new(Arc::new(noise)),
        }
    }

    /// Default configuration with a fresh noise buffer from OS entropy
    pub fn with_entropy() -> Self {
        Self::new(Configuration::default(), NoiseSource::from_entropy(SAMPLE_COUNT))
    }

    pub fn config(&self) -> Configuration {
        lock(&self.config).clone()
    }

    /// The current noise snapshot
    pub fn noise(&self) -> Arc<NoiseSource> {
        Arc::clone(&lock(&self.noise))
    }

    /// Generate and filter with the current configuration and noise
    pub fn recompute(&self) -> HarmonicResult<Frame> {
        let config = self.config();
        let noise = self.noise();
        compute_frame(&config, &noise)
    }

    /// Apply a new configuration if it produces a valid frame.
    ///
    /// On error the previous configuration stays in place.
    pub fn update(&self, config: Configuration) -> HarmonicResult<Frame> {
        let noise = self.noise();
        match compute_frame(&config, &noise) {
            Ok(frame) => {
                *lock(&self.config) = config;
                Ok(frame)
            }
            Err(e) => {
                log::warn!("rejected configuration change: {e}");
                Err(e)
            }
        }
    }

    /// Replace the noise buffer wholesale and recompute
    pub fn regenerate_noise(&self, noise: NoiseSource) -> HarmonicResult<Frame> {
        if noise.len() != SAMPLE_COUNT {
            return Err(HarmonicError::invalid(format!(
                "noise source has {} samples, expected {SAMPLE_COUNT}",
                noise.len()
            )));
        }
        *lock(&self.noise) = Arc::new(noise);
        log::info!("noise regenerated");
        self.recompute()
    }

    /// Restore default parameters, keeping the profile name and the current noise
    pub fn reset(&self) -> HarmonicResult<Frame> {
        {
            let mut config = lock(&self.config);
            *config = Configuration {
                name: config.name.clone(),
                ..Configuration::default()
            };
        }
        self.recompute()
    }

    /// Recompute and hand the result to an exporter
    pub fn export(&self, exporter: &mut dyn WaveformExporter) -> HarmonicResult<()> {
        let config = self.config();
        let frame = compute_frame(&config, &self.noise())?;
        let record = ExportRecord::new(&frame.waveform, &frame.filtered, &config)?;
        exporter.export(&record)
    }
}

// Poisoned locks still hold plain values, so keep going with them
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
