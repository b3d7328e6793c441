//! Core domain types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{HarmonicError, HarmonicResult};

/// Signal sample type (64-bit float, unbounded)
pub type Sample = f64;

/// Largest accepted Gaussian window; its kernel is built in memory
pub const MAX_GAUSSIAN_WINDOW: usize = 1 << 20;

/// Parameters of the noisy harmonic `A·sin(2π·f·t + φ) + noise`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorParams {
    pub amplitude: f64,
    /// Frequency in Hz
    pub frequency: f64,
    /// Phase in radians
    pub phase: f64,
    pub noise_mean: f64,
    /// Variance of the additive noise; its square root scales the held sample
    pub noise_dispersion: f64,
    pub include_noise: bool,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            frequency: 1.0,
            phase: 0.0,
            noise_mean: 0.0,
            noise_dispersion: 0.1,
            include_noise: true,
        }
    }
}

/// A generated signal: evenly spaced time axis plus one amplitude per instant
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    pub time: Vec<f64>,
    pub amplitude: Vec<Sample>,
}

impl Waveform {
    pub fn len(&self) -> usize {
        self.amplitude.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amplitude.is_empty()
    }

    /// Iterate `(time, amplitude)` pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, Sample)> + '_ {
        self.time.iter().copied().zip(self.amplitude.iter().copied())
    }

    /// Spacing between consecutive time points, `None` for fewer than two points
    pub fn time_step(&self) -> Option<f64> {
        match self.time.as_slice() {
            [first, second, ..] => Some(second - first),
            _ => None,
        }
    }
}

/// The active smoothing algorithm and its parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterSpec {
    /// Identity, output equals input
    None,

    /// Normalized Gaussian kernel of `window` taps with standard deviation `sigma`.
    /// Requires: odd window in 3..=MAX_GAUSSIAN_WINDOW, sigma > 0
    Gaussian { window: usize, sigma: f64 },

    /// Moving average over `window` taps.
    /// Requires: window >= 1
    Uniform { window: usize },

    /// Single-pole recursive smoothing: y[i] = alpha * x[i] + (1 - alpha) * y[i-1]
    /// Lower alpha = more smoothing, higher = more responsive.
    /// Requires: 0.0 < alpha <= 1.0
    Exponential { alpha: f64 },
}

impl FilterSpec {
    pub fn kind(&self) -> FilterKind {
        match self {
            FilterSpec::None => FilterKind::None,
            FilterSpec::Gaussian { .. } => FilterKind::Gaussian,
            FilterSpec::Uniform { .. } => FilterKind::Uniform,
            FilterSpec::Exponential { .. } => FilterKind::Exponential,
        }
    }

    /// Check the parameter constraints of the active variant
    pub fn validate(&self) -> HarmonicResult<()> {
        match *self {
            FilterSpec::None => Ok(()),

            FilterSpec::Gaussian { window, sigma } => {
                if window < 3 || window % 2 == 0 {
                    return Err(HarmonicError::invalid(format!(
                        "Gaussian window must be an odd integer >= 3, got {window}"
                    )));
                }
                if window > MAX_GAUSSIAN_WINDOW {
                    return Err(HarmonicError::invalid(format!(
                        "Gaussian window must be <= {MAX_GAUSSIAN_WINDOW}, got {window}"
                    )));
                }
                if !sigma.is_finite() || sigma <= 0.0 {
                    return Err(HarmonicError::invalid(format!(
                        "Gaussian sigma must be > 0, got {sigma}"
                    )));
                }
                Ok(())
            }

            FilterSpec::Uniform { window } => {
                if window == 0 {
                    return Err(HarmonicError::invalid("Uniform window must be >= 1"));
                }
                Ok(())
            }

            FilterSpec::Exponential { alpha } => {
                // NaN fails both comparisons, so test for the accepted range
                if !(alpha > 0.0 && alpha <= 1.0) {
                    return Err(HarmonicError::invalid(format!(
                        "Exponential alpha must be in range (0.0, 1.0], got {alpha}"
                    )));
                }
                Ok(())
            }
        }
    }
}

/// Filter selector without parameters, as chosen from a menu or a CSV column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    #[default]
    None,
    Gaussian,
    Uniform,
    Exponential,
}

impl FilterKind {
    pub const ALL: [FilterKind; 4] = [
        FilterKind::None,
        FilterKind::Gaussian,
        FilterKind::Uniform,
        FilterKind::Exponential,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::None => "none",
            FilterKind::Gaussian => "gaussian",
            FilterKind::Uniform => "uniform",
            FilterKind::Exponential => "exponential",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = HarmonicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        FilterKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| HarmonicError::invalid(format!("unknown filter type '{s}'")))
    }
}

fn default_gaussian_window() -> usize {
    5
}

fn default_gaussian_sigma() -> f64 {
    2.0
}

fn default_uniform_window() -> usize {
    5
}

fn default_alpha() -> f64 {
    0.6
}

/// Every filter control at once, only one of which is active.
///
/// Keeps the parameters of inactive filters around so switching the selected
/// kind back and forth does not lose them, and so exports can report all of them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterSettings {
    #[serde(default)]
    pub kind: FilterKind,
    #[serde(default = "default_gaussian_window")]
    pub gaussian_window: usize,
    #[serde(default = "default_gaussian_sigma")]
    pub gaussian_sigma: f64,
    #[serde(default = "default_uniform_window")]
    pub uniform_window: usize,
    #[serde(default = "default_alpha")]
    pub alpha: f64,
}

impl FilterSettings {
    /// The spec of the currently selected filter
    pub fn to_spec(&self) -> FilterSpec {
        match self.kind {
            FilterKind::None => FilterSpec::None,
            FilterKind::Gaussian => FilterSpec::Gaussian {
                window: self.gaussian_window,
                sigma: self.gaussian_sigma,
            },
            FilterKind::Uniform => FilterSpec::Uniform {
                window: self.uniform_window,
            },
            FilterKind::Exponential => FilterSpec::Exponential { alpha: self.alpha },
        }
    }
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            kind: FilterKind::None,
            gaussian_window: default_gaussian_window(),
            gaussian_sigma: default_gaussian_sigma(),
            uniform_window: default_uniform_window(),
            alpha: default_alpha(),
        }
    }
}
