//! Smoothing filters
//!
//! Gaussian smoothing is an FIR kernel applied with [`convolve_same`].
//! Uniform smoothing is the same convolution computed from prefix sums, so
//! the window never has to exist in memory. Exponential smoothing is a
//! single-pole IIR recursion and has to walk the sequence in order.

use crate::domain::{FilterSpec, HarmonicError, HarmonicResult, Sample};
use super::convolve::{convolve_same, moving_average_same};

/// Apply `spec` to `samples`, returning a sequence of the same length.
///
/// `FilterSpec::None` returns a copy of the input, including for empty input.
/// Every other variant rejects an empty sequence with `EmptyInput`.
pub fn apply_filter(samples: &[Sample], spec: &FilterSpec) -> HarmonicResult<Vec<Sample>> {
    spec.validate()?;

    if let FilterSpec::None = spec {
        return Ok(samples.to_vec());
    }
    if samples.is_empty() {
        return Err(HarmonicError::EmptyInput);
    }

    let filtered = match *spec {
        FilterSpec::None => samples.to_vec(),
        FilterSpec::Gaussian { window, sigma } => {
            convolve_same(samples, &gaussian_kernel(window, sigma))
        }
        FilterSpec::Uniform { window } => moving_average_same(samples, window),
        FilterSpec::Exponential { alpha } => {
            let mut smoother = ExponentialSmoother::new(alpha);
            samples.iter().map(|&x| smoother.process(x)).collect()
        }
    };

    log::trace!("{} filter over {} samples", spec.kind(), samples.len());
    Ok(filtered)
}

/// Symmetric Gaussian window of `window` taps, normalized to unity DC gain.
///
/// Tap `k` is `exp(-(n/σ)² / 2)` with `n = k - (window - 1) / 2`. Dividing
/// before squaring keeps the centre tap at 1 for any positive sigma, so a
/// vanishingly small sigma degenerates to a unit impulse.
pub fn gaussian_kernel(window: usize, sigma: f64) -> Vec<f64> {
    let centre = (window as f64 - 1.0) / 2.0;
    let mut kernel: Vec<f64> = (0..window)
        .map(|k| {
            let n = k as f64 - centre;
            (-0.5 * (n / sigma).powi(2)).exp()
        })
        .collect();

    let sum: f64 = kernel.iter().sum();
    if sum > 0.0 {
        for c in &mut kernel {
            *c /= sum;
        }
    }
    kernel
}

/// Exponential moving average, one sample at a time
#[derive(Debug, Clone, Copy)]
pub struct ExponentialSmoother {
    alpha: f64,
    previous: Option<f64>,
}

impl ExponentialSmoother {
    pub fn new(alpha: f64) -> Self {
        debug_assert!(
            alpha > 0.0 && alpha <= 1.0,
            "EMA alpha must be in range (0.0, 1.0], got {alpha}"
        );
        Self {
            alpha,
            previous: None,
        }
    }

    /// output = alpha * input + (1 - alpha) * previous output.
    /// The first sample passes through unchanged.
    pub fn process(&mut self, input: f64) -> f64 {
        let output = match self.previous {
            None => input,
            Some(previous) => self.alpha * input + (1.0 - self.alpha) * previous,
        };
        self.previous = Some(output);
        output
    }

    /// Reset the filter state
    pub fn reset(&mut self) {
        self.previous = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::stats::total_variation;

    #[test]
    fn none_is_identity() {
        let input = vec![0.3, -2.0, 7.5];
        assert_eq!(apply_filter(&input, &FilterSpec::None).unwrap(), input);
        assert!(apply_filter(&[], &FilterSpec::None).unwrap().is_empty());
    }

    #[test]
    fn gaussian_kernel_is_normalized_and_symmetric() {
        let kernel = gaussian_kernel(7, 1.5);
        let sum: f64 = kernel.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12, "kernel should sum to 1, got {sum}");
        for i in 0..kernel.len() / 2 {
            assert!((kernel[i] - kernel[kernel.len() - 1 - i]).abs() < 1e-15);
        }
        assert!(kernel[3] > kernel[2] && kernel[2] > kernel[1]);
    }

    #[test]
    fn tiny_sigma_degenerates_to_unit_impulse() {
        assert_eq!(gaussian_kernel(3, 1e-200), vec![0.0, 1.0, 0.0]);

        let input = [1.0, 2.0, 3.0];
        let spec = FilterSpec::Gaussian { window: 3, sigma: 1e-200 };
        assert_eq!(apply_filter(&input, &spec).unwrap(), input.to_vec());
    }

    #[test]
    fn gaussian_window_above_limit_is_rejected() {
        let spec = FilterSpec::Gaussian { window: (1 << 45) + 1, sigma: 1.0 };
        assert!(matches!(
            apply_filter(&[1.0, 2.0, 3.0], &spec),
            Err(HarmonicError::InvalidParameter(_))
        ));
    }

    #[test]
    fn uniform_window_far_longer_than_input() {
        let window = 1usize << 45;
        let output = apply_filter(&[1.0, 2.0, 3.0], &FilterSpec::Uniform { window }).unwrap();

        assert_eq!(output.len(), 3);
        for y in output {
            assert!((y - 6.0 / window as f64).abs() < 1e-24);
        }
    }

    #[test]
    fn gaussian_reduces_total_variation() {
        let input = [0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0, -1.0, 0.0, 1.0];
        let spec = FilterSpec::Gaussian { window: 3, sigma: 2.0 };
        let output = apply_filter(&input, &spec).unwrap();

        assert_eq!(output.len(), input.len());
        assert!(total_variation(&output) < total_variation(&input));
    }

    #[test]
    fn uniform_window_one_is_identity() {
        let input = [1.0, -4.0, 2.5, 0.0];
        let output = apply_filter(&input, &FilterSpec::Uniform { window: 1 }).unwrap();
        assert_eq!(output, input.to_vec());
    }

    #[test]
    fn uniform_averages_interior_samples() {
        let input = [1.0, 2.0, 3.0, 4.0, 5.0];
        let output = apply_filter(&input, &FilterSpec::Uniform { window: 3 }).unwrap();
        assert!((output[2] - 3.0).abs() < 1e-12);
        // zero padding at the left edge: (0 + 1 + 2) / 3
        assert!((output[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn exponential_alpha_one_is_identity() {
        let input = [0.5, -1.0, 3.0, 2.0];
        let output = apply_filter(&input, &FilterSpec::Exponential { alpha: 1.0 }).unwrap();
        assert_eq!(output, input.to_vec());
    }

    #[test]
    fn exponential_recursion() {
        let output =
            apply_filter(&[2.0, 0.0, 0.0], &FilterSpec::Exponential { alpha: 0.5 }).unwrap();
        assert_eq!(output, vec![2.0, 1.0, 0.5]);
    }

    #[test]
    fn smoother_reset_reinitializes() {
        let mut smoother = ExponentialSmoother::new(0.3);
        smoother.process(0.5);
        smoother.process(0.7);
        smoother.reset();
        assert_eq!(smoother.process(1.0), 1.0);
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let x = [1.0, 2.0, 3.0];
        for spec in [
            FilterSpec::Gaussian { window: 2, sigma: 1.0 },
            FilterSpec::Gaussian { window: 0, sigma: 1.0 },
            FilterSpec::Gaussian { window: 5, sigma: 0.0 },
            FilterSpec::Uniform { window: 0 },
            FilterSpec::Exponential { alpha: 0.0 },
        ] {
            assert!(
                matches!(apply_filter(&x, &spec), Err(HarmonicError::InvalidParameter(_))),
                "{spec:?} should be rejected"
            );
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            apply_filter(&[], &FilterSpec::Uniform { window: 3 }),
            Err(HarmonicError::EmptyInput)
        ));
    }
}
