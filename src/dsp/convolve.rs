//! Same-length linear convolution
//!
//! Boundary convention: the input is zero-padded on both sides and the output
//! is the centred slice of the full convolution, `same[i] = full[i + (k - 1) / 2]`.
//! Near the edges only the overlapping part of the kernel contributes, so a
//! constant input sags towards zero over the first and last `k / 2` samples.

use crate::domain::Sample;

/// Convolve `input` with `kernel`, returning exactly `input.len()` samples.
///
/// Kernels longer than the input are allowed; the output length still
/// follows the input.
pub fn convolve_same(input: &[Sample], kernel: &[f64]) -> Vec<Sample> {
    let n = input.len();
    let k = kernel.len();
    if n == 0 || k == 0 {
        return vec![0.0; n];
    }

    let offset = (k - 1) / 2;
    (0..n)
        .map(|i| {
            // full[m] = Σ kernel[j] · input[m - j], restricted to valid input indices
            let m = i + offset;
            let j_min = m.saturating_sub(n - 1);
            let j_max = m.min(k - 1);
            (j_min..=j_max).map(|j| kernel[j] * input[m - j]).sum()
        })
        .collect()
}

/// Same-length convolution with a flat kernel of `window` taps of `1 / window`.
///
/// Follows the boundary convention of [`convolve_same`] but sums the covered
/// input range from prefix sums, so cost and memory depend only on the input.
pub fn moving_average_same(input: &[Sample], window: usize) -> Vec<Sample> {
    let n = input.len();
    if n == 0 || window == 0 {
        return vec![0.0; n];
    }

    let mut prefix = Vec::with_capacity(n + 1);
    prefix.push(0.0);
    for &x in input {
        let last = prefix[prefix.len() - 1];
        prefix.push(last + x);
    }

    let offset = (window - 1) / 2;
    let scale = 1.0 / window as f64;
    (0..n)
        .map(|i| {
            // input indices m - j for taps j in 0..window, m = i + offset
            let m = i.saturating_add(offset);
            let lo = m.saturating_sub(window - 1);
            let hi = m.min(n - 1);
            if lo > hi {
                0.0
            } else {
                (prefix[hi + 1] - prefix[lo]) * scale
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moving_average_matches_flat_kernel() {
        let input = [0.5, -1.0, 2.0, 4.0, -3.0, 1.5, 0.0];
        for window in 1..=10 {
            let kernel = vec![1.0 / window as f64; window];
            let expected = convolve_same(&input, &kernel);
            let actual = moving_average_same(&input, window);
            for (a, e) in actual.iter().zip(&expected) {
                assert!((a - e).abs() < 1e-12, "window {window}: {a} vs {e}");
            }
        }
    }

    #[test]
    fn unit_impulse_kernel_is_identity() {
        let input = [3.0, -1.0, 4.0, 1.5];
        assert_eq!(convolve_same(&input, &[1.0]), input.to_vec());
    }

    #[test]
    fn centred_odd_kernel() {
        // full = [0, 1, 2.5, 4, 1.5]; centred slice starts at index 1
        let out = convolve_same(&[1.0, 2.0, 3.0], &[0.0, 1.0, 0.5]);
        assert_eq!(out, vec![1.0, 2.5, 4.0]);
    }

    #[test]
    fn even_kernel_takes_the_left_centre() {
        // full = [1, 3, 5, 3]; slice starts at index 0
        let out = convolve_same(&[1.0, 2.0, 3.0], &[1.0, 1.0]);
        assert_eq!(out, vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn edges_are_zero_padded() {
        let third = 1.0 / 3.0;
        let out = convolve_same(&[3.0; 5], &[third; 3]);
        assert!((out[0] - 2.0).abs() < 1e-12);
        assert!((out[2] - 3.0).abs() < 1e-12);
        assert!((out[4] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn kernel_longer_than_input_keeps_input_length() {
        let out = convolve_same(&[1.0, 1.0], &[0.2; 7]);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|y| (y - 0.4).abs() < 1e-12));
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(convolve_same(&[], &[1.0, 2.0]).is_empty());
    }
}
