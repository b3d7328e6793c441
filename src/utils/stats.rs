//! Descriptive statistics over a sample sequence

use serde::Serialize;

use crate::domain::Sample;

/// Summary of one sequence
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub rms: f64,
    /// Sum of absolute first differences
    pub total_variation: f64,
}

impl SampleStats {
    /// `None` for an empty sequence
    pub fn of(samples: &[Sample]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let n = samples.len() as f64;
        let (min, max) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &s| {
                (lo.min(s), hi.max(s))
            });
        Some(Self {
            min,
            max,
            mean: samples.iter().sum::<f64>() / n,
            rms: (samples.iter().map(|s| s * s).sum::<f64>() / n).sqrt(),
            total_variation: total_variation(samples),
        })
    }
}

pub fn total_variation(samples: &[Sample]) -> f64 {
    samples.windows(2).map(|w| (w[1] - w[0]).abs()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_of_simple_sequence() {
        let stats = SampleStats::of(&[1.0, -1.0, 3.0]).unwrap();
        assert_eq!(stats.min, -1.0);
        assert_eq!(stats.max, 3.0);
        assert_eq!(stats.mean, 1.0);
        assert_eq!(stats.total_variation, 6.0);
        assert!((stats.rms - (11.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn empty_sequence_has_no_stats() {
        assert!(SampleStats::of(&[]).is_none());
    }
}
