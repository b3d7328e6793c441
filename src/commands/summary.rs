//! Summary command: statistics of the original and filtered signal

use std::fmt;

use serde::Serialize;

use crate::domain::{Configuration, FilterKind, HarmonicResult};
use crate::dsp::Spectrum;
use crate::state::{Frame, Session};
use crate::utils::stats::SampleStats;

/// Snapshot of one computed frame, printed as text or JSON
#[derive(Debug, Serialize)]
pub struct Summary {
    pub profile: String,
    pub filter: FilterKind,
    pub samples: usize,
    pub original: Option<SampleStats>,
    pub filtered: Option<SampleStats>,
    /// Strongest non-DC frequency of the original signal, in Hz
    pub dominant_frequency_hz: Option<f64>,
}

impl Summary {
    pub fn from_frame(config: &Configuration, frame: &Frame) -> Self {
        let spectrum = Spectrum::new(frame.waveform.len().next_power_of_two());
        let dominant_frequency_hz = frame
            .waveform
            .time_step()
            .filter(|dt| *dt > 0.0)
            .and_then(|dt| spectrum.dominant_frequency(&frame.waveform.amplitude, 1.0 / dt));

        Self {
            profile: config.name.clone(),
            filter: config.filter.kind,
            samples: frame.waveform.len(),
            original: SampleStats::of(&frame.waveform.amplitude),
            filtered: SampleStats::of(&frame.filtered),
            dominant_frequency_hz,
        }
    }
}

fn write_stats(f: &mut fmt::Formatter<'_>, label: &str, stats: &Option<SampleStats>) -> fmt::Result {
    match stats {
        Some(s) => writeln!(
            f,
            "{label:<9} min {:>8.4}  max {:>8.4}  mean {:>8.4}  rms {:>8.4}  variation {:>10.4}",
            s.min, s.max, s.mean, s.rms, s.total_variation
        ),
        None => writeln!(f, "{label:<9} (empty)"),
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "profile   {}", self.profile)?;
        writeln!(f, "filter    {}", self.filter)?;
        writeln!(f, "samples   {}", self.samples)?;
        write_stats(f, "original", &self.original)?;
        write_stats(f, "filtered", &self.filtered)?;
        match self.dominant_frequency_hz {
            Some(hz) => write!(f, "dominant  {hz:.3} Hz"),
            None => write!(f, "dominant  n/a"),
        }
    }
}

pub fn run(session: &Session, json: bool) -> HarmonicResult<()> {
    let frame = session.recompute()?;
    let summary = Summary::from_frame(&session.config(), &frame);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{summary}");
    }
    Ok(())
}
