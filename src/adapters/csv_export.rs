//! CSV exporter
//!
//! One row per sample: time, original and filtered amplitude, then every
//! generator and filter parameter repeated on each row, so a single file is
//! enough to reproduce the plot.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::domain::HarmonicResult;
use crate::ports::{ExportRecord, WaveformExporter};

pub const HEADER: [&str; 14] = [
    "Time",
    "Original Signal",
    "Filtered Signal",
    "Amplitude",
    "Frequency",
    "Phase",
    "Noise Mean",
    "Noise Dispersion",
    "Show Noise",
    "Filter Type",
    "Gaussian STD",
    "Gaussian Window",
    "Uniform Window",
    "Alpha",
];

/// Writes export records as comma-separated text to any writer
pub struct CsvExporter<W: Write> {
    writer: W,
    path: Option<PathBuf>,
}

impl<W: Write> CsvExporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, path: None }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl CsvExporter<BufWriter<File>> {
    /// Create (or truncate) a CSV file at `path`
    pub fn create(path: impl AsRef<Path>) -> HarmonicResult<Self> {
        let path = path.as_ref();
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            path: Some(path.to_path_buf()),
        })
    }
}

impl<W: Write> WaveformExporter for CsvExporter<W> {
    fn export(&mut self, record: &ExportRecord<'_>) -> HarmonicResult<()> {
        let generator = &record.config.generator;
        let filter = &record.config.filter;

        // Parameter columns are identical on every row
        let params = format!(
            "{},{},{},{},{},{},{},{},{},{},{}",
            generator.amplitude,
            generator.frequency,
            generator.phase,
            generator.noise_mean,
            generator.noise_dispersion,
            u8::from(generator.include_noise),
            filter.kind,
            filter.gaussian_sigma,
            filter.gaussian_window,
            filter.uniform_window,
            filter.alpha,
        );

        writeln!(self.writer, "{}", HEADER.join(","))?;
        for ((t, y), f) in record.waveform.points().zip(record.filtered) {
            writeln!(self.writer, "{t},{y},{f},{params}")?;
        }
        self.writer.flush()?;

        match &self.path {
            Some(path) => log::info!("exported {} rows to {}", record.len(), path.display()),
            None => log::debug!("exported {} rows", record.len()),
        }
        Ok(())
    }
}
