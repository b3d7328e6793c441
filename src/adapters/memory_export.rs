//! In-memory exporter for tests and embedding front ends

use crate::domain::{Configuration, HarmonicResult, Sample, Waveform};
use crate::ports::{ExportRecord, WaveformExporter};

/// An owned copy of one exported record
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedFrame {
    pub waveform: Waveform,
    pub filtered: Vec<Sample>,
    pub config: Configuration,
}

/// Keeps every exported record in a `Vec`
#[derive(Debug, Default)]
pub struct MemoryExporter {
    pub frames: Vec<ExportedFrame>,
}

impl MemoryExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&ExportedFrame> {
        self.frames.last()
    }
}

impl WaveformExporter for MemoryExporter {
    fn export(&mut self, record: &ExportRecord<'_>) -> HarmonicResult<()> {
        self.frames.push(ExportedFrame {
            waveform: record.waveform.clone(),
            filtered: record.filtered.to_vec(),
            config: record.config.clone(),
        });
        log::debug!("[MEMORY EXPORT] stored frame #{}", self.frames.len());
        Ok(())
    }
}
