//! Export port trait

use crate::domain::{Configuration, HarmonicError, HarmonicResult, Sample, Waveform};

/// Everything an exporter needs: the last computed signal pair plus the
/// parameters that produced it
#[derive(Debug, Clone, Copy)]
pub struct ExportRecord<'a> {
    pub waveform: &'a Waveform,
    pub filtered: &'a [Sample],
    pub config: &'a Configuration,
}

impl<'a> ExportRecord<'a> {
    /// Build a record, checking that all sequences line up sample for sample
    pub fn new(
        waveform: &'a Waveform,
        filtered: &'a [Sample],
        config: &'a Configuration,
    ) -> HarmonicResult<Self> {
        let len = waveform.len();
        if waveform.time.len() != len || filtered.len() != len {
            return Err(HarmonicError::invalid(format!(
                "export sequences differ in length: time={}, original={}, filtered={}",
                waveform.time.len(),
                len,
                filtered.len()
            )));
        }
        Ok(Self {
            waveform,
            filtered,
            config,
        })
    }

    pub fn len(&self) -> usize {
        self.waveform.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waveform.is_empty()
    }
}

/// Trait for writing a computed signal somewhere (file, memory, ...)
pub trait WaveformExporter {
    fn export(&mut self, record: &ExportRecord<'_>) -> HarmonicResult<()>;
}
