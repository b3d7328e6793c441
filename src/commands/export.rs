//! Export command: write the current frame to CSV

use std::path::Path;

use crate::adapters::CsvExporter;
use crate::domain::HarmonicResult;
use crate::state::Session;

pub fn run(session: &Session, path: &Path) -> HarmonicResult<()> {
    let mut exporter = CsvExporter::create(path)?;
    session.export(&mut exporter)?;
    println!("Saved results to {}", path.display());
    Ok(())
}
