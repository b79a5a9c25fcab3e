//! Export helpers for JSON and CSV artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

/// Errors raised while writing or reading exported artifacts.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod json {
    use std::fs::File;
    use std::io::{BufReader, Write};
    use std::path::Path;

    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::{ExportError, writer_for_path};

    /// Pretty-print a record to `path` (`-` for stdout).
    pub fn write_record<T: Serialize>(path: &Path, record: &T) -> Result<(), ExportError> {
        let mut writer = writer_for_path(path)?;
        serde_json::to_writer_pretty(&mut writer, record)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Read back a record written by [`write_record`].
    pub fn read_record<T: DeserializeOwned>(path: &Path) -> Result<T, ExportError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

pub mod payload_range {
    use std::io::Write;
    use std::path::Path;

    use gam_design::PayloadRangeEnvelope;
    use serde::Serialize;

    use super::{ExportError, writer_for_path};

    /// CSV row emitted for each envelope corner.
    #[derive(Debug, Clone, Copy, Serialize)]
    pub struct Row {
        pub corner: &'static str,
        pub range_km: f64,
        pub payload_kg: f64,
        pub npax: f64,
    }

    const CORNERS: [&str; 4] = ["zero_range", "payload_max", "fuel_max", "no_payload"];

    /// Envelope corners as CSV rows, from zero range to ferry range.
    pub fn rows(envelope: &PayloadRangeEnvelope) -> Vec<Row> {
        CORNERS
            .iter()
            .zip(envelope.corners())
            .map(|(&corner, point)| Row {
                corner,
                range_km: point.range_m / 1_000.0,
                payload_kg: point.payload_kg,
                npax: point.payload_kg / envelope.pax_mass_kg,
            })
            .collect()
    }

    /// Write the envelope corners to any writer, header included.
    pub fn write_to<W: Write>(writer: W, envelope: &PayloadRangeEnvelope) -> Result<(), ExportError> {
        let mut out = csv::Writer::from_writer(writer);
        for row in rows(envelope) {
            out.serialize(row)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Write the envelope corners to `path` (`-` for stdout).
    pub fn write_csv(path: &Path, envelope: &PayloadRangeEnvelope) -> Result<(), ExportError> {
        write_to(writer_for_path(path)?, envelope)
    }
}
