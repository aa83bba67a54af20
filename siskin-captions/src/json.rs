//! Adapter for whisper.cpp JSON transcription output.
//!
//! whisper.cpp's JSON output wraps the record sequence in a `transcription`
//! array alongside model and system metadata; only the records matter here.

use crate::error::Result;
use crate::types::Record;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level payload of a whisper.cpp JSON output file.
#[derive(Debug, Deserialize)]
pub struct Output {
    /// Ordered recognizer records
    pub transcription: Vec<Record>,
}

/// Parse records from a whisper.cpp JSON payload.
pub fn from_str(payload: &str) -> Result<Vec<Record>> {
    let output: Output = serde_json::from_str(payload)?;
    Ok(output.transcription)
}

/// Read and parse a whisper.cpp JSON output file.
pub fn from_file(path: &Path) -> Result<Vec<Record>> {
    let payload = fs::read_to_string(path)?;
    let records = from_str(&payload)?;

    tracing::debug!(path = ?path.display(), records = records.len(), "parsed transcription");

    Ok(records)
}
