//! Core types for siskin-captions

use serde::{Deserialize, Serialize};

/// Sub-word unit inside a recognizer record.
///
/// Tokens carry no timing of their own; each inherits the time span of the
/// record that produced it. Whisper's per-token fields (`id`, `p`, token
/// offsets) are ignored on deserialization.
#[derive(Clone, Debug, Deserialize)]
pub struct Token {
    /// Recognized text fragment (may be empty, may start with a space or a
    /// control marker)
    pub text: String,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Time span of a record in milliseconds.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Offsets {
    /// Start time in milliseconds
    pub from: i64,
    /// End time in milliseconds
    pub to: i64,
}

impl Offsets {
    pub fn new(from: i64, to: i64) -> Self {
        Self { from, to }
    }
}

/// One unit of recognizer output: aggregate text, sub-word tokens, and a
/// single time span covering them all.
#[derive(Clone, Debug, Deserialize)]
pub struct Record {
    /// Full recognized text of the record
    pub text: String,
    /// Sub-word tokens in recognition order
    #[serde(default)]
    pub tokens: Vec<Token>,
    /// Time span shared by every token of this record
    pub offsets: Offsets,
}

impl Record {
    pub fn new(text: impl Into<String>, tokens: Vec<Token>, offsets: Offsets) -> Self {
        Self {
            text: text.into(),
            tokens,
            offsets,
        }
    }
}

/// Display-ready caption with its own time span.
///
/// Serializes with `startMs`/`endMs` field names, the shape the video
/// renderer consumes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Caption {
    /// Caption text, appended to while assembly is in progress
    pub text: String,
    /// Start time in milliseconds, fixed when the caption is created
    pub start_ms: i64,
    /// End time in milliseconds, moved forward each time the caption
    /// absorbs a continuation token
    pub end_ms: i64,
}

impl Caption {
    pub fn new(text: impl Into<String>, start_ms: i64, end_ms: i64) -> Self {
        Self {
            text: text.into(),
            start_ms,
            end_ms,
        }
    }
}
