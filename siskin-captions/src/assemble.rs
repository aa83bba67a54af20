//! Single-pass caption assembly from recognizer records.

use crate::types::{Caption, Record};

/// Prefix marking recognizer-internal control tokens (time-tracking
/// markers such as `[_TT_50]`). Tokens carrying it never reach the output.
pub const CONTROL_PREFIX: &str = "[_TT";

/// Accumulates captions from a stream of recognizer records.
///
/// Holds the growable caption sequence and mutates only its tail: each
/// incoming token either extends the last caption or starts a new one. The
/// whitespace tests are ASCII-space only, matching the recognizer's token
/// boundary convention.
#[derive(Debug, Default)]
pub struct Assembler {
    captions: Vec<Caption>,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into the caption sequence.
    ///
    /// Records with empty aggregate text are skipped without visiting their
    /// tokens. A token with no leading space arriving while the last
    /// caption has no trailing space is a mid-word continuation: the
    /// record's aggregate text is appended to that caption and its end time
    /// moved to the record's `to` offset. Any other token starts a new
    /// caption spanning the record's offsets.
    pub fn push_record(&mut self, record: &Record) {
        if record.text.is_empty() {
            return;
        }

        for token in &record.tokens {
            if token.text.starts_with(CONTROL_PREFIX) {
                continue;
            }

            match self.captions.last_mut() {
                Some(last) if !token.text.starts_with(' ') && !last.text.ends_with(' ') => {
                    last.text.push_str(&record.text);
                    last.end_ms = record.offsets.to;
                }
                _ => self.captions.push(Caption {
                    text: token.text.clone(),
                    start_ms: record.offsets.from,
                    end_ms: record.offsets.to,
                }),
            }
        }
    }

    /// Number of captions accumulated so far.
    pub fn len(&self) -> usize {
        self.captions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.captions.is_empty()
    }

    /// Consume the assembler, returning the caption sequence.
    pub fn finish(self) -> Vec<Caption> {
        self.captions
    }
}

/// Assemble captions from an ordered sequence of recognizer records.
///
/// Pure and total: malformed offsets pass through untouched (see
/// [`crate::validate`] for the opt-in strict check).
pub fn assemble(records: &[Record]) -> Vec<Caption> {
    let mut assembler = Assembler::new();

    for record in records {
        assembler.push_record(record);
    }

    assembler.finish()
}
