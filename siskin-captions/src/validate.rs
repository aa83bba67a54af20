//! Opt-in strict validation of record offsets.
//!
//! The assembler passes malformed timing through untouched; callers that
//! would rather reject implausible spans run this check before assembling.

use crate::error::OffsetError;
use crate::types::{Offsets, Record};

/// Check that every record's span is ordered (`from <= to`) and that record
/// start times never decrease across the sequence.
pub fn check_offsets(records: &[Record]) -> Result<(), OffsetError> {
    let mut prev_from = i64::MIN;

    for (index, record) in records.iter().enumerate() {
        let Offsets { from, to } = record.offsets;

        if from > to {
            return Err(OffsetError::Reversed { index, from, to });
        }
        if from < prev_from {
            return Err(OffsetError::Decreasing {
                index,
                from,
                prev: prev_from,
            });
        }

        prev_from = from;
    }

    Ok(())
}
