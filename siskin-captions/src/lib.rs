//! siskin-captions: caption assembly from timestamped recognizer output.
//!
//! The recognizer (whisper.cpp) emits an ordered sequence of records, each
//! carrying its aggregate text, its sub-word tokens, and one millisecond
//! time span. This crate folds that stream into display-ready captions:
//! token by token it decides whether to extend the previous caption or
//! start a new one, and drops recognizer-internal control tokens.
//!
//! # Architecture
//!
//! - [`types`]: the record/token input shapes and the [`types::Caption`]
//!   output unit
//! - [`assemble`]: the single-pass caption assembler
//! - [`json`]: adapter for whisper.cpp JSON output files
//! - [`validate`]: opt-in strict offset checks
//!
//! # Quick Start
//!
//! ```ignore
//! use siskin_captions::assemble::assemble;
//! use siskin_captions::json;
//!
//! let records = json::from_file("clip.json".as_ref())?;
//! let captions = assemble(&records);
//! for caption in &captions {
//!     println!("{}ms..{}ms {}", caption.start_ms, caption.end_ms, caption.text);
//! }
//! ```

pub mod assemble;
pub mod error;
pub mod json;
pub mod types;
pub mod validate;
