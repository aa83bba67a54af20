//! Dump subcommand - print assembled captions as renderer JSON.

use eyre::{Context, Result};
use siskin_captions::assemble::assemble;
use siskin_captions::{json, validate};
use std::path::PathBuf;

/// CLI arguments for caption dumping.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Path to whisper.cpp JSON transcription
    pub path: PathBuf,

    /// Reject malformed record offsets instead of passing them through
    #[arg(long)]
    pub strict: bool,
}

/// Resolved configuration for caption dumping.
#[derive(Debug)]
pub struct Config {
    pub path: PathBuf,
    pub strict: bool,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        Ok(Self {
            path: args.path,
            strict: args.strict,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    let records = json::from_file(&config.path)
        .wrap_err_with(|| format!("failed to read transcription: {:?}", config.path.display()))?;

    if config.strict {
        validate::check_offsets(&records).wrap_err("transcription rejected by strict mode")?;
    }

    let captions = assemble(&records);

    tracing::info!(captions = captions.len(), "captions assembled");

    let payload = serde_json::to_string_pretty(&captions)?;
    println!("{payload}");

    Ok(())
}
