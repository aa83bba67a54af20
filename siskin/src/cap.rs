//! Cap subcommand - assemble captions from a whisper.cpp transcription to SRT.

use crate::srt;
use eyre::{Context, Result};
use siskin_captions::assemble::assemble;
use siskin_captions::{json, validate};
use std::path::PathBuf;

/// CLI arguments for caption generation.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Path to whisper.cpp JSON transcription
    pub path: PathBuf,

    /// Output SRT path (default: same as input with .srt extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print a head/tail preview of the subtitles to stdout
    #[arg(long)]
    pub preview: bool,

    /// Reject malformed record offsets instead of passing them through
    #[arg(long)]
    pub strict: bool,
}

/// Resolved configuration for caption generation.
#[derive(Debug)]
pub struct Config {
    pub path: PathBuf,
    pub output: Option<PathBuf>,
    pub preview: bool,
    pub strict: bool,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        Ok(Self {
            path: args.path,
            output: args.output,
            preview: args.preview,
            strict: args.strict,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    // Resolve output path
    let output = config
        .output
        .unwrap_or_else(|| config.path.with_extension("srt"));

    tracing::info!(
        input = ?config.path.display(),
        output = ?output.display(),
        "generating captions"
    );

    let records = json::from_file(&config.path)
        .wrap_err_with(|| format!("failed to read transcription: {:?}", config.path.display()))?;

    if config.strict {
        validate::check_offsets(&records).wrap_err("transcription rejected by strict mode")?;
    }

    let captions = assemble(&records);

    tracing::info!(captions = captions.len(), "captions assembled");

    let subtitles = srt::to_subtitles(&captions);

    tracing::info!(path = ?output.display(), "write srt file");

    std::fs::write(&output, srt::display_subtitles(&subtitles))
        .wrap_err_with(|| format!("failed to write srt: {:?}", output.display()))?;

    if config.preview {
        print!("{}", srt::preview_subtitles(&subtitles, 3, 3));
    }

    Ok(())
}
