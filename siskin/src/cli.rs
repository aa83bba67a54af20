//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use eyre::Result;

#[derive(Debug, Parser)]
#[command(name = "sis")]
#[command(about = "Assemble display captions from whisper.cpp transcriptions")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate SRT subtitles from a whisper.cpp JSON transcription
    Cap(crate::cap::Args),

    /// Print assembled captions as JSON for the renderer
    Dump(crate::dump::Args),
}

/// Execute CLI command - separated for testing.
pub fn run(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Cap(args) => crate::cap::execute(args.try_into()?),
        Commands::Dump(args) => crate::dump::execute(args.try_into()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cap_command() {
        let cli = Cli::parse_from(["sis", "cap", "clip.json"]);

        match &cli.command {
            Commands::Cap(crate::cap::Args {
                path,
                output: None,
                preview: false,
                strict: false,
            }) if path.to_str() == Some("clip.json") => {}
            _ => panic!("unexpected command: {:?}", cli.command),
        }
    }

    #[test]
    fn parses_cap_with_output() {
        let cli = Cli::parse_from(["sis", "cap", "clip.json", "-o", "clip.srt"]);

        match &cli.command {
            Commands::Cap(crate::cap::Args {
                path,
                output: Some(output),
                preview: false,
                strict: false,
            }) if path.to_str() == Some("clip.json") && output.to_str() == Some("clip.srt") => {}
            _ => panic!("unexpected command: {:?}", cli.command),
        }
    }

    #[test]
    fn parses_cap_flags() {
        let cli = Cli::parse_from(["sis", "cap", "clip.json", "--preview", "--strict"]);

        match &cli.command {
            Commands::Cap(crate::cap::Args {
                preview: true,
                strict: true,
                ..
            }) => {}
            _ => panic!("unexpected command: {:?}", cli.command),
        }
    }

    #[test]
    fn parses_dump_command() {
        let cli = Cli::parse_from(["sis", "dump", "clip.json"]);

        match &cli.command {
            Commands::Dump(crate::dump::Args {
                path,
                strict: false,
            }) if path.to_str() == Some("clip.json") => {}
            _ => panic!("unexpected command: {:?}", cli.command),
        }
    }
}
