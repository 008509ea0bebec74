//! Command line argument parsing for the stubcomplete CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// stubcomplete - typo-tolerant word completion from a frequency corpus
#[derive(Parser, Debug, Clone)]
#[command(name = "stubcomplete")]
#[command(about = "Typo-tolerant word completion from a frequency corpus")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct StubArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl StubArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Suggest ranked completions with probabilities
    Suggest(SuggestArgs),

    /// List corpus words within a fixed number of misses
    Matches(MatchesArgs),

    /// Show next-letter probabilities
    Letters(LettersArgs),

    /// Show corpus statistics
    Stats(StatsArgs),
}

/// Arguments for suggesting completions
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Corpus file (.json object or "word count" lines)
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Partial word to complete
    #[arg(value_name = "STUB")]
    pub stub: String,

    /// Number of suggestions (overrides config)
    #[arg(short = 'n', long)]
    pub num_suggestions: Option<usize>,

    /// Distance penalty in (0, 1] (overrides config)
    #[arg(short, long)]
    pub penalty: Option<f64>,

    /// Maximum number of mistyped characters to assume (overrides config)
    #[arg(short, long)]
    pub max_misses: Option<usize>,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "STUBCOMPLETE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Arguments for fixed-budget matching
#[derive(Parser, Debug, Clone)]
pub struct MatchesArgs {
    /// Corpus file (.json object or "word count" lines)
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Partial word to match
    #[arg(value_name = "STUB")]
    pub stub: String,

    /// Number of mistyped characters to assume
    #[arg(short, long, default_value = "0")]
    pub misses: usize,

    /// Maximum number of results (0 = unlimited)
    #[arg(short, long, default_value = "0")]
    pub limit: usize,
}

/// Arguments for next-letter probabilities
#[derive(Parser, Debug, Clone)]
pub struct LettersArgs {
    /// Corpus file (.json object or "word count" lines)
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Partial word typed so far
    #[arg(value_name = "STUB")]
    pub stub: String,

    /// Number of letters to show per distribution in human output
    #[arg(short, long, default_value = "5")]
    pub top: usize,
}

/// Arguments for corpus statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Corpus file (.json object or "word count" lines)
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Number of most frequent words to list
    #[arg(short, long, default_value = "10")]
    pub top: usize,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_suggest() {
        let args = StubArgs::try_parse_from([
            "stubcomplete",
            "-vv",
            "suggest",
            "corpus.txt",
            "ban",
            "-n",
            "3",
            "--penalty",
            "0.5",
        ])
        .unwrap();

        assert_eq!(args.verbosity(), 2);
        match args.command {
            Command::Suggest(suggest) => {
                assert_eq!(suggest.stub, "ban");
                assert_eq!(suggest.num_suggestions, Some(3));
                assert_eq!(suggest.penalty, Some(0.5));
                assert!(suggest.max_misses.is_none());
            }
            _ => panic!("Expected suggest command"),
        }
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = StubArgs::try_parse_from([
            "stubcomplete",
            "-v",
            "-q",
            "-f",
            "json",
            "matches",
            "corpus.json",
            "bat",
            "-m",
            "1",
        ])
        .unwrap();

        assert_eq!(args.verbosity(), 0);
        assert_eq!(args.output_format, OutputFormat::Json);
        match args.command {
            Command::Matches(matches) => {
                assert_eq!(matches.misses, 1);
                assert_eq!(matches.limit, 0);
            }
            _ => panic!("Expected matches command"),
        }
    }
}
