//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, StubArgs};
use crate::completion::Suggestion;
use crate::error::Result;

/// Result structure for the suggest command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResult {
    pub stub: String,
    pub suggestions: Vec<Suggestion>,
    pub duration_ms: u64,
}

/// Result structure for the matches command.
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchesResult {
    pub stub: String,
    pub misses: usize,
    pub words: Vec<String>,
    pub counts: Vec<u64>,
}

/// Result structure for the letters command.
#[derive(Debug, Serialize, Deserialize)]
pub struct LettersResult {
    pub stub: String,
    pub correct: Vec<(char, f64)>,
    pub incorrect: Vec<(char, f64)>,
}

/// Corpus statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorpusStats {
    pub unique_words: usize,
    pub total_count: u64,
    pub top_words: Vec<(String, u64)>,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn print_human(&self);
}

impl HumanOutput for SuggestResult {
    fn print_human(&self) {
        if self.suggestions.is_empty() {
            println!("No suggestions for '{}'", self.stub);
            return;
        }

        println!("Suggestions for '{}':", self.stub);
        println!("═══════════════");
        for (i, s) in self.suggestions.iter().enumerate() {
            println!(
                "{:>3}. {:<20} p={:.4}  count={}  distance={}",
                i + 1,
                s.word,
                s.probability,
                s.count,
                s.distance
            );
        }
        println!();
        println!("Search time: {}ms", self.duration_ms);
    }
}

impl HumanOutput for MatchesResult {
    fn print_human(&self) {
        println!(
            "Matches for '{}' with {} miss(es): {}",
            self.stub,
            self.misses,
            self.words.len()
        );
        println!("───────");
        for (word, count) in self.words.iter().zip(&self.counts) {
            println!("  {word} ({count})");
        }
    }
}

impl HumanOutput for LettersResult {
    fn print_human(&self) {
        println!("Next letter after '{}':", self.stub);
        println!("═══════════════");
        println!("Last character correct:");
        for (letter, p) in &self.correct {
            println!("  {letter}: {p:.4}");
        }
        println!("Last character mistyped:");
        for (letter, p) in &self.incorrect {
            println!("  {letter}: {p:.4}");
        }
    }
}

impl HumanOutput for CorpusStats {
    fn print_human(&self) {
        println!("Corpus Statistics:");
        println!("════════════════");
        println!("Unique words: {}", self.unique_words);
        println!("Total count: {}", self.total_count);
        if !self.top_words.is_empty() {
            println!();
            println!("Most frequent:");
            for (word, count) in &self.top_words {
                println!("  {word} ({count})");
            }
        }
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &StubArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            result.print_human();
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &StubArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
