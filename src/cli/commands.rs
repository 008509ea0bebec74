//! Command implementations for the stubcomplete CLI.

use std::path::Path;
use std::time::Instant;

use anyhow::Context;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::completion::{CompletionEngine, partial_matches};
use crate::config::CompletionConfig;
use crate::corpus::Corpus;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: StubArgs) -> Result<()> {
    match &args.command {
        Command::Suggest(suggest_args) => suggest_completions(suggest_args, &args),
        Command::Matches(matches_args) => list_matches(matches_args, &args),
        Command::Letters(letters_args) => show_letters(letters_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
    }
}

fn load_corpus(path: &Path) -> Result<Corpus> {
    log::info!("Loading corpus from: {}", path.display());
    let corpus = Corpus::load(path)
        .with_context(|| format!("failed to load corpus from {}", path.display()))?;
    log::info!(
        "Loaded {} words (total count {})",
        corpus.len(),
        corpus.total_count()
    );
    Ok(corpus)
}

/// Suggest completions for a stub.
fn suggest_completions(args: &SuggestArgs, cli_args: &StubArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading config from: {}", path.display());
            CompletionConfig::load_from_file(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?
        }
        None => CompletionConfig::default(),
    };
    if let Some(n) = args.num_suggestions {
        config.num_suggestions = n;
    }
    if let Some(penalty) = args.penalty {
        config.penalty = penalty;
    }
    if args.max_misses.is_some() {
        config.max_misses = args.max_misses;
    }

    let engine = CompletionEngine::with_config(load_corpus(&args.corpus)?, config)?;

    let start_time = Instant::now();
    let suggestions = engine.suggest(&args.stub)?;
    let duration = start_time.elapsed();

    output_result(
        &SuggestResult {
            stub: args.stub.clone(),
            suggestions,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// List words within a fixed miss budget.
fn list_matches(args: &MatchesArgs, cli_args: &StubArgs) -> Result<()> {
    let corpus = load_corpus(&args.corpus)?;
    let found = partial_matches(&corpus, &args.stub, args.misses, args.limit)?;

    output_result(
        &MatchesResult {
            stub: args.stub.clone(),
            misses: args.misses,
            words: found.words,
            counts: found.counts,
        },
        cli_args,
    )
}

/// Show next-letter distributions.
fn show_letters(args: &LettersArgs, cli_args: &StubArgs) -> Result<()> {
    let engine = CompletionEngine::new(load_corpus(&args.corpus)?);
    let probs = engine.letter_probabilities(&args.stub)?;

    let (mut correct, mut incorrect) = (probs.ranked_correct(), probs.ranked_incorrect());
    if cli_args.output_format == OutputFormat::Human {
        correct.truncate(args.top);
        incorrect.truncate(args.top);
    }

    output_result(
        &LettersResult {
            stub: args.stub.clone(),
            correct,
            incorrect,
        },
        cli_args,
    )
}

/// Show corpus statistics.
fn show_stats(args: &StatsArgs, cli_args: &StubArgs) -> Result<()> {
    let corpus = load_corpus(&args.corpus)?;

    output_result(
        &CorpusStats {
            unique_words: corpus.len(),
            total_count: corpus.total_count(),
            top_words: corpus.most_frequent(args.top),
        },
        cli_args,
    )
}
