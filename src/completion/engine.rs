//! Completion engine tying a corpus and configuration together.

use serde::{Deserialize, Serialize};

use crate::completion::letters::{LetterProbabilities, stub_letter_probabilities};
use crate::completion::probability::normalized_probabilities;
use crate::completion::widening::n_partial_matches_bounded;
use crate::config::CompletionConfig;
use crate::corpus::Corpus;
use crate::error::Result;

/// A completion for a stub.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Raw corpus count of the word.
    pub count: u64,
    /// Number of stub positions assumed mistyped to reach the word.
    pub distance: usize,
    /// Penalized, normalized probability among the returned suggestions.
    pub probability: f64,
}

/// Ranked, typo-tolerant completions over an owned corpus.
pub struct CompletionEngine {
    corpus: Corpus,
    config: CompletionConfig,
}

impl CompletionEngine {
    /// Create an engine with the default configuration.
    pub fn new(corpus: Corpus) -> Self {
        CompletionEngine {
            corpus,
            config: CompletionConfig::default(),
        }
    }

    /// Create an engine with a custom configuration, pruning corpus entries
    /// below `config.min_count`.
    pub fn with_config(mut corpus: Corpus, config: CompletionConfig) -> Result<Self> {
        config.validate()?;
        if config.min_count > 0 {
            corpus.prune_below(config.min_count);
        }
        Ok(CompletionEngine { corpus, config })
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Suggest `config.num_suggestions` completions for `stub`.
    pub fn suggest(&self, stub: &str) -> Result<Vec<Suggestion>> {
        self.suggest_n(stub, self.config.num_suggestions)
    }

    /// Suggest up to `num_suggestions` completions for `stub`, in discovery
    /// order (by distance, then count).
    pub fn suggest_n(&self, stub: &str, num_suggestions: usize) -> Result<Vec<Suggestion>> {
        let matches =
            n_partial_matches_bounded(&self.corpus, stub, num_suggestions, self.config.max_misses)?;
        if matches.is_empty() {
            return Ok(Vec::new());
        }

        let probabilities =
            normalized_probabilities(&matches.counts, &matches.distances, self.config.penalty)?;

        Ok(matches
            .words
            .into_iter()
            .zip(matches.counts)
            .zip(matches.distances)
            .zip(probabilities)
            .map(|(((word, count), distance), probability)| Suggestion {
                word,
                count,
                distance,
                probability,
            })
            .collect())
    }

    /// Next-letter distributions for `stub`.
    pub fn letter_probabilities(&self, stub: &str) -> Result<LetterProbabilities> {
        stub_letter_probabilities(&self.corpus, stub)
    }

    /// The `limit` most likely next letters, assuming the stub so far is
    /// typed correctly. Letters with zero probability are omitted.
    pub fn most_likely_next_letters(&self, stub: &str, limit: usize) -> Result<Vec<(char, f64)>> {
        let mut ranked = self.letter_probabilities(stub)?.ranked_correct();
        ranked.retain(|&(_, p)| p > 0.0);
        ranked.truncate(limit);
        Ok(ranked)
    }

    /// Check if a word is in the corpus.
    pub fn is_known(&self, word: &str) -> bool {
        self.corpus.contains(word)
    }
}
