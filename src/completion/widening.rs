//! Iterative widening of the miss budget until enough suggestions are found.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::completion::matcher::{partial_matches, stub_chars};
use crate::corpus::Corpus;
use crate::error::Result;

/// Suggestions in discovery order, with the count and distance of each word
/// at the same position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidenedMatches {
    pub words: Vec<String>,
    pub counts: Vec<u64>,
    /// Smallest miss budget at which each word was found.
    pub distances: Vec<usize>,
}

impl WidenedMatches {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Collect up to `num_suggestions` distinct words, widening the miss budget
/// from 0 up to the stub length.
///
/// Returns fewer words than requested when the corpus runs out of matches.
pub fn n_partial_matches(
    corpus: &Corpus,
    stub: &str,
    num_suggestions: usize,
) -> Result<WidenedMatches> {
    n_partial_matches_bounded(corpus, stub, num_suggestions, None)
}

/// Same as [`n_partial_matches`], but never widens past `max_misses`.
pub fn n_partial_matches_bounded(
    corpus: &Corpus,
    stub: &str,
    num_suggestions: usize,
    max_misses: Option<usize>,
) -> Result<WidenedMatches> {
    let stub_len = stub_chars(stub)?.len();
    let max_budget = max_misses.map_or(stub_len, |limit| limit.min(stub_len));

    let mut words: Vec<String> = Vec::new();
    let mut distances: Vec<usize> = Vec::new();
    let mut seen: AHashSet<String> = AHashSet::new();

    for budget in 0..=max_budget {
        // Each budget is searched uncapped: a capped lower-budget search can
        // hide words that would otherwise receive a smaller distance.
        let found = partial_matches(corpus, stub, budget, 0)?;
        for word in found.words {
            if seen.insert(word.clone()) {
                words.push(word);
                distances.push(budget);
            }
        }
        log::debug!(
            "Miss budget {budget} for '{stub}': {} unique suggestion(s)",
            words.len()
        );

        if words.len() >= num_suggestions {
            words.truncate(num_suggestions);
            distances.truncate(num_suggestions);
            break;
        }
    }

    let counts = words.iter().map(|word| corpus.count(word)).collect();
    Ok(WidenedMatches {
        words,
        counts,
        distances,
    })
}
