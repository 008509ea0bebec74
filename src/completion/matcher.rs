//! Substitution-tolerant prefix matching against a corpus.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::completion::pattern::{binomial, miss_patterns};
use crate::corpus::Corpus;
use crate::error::{Result, StubError};

/// Words found by [`partial_matches`], with their corpus counts at the same
/// positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialMatches {
    pub words: Vec<String>,
    pub counts: Vec<u64>,
}

impl PartialMatches {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Lowercase a stub and split it into characters, rejecting empty input.
pub(crate) fn stub_chars(stub: &str) -> Result<Vec<char>> {
    let chars: Vec<char> = stub.to_lowercase().chars().collect();
    if chars.is_empty() {
        return Err(StubError::invalid_argument("stub must not be empty"));
    }
    Ok(chars)
}

/// Find corpus words whose prefix differs from `stub` in exactly the
/// positions of some `num_misses`-sized subset of stub positions.
///
/// Every subset of positions is replaced by wildcards in turn, and a word
/// matching any of the resulting patterns is included once. Results are
/// ranked by descending count, ties in ascending word order. When
/// `max_suggestions` is non-zero the ranked lists are truncated to it.
///
/// A `num_misses` larger than the stub yields no patterns and an empty
/// result.
///
/// The unbounded result for `k + 1` misses contains the unbounded result for
/// `k`, but a truncated result does not; callers widening the budget should
/// pass `max_suggestions = 0` and cap afterwards.
pub fn partial_matches(
    corpus: &Corpus,
    stub: &str,
    num_misses: usize,
    max_suggestions: usize,
) -> Result<PartialMatches> {
    let chars = stub_chars(stub)?;
    log::trace!(
        "Matching {} pattern(s) for stub '{}' with {} miss(es)",
        binomial(chars.len(), num_misses),
        stub,
        num_misses
    );

    let mut matched: AHashSet<&str> = AHashSet::new();
    for pattern in miss_patterns(&chars, num_misses) {
        let regex = pattern.compile()?;
        matched.extend(corpus.words().filter(|word| regex.is_match(word)));
    }

    let mut ranked: Vec<(&str, u64)> = matched
        .into_iter()
        .map(|word| (word, corpus.count(word)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    if max_suggestions > 0 {
        ranked.truncate(max_suggestions);
    }

    let (words, counts) = ranked
        .into_iter()
        .map(|(word, count)| (word.to_string(), count))
        .unzip();
    Ok(PartialMatches { words, counts })
}
