//! Next-letter distributions for a stub.

use serde::{Deserialize, Serialize};

use crate::completion::matcher::stub_chars;
use crate::completion::pattern::WildcardPattern;
use crate::completion::probability::normalize;
use crate::corpus::Corpus;
use crate::error::Result;

/// Number of letters in each distribution (`a` through `z`).
pub const ALPHABET_SIZE: usize = 26;

/// Probability of each letter `a..=z` being typed next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterProbabilities {
    /// Assuming the last typed character is correct.
    pub correct: [f64; ALPHABET_SIZE],
    /// Assuming the last typed character was itself a miss.
    pub incorrect: [f64; ALPHABET_SIZE],
}

impl LetterProbabilities {
    /// Letter at a distribution index.
    pub fn letter(index: usize) -> char {
        char::from(b'a' + (index % ALPHABET_SIZE) as u8)
    }

    /// `correct` as `(letter, probability)` pairs, most likely first.
    pub fn ranked_correct(&self) -> Vec<(char, f64)> {
        rank(&self.correct)
    }

    /// `incorrect` as `(letter, probability)` pairs, most likely first.
    pub fn ranked_incorrect(&self) -> Vec<(char, f64)> {
        rank(&self.incorrect)
    }
}

fn rank(probs: &[f64; ALPHABET_SIZE]) -> Vec<(char, f64)> {
    let mut ranked: Vec<(char, f64)> = probs
        .iter()
        .enumerate()
        .map(|(index, &p)| (LetterProbabilities::letter(index), p))
        .collect();
    // Stable sort keeps alphabetical order among equal probabilities.
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

/// Estimate which letter follows `stub`, counting corpus words (not their
/// frequencies) that continue each pattern.
///
/// The `correct` pattern keeps the last stub character and wildcards every
/// earlier position; the `incorrect` pattern wildcards the whole stub. Each
/// is extended by the candidate letter.
///
/// The result is all or nothing: if either variant has no matching words the
/// call fails with [`StubError::DegenerateDistribution`](crate::error::StubError),
/// even when the other variant could be normalized.
pub fn stub_letter_probabilities(corpus: &Corpus, stub: &str) -> Result<LetterProbabilities> {
    let chars = stub_chars(stub)?;
    let len = chars.len();
    let last = chars[len - 1];

    let mut correct_counts = vec![0.0; ALPHABET_SIZE];
    let mut incorrect_counts = vec![0.0; ALPHABET_SIZE];

    for (index, letter) in ('a'..='z').enumerate() {
        let mut correct = WildcardPattern::wildcards(len - 1);
        correct.push(last);
        correct.push(letter);

        let mut incorrect = WildcardPattern::wildcards(len);
        incorrect.push(letter);

        let correct = correct.compile()?;
        let incorrect = incorrect.compile()?;
        correct_counts[index] = corpus.words().filter(|w| correct.is_match(w)).count() as f64;
        incorrect_counts[index] = corpus.words().filter(|w| incorrect.is_match(w)).count() as f64;
    }

    Ok(LetterProbabilities {
        correct: to_array(normalize(correct_counts)?),
        incorrect: to_array(normalize(incorrect_counts)?),
    })
}

fn to_array(values: Vec<f64>) -> [f64; ALPHABET_SIZE] {
    let mut array = [0.0; ALPHABET_SIZE];
    array.copy_from_slice(&values);
    array
}
