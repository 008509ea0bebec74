//! Wildcard prefix patterns and the miss combinations that generate them.
//!
//! A pattern is a sequence of slots, each either a literal character or a
//! single-character wildcard. Patterns are compiled to anchored regular
//! expressions, so a word matches when its leading characters fit the slots;
//! anything after the last slot is unconstrained.

use std::fmt;

use regex::Regex;

use crate::error::Result;

/// Character used when rendering a wildcard slot.
pub const WILDCARD: char = '.';

/// A prefix pattern made of literal and wildcard slots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WildcardPattern {
    slots: Vec<Option<char>>,
}

impl WildcardPattern {
    /// Create an empty pattern.
    pub fn new() -> Self {
        WildcardPattern::default()
    }

    /// Create a pattern of `len` wildcard slots.
    pub fn wildcards(len: usize) -> Self {
        WildcardPattern {
            slots: vec![None; len],
        }
    }

    /// Create a pattern from `chars`, replacing the slots at `positions` with
    /// wildcards. Positions past the end are ignored.
    pub fn with_misses(chars: &[char], positions: &[usize]) -> Self {
        let mut slots: Vec<Option<char>> = chars.iter().copied().map(Some).collect();
        for &pos in positions {
            if let Some(slot) = slots.get_mut(pos) {
                *slot = None;
            }
        }
        WildcardPattern { slots }
    }

    /// Append a literal slot.
    pub fn push(&mut self, ch: char) {
        self.slots.push(Some(ch));
    }

    /// Append a wildcard slot.
    pub fn push_wildcard(&mut self) {
        self.slots.push(None);
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of wildcard slots.
    pub fn wildcard_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    /// Regex source anchored at the start of the candidate.
    pub fn to_regex_source(&self) -> String {
        let mut source = String::from("^(?s)");
        let mut buf = [0u8; 4];
        for slot in &self.slots {
            match slot {
                Some(ch) => source.push_str(&regex::escape(ch.encode_utf8(&mut buf))),
                None => source.push('.'),
            }
        }
        source
    }

    /// Compile into a prefix-anchored regex.
    pub fn compile(&self) -> Result<Regex> {
        Ok(Regex::new(&self.to_regex_source())?)
    }
}

impl fmt::Display for WildcardPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{}", slot.unwrap_or(WILDCARD))?;
        }
        Ok(())
    }
}

/// Iterator over all `k`-element subsets of `0..n`, in lexicographic order.
///
/// Yields nothing when `k > n` and a single empty subset when `k == 0`.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    exhausted: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Combinations {
            n,
            indices: (0..k).collect(),
            exhausted: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let current = self.indices.clone();
        let k = self.indices.len();

        // Advance the rightmost index that still has room.
        let mut i = k;
        loop {
            if i == 0 {
                self.exhausted = true;
                break;
            }
            i -= 1;
            if self.indices[i] < self.n - k + i {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }

        Some(current)
    }
}

/// Binomial coefficient C(n, k), saturating on overflow.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: usize = 1;
    for i in 0..k {
        result = result.saturating_mul(n - i) / (i + 1);
    }
    result
}

/// Every pattern obtained by replacing exactly `num_misses` positions of
/// `chars` with wildcards.
pub fn miss_patterns(chars: &[char], num_misses: usize) -> impl Iterator<Item = WildcardPattern> {
    Combinations::new(chars.len(), num_misses)
        .map(move |positions| WildcardPattern::with_misses(chars, &positions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combinations_count_and_order() {
        let subsets: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
        assert_eq!(
            subsets,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
            ]
        );
        assert_eq!(subsets.len(), binomial(4, 2));
    }

    #[test]
    fn test_combinations_edges() {
        assert_eq!(Combinations::new(3, 0).collect::<Vec<_>>(), vec![Vec::<usize>::new()]);
        assert_eq!(Combinations::new(3, 3).collect::<Vec<_>>(), vec![vec![0, 1, 2]]);
        assert_eq!(Combinations::new(3, 4).count(), 0);
        assert_eq!(Combinations::new(0, 0).count(), 1);
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(5, 0), 1);
        assert_eq!(binomial(5, 2), 10);
        assert_eq!(binomial(10, 7), 120);
        assert_eq!(binomial(2, 3), 0);
    }

    #[test]
    fn test_pattern_display() {
        let chars: Vec<char> = "bat".chars().collect();
        let pattern = WildcardPattern::with_misses(&chars, &[2]);
        assert_eq!(pattern.to_string(), "ba.");
        assert_eq!(pattern.wildcard_count(), 1);

        let pattern = WildcardPattern::with_misses(&chars, &[0, 9]);
        assert_eq!(pattern.to_string(), ".at");
    }

    #[test]
    fn test_prefix_matching() {
        let chars: Vec<char> = "bat".chars().collect();
        let regex = WildcardPattern::with_misses(&chars, &[2]).compile().unwrap();

        assert!(regex.is_match("bank"));
        assert!(regex.is_match("bat"));
        assert!(!regex.is_match("ba"));
        assert!(!regex.is_match("abat"));
    }

    #[test]
    fn test_literal_metacharacters_are_escaped() {
        let chars: Vec<char> = "a+b".chars().collect();
        let regex = WildcardPattern::with_misses(&chars, &[]).compile().unwrap();

        assert!(regex.is_match("a+bc"));
        assert!(!regex.is_match("aab"));
    }

    #[test]
    fn test_miss_patterns() {
        let chars: Vec<char> = "ban".chars().collect();
        let patterns: Vec<String> = miss_patterns(&chars, 1).map(|p| p.to_string()).collect();
        assert_eq!(patterns, vec![".an", "b.n", "ba."]);
    }
}
