//! Typo-tolerant word completion.
//!
//! The building blocks, leaf first:
//!
//! - [`pattern`]: wildcard prefix patterns and miss combinations.
//! - [`matcher`]: corpus words reachable from a stub with a fixed number of
//!   substituted characters.
//! - [`widening`]: grows the miss budget until enough words are found,
//!   recording the distance of each.
//! - [`probability`]: turns counts and distances into a penalized
//!   distribution.
//! - [`letters`]: next-letter distributions for a stub.
//! - [`engine`]: a corpus plus configuration exposing all of the above.

pub mod engine;
pub mod letters;
pub mod matcher;
pub mod pattern;
pub mod probability;
pub mod widening;

pub use engine::*;
pub use letters::*;
pub use matcher::{PartialMatches, partial_matches};
pub use pattern::{Combinations, WildcardPattern};
pub use probability::*;
pub use widening::*;
