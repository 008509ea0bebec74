//! # stubcomplete
//!
//! Corpus-driven word completion that tolerates substituted characters.
//!
//! ## Features
//!
//! - Prefix matching with any number of assumed typos
//! - Iterative widening of the typo budget with per-word distances
//! - Distance-penalized probability estimates
//! - Next-letter distributions for predictive keyboards
//!
//! ```
//! use stubcomplete::completion::CompletionEngine;
//! use stubcomplete::corpus::Corpus;
//!
//! let corpus: Corpus = [("banana", 10), ("bank", 7), ("band", 3)].into_iter().collect();
//! let engine = CompletionEngine::new(corpus);
//! let suggestions = engine.suggest("bat").unwrap();
//! assert_eq!(suggestions[0].word, "banana");
//! ```

pub mod cli;
pub mod completion;
pub mod config;
pub mod corpus;
pub mod error;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
