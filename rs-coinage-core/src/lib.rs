//! Synthesis of novel words resembling a small sample.
//!
//! This crate examines a group of sample words, derives their
//! statistical-structural traits (sound inventory, adjacency pairs, length
//! and vowel-run bounds), and enumerates the synthetic words those traits
//! permit:
//! - Exhaustively, as a one-shot set ([`all_words`])
//! - As a fixed-size random sample ([`sample_words`])
//! - As a lazy, never-repeating stream
//!   ([`model::generator::Generator`])
//!
//! Example:
//!
//! ```
//! use rs_coinage_core::{all_words, sample_words};
//!
//! let source = ["jasmine", "katie", "nariko"];
//!
//! let sample = sample_words(&source, 12)?;
//! assert_eq!(sample.len(), 12);
//!
//! let total = all_words(&source)?;
//! assert!(sample.is_subset(&total));
//! # Ok::<(), rs_coinage_core::error::ExamineError>(())
//! ```

use std::collections::HashSet;

use error::ExamineError;
use model::traits::Traits;

/// Errors surfaced while examining sample words.
pub mod error;

/// Core word synthesis logic: sound tables, the traits envelope, and the
/// word generator.
pub mod model;

/// Takes a sample group of words, analyses their traits, and builds the set
/// of all synthetic words that may be derived from those traits.
///
/// This should only be used for very small samples: more than a handful of
/// sample words causes a combinatorial explosion, and the result can easily
/// reach hundreds of thousands of words for a dozen inputs.
///
/// # Errors
/// Returns the first per-word examination failure; see
/// [`model::traits::Traits::examine`].
pub fn all_words<S: AsRef<str>>(sample: &[S]) -> Result<HashSet<String>, ExamineError> {
	let traits = Traits::new(sample)?;
	Ok(traits.words())
}

/// Takes a sample group of words and a count limiter. Analyses the words
/// and builds a random selection of synthetic words that may be derived
/// from their traits, limited to the given count.
///
/// The selection is drawn spread across the full word set. If the set holds
/// fewer than `count` words, the whole set is returned.
///
/// # Errors
/// Returns the first per-word examination failure; see
/// [`model::traits::Traits::examine`].
pub fn sample_words<S: AsRef<str>>(sample: &[S], count: usize) -> Result<HashSet<String>, ExamineError> {
	let traits = Traits::new(sample)?;
	let mut words = HashSet::new();
	for word in traits.generator().take(count) {
		words.insert(word);
	}
	Ok(words)
}
