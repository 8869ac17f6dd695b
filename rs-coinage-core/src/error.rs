//! Error types surfaced when examining sample words.

use thiserror::Error;

/// Errors produced while examining a sample.
///
/// Every variant is a per-word failure: examination is fail-fast, reports
/// the first offending word, and abandons the merge. The walkers and the
/// generator cannot fail; an exhausted generator is an ordinary terminal
/// state, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExamineError {
	/// The word falls outside the accepted length range.
	#[error("the word `{word}` is too short or too long")]
	InvalidLength {
		/// The offending word.
		word: String,
	},

	/// The word tokenized to fewer than two sounds.
	#[error("the word `{word}` holds fewer than two sounds")]
	TooFewSounds {
		/// The offending word.
		word: String,
	},

	/// Some position in the word matches no glyph in the active sound table.
	#[error("the word `{word}` contains a symbol outside the active sound table")]
	UnknownSymbol {
		/// The offending word.
		word: String,
	},
}
