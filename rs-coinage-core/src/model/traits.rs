use std::collections::HashSet;

use rand::rngs::ThreadRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::generator::Generator;
use super::sounds;
use super::sounds::Pair;
use crate::error::ExamineError;

/// Shortest sample word accepted by examination, in code points.
const MIN_WORD_LENGTH: usize = 2;

/// Longest sample word accepted by examination, in code points.
const MAX_WORD_LENGTH: usize = 32;

/// Rudimental characteristics of a word or group of words.
///
/// A traits envelope unequivocally defines an unordered set of synthetic
/// words that may be derived from it: the sound sequences that chain along
/// `pair_set` while staying inside the numeric bounds. The envelope is built
/// by examining sample words and is read-only afterwards; any number of
/// walkers and generators may share one envelope.
///
/// # Responsibilities
/// - Accumulate per-word features (counts, runs, sound and pair sets)
/// - Decide partial validity (may this prefix still grow into a word?)
/// - Decide complete validity (is this sequence a finished word?)
/// - Enumerate the full word set, or hand out a lazy random generator
///
/// # Invariants
/// After a successful examination of a non-empty sample:
/// - `1 <= min_n_sounds <= max_n_sounds`
/// - `min_n_vowels <= max_n_vowels <= max_n_sounds`
/// - `max_conseq_vowels <= max_n_vowels`
/// - `pair_set` is non-empty and both members of every pair are in `sound_set`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Traits {
	/// Minimum number of sounds. Zero means "not yet observed".
	pub min_n_sounds: usize,
	/// Maximum number of sounds.
	pub max_n_sounds: usize,
	/// Minimum number of vowels. Zero means "not yet observed".
	pub min_n_vowels: usize,
	/// Maximum number of vowels.
	pub max_n_vowels: usize,
	/// Maximum number of consecutive vowels.
	pub max_conseq_vowels: usize,
	/// Maximum number of consecutive consonants.
	pub max_conseq_consonants: usize,
	/// Set of sounds that occur in the examined words.
	pub sound_set: HashSet<String>,
	/// Set of adjacent sound pairs that occur in the examined words.
	pub pair_set: HashSet<Pair>,
	/// Replacement sound table used instead of the default table.
	/// Empty means "use the default".
	pub known_sounds: HashSet<String>,
	/// Replacement vowel table used instead of the default table.
	/// Empty means "use the default".
	pub known_vowels: HashSet<String>,
}

impl Traits {
	/// Creates a traits envelope by examining the given sample.
	///
	/// # Errors
	/// Returns the first per-word failure encountered; see [`Traits::examine`].
	pub fn new<S: AsRef<str>>(words: &[S]) -> Result<Self, ExamineError> {
		let mut traits = Self::default();
		traits.examine(words)?;
		Ok(traits)
	}

	/// Examines a group of words and merges their traits into self.
	///
	/// Examination is incremental: calling this on an envelope that already
	/// holds traits widens the envelope with the new words.
	///
	/// # Errors
	/// Fails fast on the first word that is rejected, leaving the envelope
	/// with the words merged so far:
	/// - [`ExamineError::InvalidLength`] for words outside 2..=32 code points
	/// - [`ExamineError::UnknownSymbol`] for words the active sound table
	///   can't express
	/// - [`ExamineError::TooFewSounds`] for words of fewer than two sounds
	pub fn examine<S: AsRef<str>>(&mut self, words: &[S]) -> Result<(), ExamineError> {
		for word in words {
			self.examine_word(word.as_ref())?;
		}
		Ok(())
	}

	/// Extracts the characteristics of one word and merges them into self.
	fn examine_word(&mut self, word: &str) -> Result<(), ExamineError> {
		let length = word.chars().count();
		if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&length) {
			return Err(ExamineError::InvalidLength { word: word.to_owned() });
		}

		let sounds = sounds::tokenize(word, self.sound_table())?;

		// A word shorter than one pair contributes nothing to the model.
		if sounds.len() < 2 {
			return Err(ExamineError::TooFewSounds { word: word.to_owned() });
		}

		// Merge min and max number of sounds. Zero minimum means the
		// envelope is fresh and is overwritten unconditionally.
		let n = sounds.len();
		if self.min_n_sounds == 0 || n < self.min_n_sounds {
			self.min_n_sounds = n;
		}
		if n > self.max_n_sounds {
			self.max_n_sounds = n;
		}

		// Merge min and max total number of vowels.
		let n = self.count_vowels(&sounds);
		if self.min_n_vowels == 0 || n < self.min_n_vowels {
			self.min_n_vowels = n;
		}
		if n > self.max_n_vowels {
			self.max_n_vowels = n;
		}

		// Merge the run bounds.
		let n = self.longest_vowel_run(&sounds);
		if n > self.max_conseq_vowels {
			self.max_conseq_vowels = n;
		}
		let n = self.longest_consonant_run(&sounds);
		if n > self.max_conseq_consonants {
			self.max_conseq_consonants = n;
		}

		// Merge the sound and pair sets.
		for sound in &sounds {
			self.sound_set.insert(sound.clone());
		}
		for pair in sounds::sound_pairs(&sounds) {
			self.pair_set.insert(pair);
		}

		// Reverse pairs are deliberately not added: doing so widens the word
		// set combinatorially. See `sounds::add_reverse_pairs`.

		Ok(())
	}

	/// The active sound table: the per-envelope override if one is
	/// installed, the default table otherwise.
	pub fn sound_table(&self) -> &HashSet<String> {
		if self.known_sounds.is_empty() {
			&sounds::KNOWN_SOUNDS
		} else {
			&self.known_sounds
		}
	}

	/// The active vowel table: the per-envelope override if one is
	/// installed, the default table otherwise.
	pub fn vowel_table(&self) -> &HashSet<String> {
		if self.known_vowels.is_empty() {
			&sounds::KNOWN_VOWELS
		} else {
			&self.known_vowels
		}
	}

	/// Checks whether the sequence still qualifies as a partial word, one
	/// that may yet grow into a complete word:
	/// - none of the upper numeric bounds is exceeded;
	/// - a single sound that opens some pair in `pair_set` is accepted
	///   early, before pair admissibility; a lone sound never fails this
	///   check on its own;
	/// - two or more sounds must chain as an admissible pair sequence.
	pub fn valid_part(&self, sounds: &[String]) -> bool {
		if self.count_vowels(sounds) > self.max_n_vowels
			|| self.longest_vowel_run(sounds) > self.max_conseq_vowels
			|| self.longest_consonant_run(sounds) > self.max_conseq_consonants
		{
			return false;
		}

		if sounds.len() == 1 && self.pair_set.iter().any(|pair| pair[0] == sounds[0]) {
			return true;
		}

		if sounds.len() > 1 && !self.admissible_pairs(sounds) {
			return false;
		}

		true
	}

	/// Checks whether the sequence qualifies as a complete word: a valid
	/// partial word whose sound and vowel counts also reach the lower
	/// bounds.
	pub fn valid_complete(&self, sounds: &[String]) -> bool {
		self.valid_part(sounds) && self.check_bounds(sounds)
	}

	/// Takes a valid partial word and checks the completion bounds: total
	/// vowels and total sounds within their ranges. Behaviour for sequences
	/// that are not valid partial words is undefined.
	pub(crate) fn check_bounds(&self, sounds: &[String]) -> bool {
		let n_vowels = self.count_vowels(sounds);
		if n_vowels < self.min_n_vowels || n_vowels > self.max_n_vowels {
			return false;
		}
		if sounds.len() < self.min_n_sounds || sounds.len() > self.max_n_sounds {
			return false;
		}
		true
	}

	/// Verifies the pair sequence of a candidate word:
	/// - membership of each pair in `pair_set` is guaranteed by the
	///   traversals, which only extend along known pairs, so it is not
	///   re-checked here;
	/// - a pair must not recur with exactly one pair between the
	///   occurrences (blocks "tata" in "ratatater");
	/// - a pair must not recur too often overall, checked with a local
	///   scan over the pairs preceding each occurrence.
	fn admissible_pairs(&self, sounds: &[String]) -> bool {
		if sounds.len() < 2 {
			return true;
		}

		// The last three pairs, up to and including the current one.
		let mut second_last: Option<(&str, &str)> = None;
		let mut last: Option<(&str, &str)> = None;
		let mut pair: Option<(&str, &str)> = None;

		let mut prev: &str = &sounds[0];
		for (index, current) in sounds.iter().enumerate().skip(1) {
			second_last = last;
			last = pair;
			pair = Some((prev, current));

			// Only meaningful from the third pair onward.
			if index >= 3 && second_last == pair {
				return false;
			}

			if sounds::count_pair(&sounds[..index], prev, current) > 2 {
				return false;
			}

			prev = current;
		}

		true
	}

	/// Generates the entire set of words defined by the envelope.
	///
	/// A pure traversal: no state is kept, and repeated calls return the
	/// same set. For anything beyond a handful of sample words the set
	/// grows combinatorially; prefer a [`Generator`] for sampling.
	pub fn words(&self) -> HashSet<String> {
		let mut words = HashSet::new();
		self.walk(&mut |sounds: &[String]| {
			words.insert(sounds.concat());
		});
		words
	}

	/// Depth-first traversal of the virtual tree defined by the envelope.
	///
	/// The tree is never materialized: first-level candidates are the
	/// distinct opening sounds of `pair_set`, and each node's children are
	/// the pair continuations of its last sound. Branch growth is capped by
	/// [`Traits::valid_part`]. The visitor is invoked once per distinct
	/// complete word.
	fn walk<F: FnMut(&[String])>(&self, visitor: &mut F) {
		let mut firsts: Vec<&String> = Vec::new();
		for pair in &self.pair_set {
			if !firsts.contains(&&pair[0]) {
				firsts.push(&pair[0]);
			}
		}

		let mut path: Vec<String> = Vec::with_capacity(self.max_n_sounds);
		for first in firsts {
			path.push(first.clone());
			self.walk_from(&mut path, visitor);
			path.pop();
		}
	}

	/// Recursive step of [`Traits::walk`]: extends the path along every
	/// pair that opens with its last sound.
	fn walk_from<F: FnMut(&[String])>(&self, path: &mut Vec<String>, visitor: &mut F) {
		let last = match path.last() {
			Some(last) => last.clone(),
			None => return,
		};

		for pair in &self.pair_set {
			if pair[0] != last {
				continue;
			}
			path.push(pair[1].clone());
			if self.valid_part(path) {
				if self.check_bounds(path) {
					visitor(path);
				}
				self.walk_from(path, visitor);
			}
			path.pop();
		}
	}

	/// Creates a lazy word generator over this envelope, driven by the
	/// thread-local random source.
	pub fn generator(&self) -> Generator<'_, ThreadRng> {
		Generator::new(self)
	}

	/// Creates a lazy word generator driven by the given random source.
	/// Useful for reproducible output.
	pub fn generator_with_rng<R: Rng>(&self, rng: R) -> Generator<'_, R> {
		Generator::with_rng(self, rng)
	}

	fn count_vowels(&self, sounds: &[String]) -> usize {
		sounds::count_in_set(sounds, self.vowel_table())
	}

	fn longest_vowel_run(&self, sounds: &[String]) -> usize {
		sounds::longest_vowel_run(sounds, self.vowel_table())
	}

	fn longest_consonant_run(&self, sounds: &[String]) -> usize {
		sounds::longest_consonant_run(sounds, self.vowel_table())
	}
}
