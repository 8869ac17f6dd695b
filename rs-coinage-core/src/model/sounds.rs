use std::collections::HashSet;
use std::sync::LazyLock;

use crate::error::ExamineError;

/// An ordered pair of adjacent sounds, as observed in some word.
///
/// Pairs are the adjacency alphabet of the model: a candidate word may only
/// chain sounds along pairs that were seen in the sample.
pub type Pair = [String; 2];

/// Sound glyphs and digraphs in common English use. This doesn't represent
/// all common phonemes.
pub static KNOWN_SOUNDS: LazyLock<HashSet<String>> = LazyLock::new(|| {
	[
		// Digraphs
		"ae", "ch", "ng", "ph", "sh", "th", "zh",
		// ISO basic Latin monographs
		"a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m",
		"n", "o", "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z",
	]
	.into_iter()
	.map(str::to_owned)
	.collect()
});

/// Vowel glyphs and digraphs in common English use.
pub static KNOWN_VOWELS: LazyLock<HashSet<String>> = LazyLock::new(|| {
	[
		// Digraphs
		"ae",
		// ISO basic Latin monographs
		"a", "e", "i", "o", "u", "y",
	]
	.into_iter()
	.map(str::to_owned)
	.collect()
});

/// Splits a word into a sequence of known sound glyphs.
///
/// Scans left to right with a longest-match rule: a known digraph (two code
/// points) always beats a known monograph at the same position. The given
/// sound table is authoritative; there is no fallback to the defaults.
///
/// # Errors
/// Returns `ExamineError::UnknownSymbol` if some position matches neither a
/// known digraph nor a known monograph.
pub fn tokenize(word: &str, known: &HashSet<String>) -> Result<Vec<String>, ExamineError> {
	let chars: Vec<char> = word.chars().collect();
	let mut sounds = Vec::with_capacity(chars.len());

	let mut index = 0;
	while index < chars.len() {
		// Check for a known digraph.
		if index + 2 <= chars.len() {
			let digraph: String = chars[index..index + 2].iter().collect();
			if known.contains(&digraph) {
				sounds.push(digraph);
				index += 2;
				continue;
			}
		}
		// Check for a known monograph.
		let monograph = chars[index].to_string();
		if known.contains(&monograph) {
			sounds.push(monograph);
			index += 1;
			continue;
		}
		// Otherwise the word can't be expressed with the active table.
		return Err(ExamineError::UnknownSymbol { word: word.to_owned() });
	}

	Ok(sounds)
}

/// Returns the set of adjacent pairs that occur in the given sound sequence.
pub fn sound_pairs(sounds: &[String]) -> HashSet<Pair> {
	let mut pairs = HashSet::new();
	for window in sounds.windows(2) {
		pairs.insert([window[0].clone(), window[1].clone()]);
	}
	pairs
}

/// Adds the reverse of every pair in the set.
///
/// Dormant: enabling this for extraction widens the word set so much that
/// exhaustive enumeration becomes impractical for all but the smallest
/// samples. Wiring it up would need an opt-in toggle on the traits envelope.
#[allow(dead_code)]
pub(crate) fn add_reverse_pairs(pairs: &mut HashSet<Pair>) {
	let reversed: Vec<Pair> = pairs.iter().map(|pair| [pair[1].clone(), pair[0].clone()]).collect();
	for pair in reversed {
		pairs.insert(pair);
	}
}

/// Counts how many sounds in the sequence occur in the given set.
pub(crate) fn count_in_set(sounds: &[String], set: &HashSet<String>) -> usize {
	sounds.iter().filter(|sound| set.contains(sound.as_str())).count()
}

/// Returns the longest run of consecutive sounds that are members of the
/// given vowel set.
pub(crate) fn longest_vowel_run(sounds: &[String], vowels: &HashSet<String>) -> usize {
	let mut longest = 0;
	let mut count = 0;
	for sound in sounds {
		if vowels.contains(sound.as_str()) {
			count += 1;
			if count > longest {
				longest = count;
			}
		} else {
			count = 0;
		}
	}
	longest
}

/// Returns the longest run of consecutive sounds that are not members of the
/// given vowel set.
pub(crate) fn longest_consonant_run(sounds: &[String], vowels: &HashSet<String>) -> usize {
	let mut longest = 0;
	let mut count = 0;
	for sound in sounds {
		if vowels.contains(sound.as_str()) {
			count = 0;
		} else {
			count += 1;
			if count > longest {
				longest = count;
			}
		}
	}
	longest
}

/// Counts the occurrences of the given adjacent pair in the sequence.
///
/// A plain linear scan. For the short sequences this crate deals in, it
/// beats maintaining a counter map by a wide margin.
pub(crate) fn count_pair(sounds: &[String], prev: &str, current: &str) -> usize {
	let mut count = 0;
	for window in sounds.windows(2) {
		if window[0] == prev && window[1] == current {
			count += 1;
		}
	}
	count
}
