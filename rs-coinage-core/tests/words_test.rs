use std::collections::HashSet;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use rs_coinage_core::model::sounds::{sound_pairs, tokenize};
use rs_coinage_core::model::traits::Traits;
use rs_coinage_core::{all_words, sample_words};

const DEF_WORDS: [&str; 7] = [
	"go", "nebula", "aurora", "theron", "thorax", "deity", "quasar",
];

const MANY_WORDS: [&str; 11] = [
	"go", "nebula", "aurora", "theron", "thorax", "deity",
	"quasar", "graphene", "nanite", "orchestra", "eridium",
];

// Words with the following traits: 5-6 sounds; 2 vowels; 1 max consecutive
// vowel; 2 max consecutive consonants.
const LIMITED_WORDS: [&str; 7] = [
	"theron", "thorax", "rocket", "proton", "filler", "absurd", "paper",
];

const CHUNK: usize = 12;

fn count_vowels(traits: &Traits, sounds: &[String]) -> usize {
	sounds.iter().filter(|sound| traits.vowel_table().contains(sound.as_str())).count()
}

fn longest_run(traits: &Traits, sounds: &[String], vowels: bool) -> usize {
	let mut longest = 0;
	let mut count = 0;
	for sound in sounds {
		if traits.vowel_table().contains(sound.as_str()) == vowels {
			count += 1;
			longest = longest.max(count);
		} else {
			count = 0;
		}
	}
	longest
}

/// Checks every word of the set against the envelope it was derived from.
fn assert_words_match_traits(traits: &Traits, words: &HashSet<String>) {
	for word in words {
		let sounds = tokenize(word, traits.sound_table()).unwrap();

		assert!(sounds.len() >= traits.min_n_sounds, "`{word}` is too short");
		assert!(sounds.len() <= traits.max_n_sounds, "`{word}` is too long");

		let vowels = count_vowels(traits, &sounds);
		assert!(vowels >= traits.min_n_vowels, "`{word}` has too few vowels");
		assert!(vowels <= traits.max_n_vowels, "`{word}` has too many vowels");

		assert!(
			longest_run(traits, &sounds, true) <= traits.max_conseq_vowels,
			"`{word}` has too long a vowel run",
		);
		assert!(
			longest_run(traits, &sounds, false) <= traits.max_conseq_consonants,
			"`{word}` has too long a consonant run",
		);

		for sound in &sounds {
			assert!(traits.sound_set.contains(sound), "`{word}` uses a foreign sound");
		}
		for pair in sound_pairs(&sounds) {
			assert!(traits.pair_set.contains(&pair), "`{word}` uses a foreign pair");
		}
	}
}

#[test]
fn all_words_produces_a_substantial_set() {
	for source in [&DEF_WORDS[..], &MANY_WORDS[..]] {
		let words = all_words(source).unwrap();
		// The output for a handful of source words easily reaches thousands
		// of results; being very conservative here.
		assert!(words.len() >= 100, "unexpectedly small set: {}", words.len());
	}
}

#[test]
fn all_words_from_a_small_name_sample_exceeds_a_hundred() {
	let words = all_words(&["jasmine", "katie", "nariko"]).unwrap();
	assert!(words.len() > 100, "unexpectedly small set: {}", words.len());
}

#[test]
fn sample_words_honours_the_count() {
	let words = sample_words(&DEF_WORDS, CHUNK).unwrap();
	assert_eq!(words.len(), CHUNK);

	// A count beyond the pool returns the whole pool.
	let total = all_words(&["goblin", "smoke"]).unwrap();
	let words = sample_words(&["goblin", "smoke"], 1000).unwrap();
	assert_eq!(words, total);
}

#[test]
fn sample_words_is_a_subset_of_all_words() {
	let total = all_words(&["goblin", "smoke"]).unwrap();
	let sample = sample_words(&["goblin", "smoke"], 4).unwrap();
	assert_eq!(sample.len(), 4);
	assert!(sample.is_subset(&total));
}

#[test]
fn walker_words_match_their_traits() {
	let traits = Traits::new(&LIMITED_WORDS).unwrap();
	assert_eq!(
		(traits.min_n_sounds, traits.max_n_sounds),
		(5, 6),
	);
	assert_eq!(
		(traits.min_n_vowels, traits.max_n_vowels),
		(2, 2),
	);
	assert_eq!(traits.max_conseq_vowels, 1);
	assert_eq!(traits.max_conseq_consonants, 2);

	assert_words_match_traits(&traits, &traits.words());
}

#[test]
fn generator_words_match_their_traits() {
	let traits = Traits::new(&LIMITED_WORDS).unwrap();
	let words: HashSet<String> = traits.generator().collect();
	assert!(!words.is_empty());
	assert_words_match_traits(&traits, &words);
}

// Draws chunks until the pool is exhausted: no word may ever repeat, and
// the union of all chunks must be exactly the walker's set.
#[test]
fn generator_chunks_exhaust_the_walker_set() {
	let traits = Traits::new(&DEF_WORDS).unwrap();
	let reference = traits.words();

	let mut generator = traits.generator();
	let mut total: HashSet<String> = HashSet::new();
	loop {
		let chunk: Vec<String> = generator.by_ref().take(CHUNK).collect();
		if chunk.is_empty() {
			break;
		}
		for word in chunk {
			assert!(total.insert(word), "repeated word at total length {}", total.len());
		}
	}

	assert_eq!(total, reference);
}

// Verifies that generated words are spread across the word set. Rudimental
// and naive: sorts the full set, then counts how often all indices of one
// chunk fall within a tight range (a fifth of the set).
#[test]
fn generator_words_are_spread_across_the_set() {
	let traits = Traits::new(&DEF_WORDS).unwrap();

	let mut sorted: Vec<String> = traits.words().into_iter().collect();
	sorted.sort();

	let max_tight_groups = (sorted.len() / CHUNK / 10).max(1);

	let mut generator = traits.generator_with_rng(SmallRng::seed_from_u64(0xDECAF));
	let mut tight_groups = 0;
	loop {
		let chunk: Vec<String> = generator.by_ref().take(CHUNK).collect();
		if chunk.is_empty() {
			break;
		}
		let indices: Vec<usize> = chunk
			.iter()
			.map(|word| sorted.binary_search(word).unwrap())
			.collect();
		let spread = indices.iter().max().unwrap() - indices.iter().min().unwrap();
		if spread < sorted.len() / 5 {
			tight_groups += 1;
		}
	}

	assert!(
		tight_groups <= max_tight_groups,
		"for {} sorted words, {tight_groups} chunks were tightly grouped",
		sorted.len(),
	);
}

#[test]
fn custom_vowel_table_changes_the_word_set() {
	let mut narrowed = Traits {
		known_vowels: ["a", "e", "i"].iter().map(|s| s.to_string()).collect(),
		..Traits::default()
	};
	narrowed.examine(&DEF_WORDS).unwrap();

	let default_traits = Traits::new(&DEF_WORDS).unwrap();
	assert_ne!(narrowed.words(), default_traits.words());
}

#[test]
fn invalid_samples_error_through_the_facade() {
	let invalids = [
		"", "a", "CAPITALS", "Capitalised", "with space",
		"numbers134125", "łàtîñôñè", "кириллица",
	];
	for invalid in invalids {
		assert!(all_words(&[invalid]).is_err(), "expected `{invalid}` to be rejected");
		assert!(sample_words(&[invalid], 1).is_err(), "expected `{invalid}` to be rejected");
	}
}
