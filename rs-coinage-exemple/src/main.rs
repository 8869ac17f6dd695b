use rs_coinage_core::model::traits::Traits;
use rs_coinage_core::{all_words, sample_words};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A small sample is enough; every word must be lowercase and expressible
    // with the active sound table
    let source = ["jasmine", "katie", "nariko", "karen"];

    // Examine the sample and build its traits envelope
    let traits = Traits::new(&source)?;
    println!("sound set: {:?}", traits.sound_set);
    println!(
        "sounds per word: {}-{}, vowels per word: {}-{}",
        traits.min_n_sounds, traits.max_n_sounds, traits.min_n_vowels, traits.max_n_vowels,
    );

    // Pull twelve random words from a lazy generator. Words never repeat
    // within one generator's lifetime
    for (index, word) in traits.generator().take(12).enumerate() {
        println!("generated word {}: {}", index + 1, word);
    }

    // Find out how many words can be derived from this sample in total.
    // A fresh generator draws from a fresh pool
    println!("total: {}", traits.generator().count());

    // The one-shot facade: the full set, or a random fixed-size selection
    let total = all_words(&source)?;
    let selection = sample_words(&source, 12)?;
    println!("facade total: {}, selection: {:?}", total.len(), selection);

    // Inputs that can't be expressed with the active sound table are
    // rejected up front
    match all_words(&["CAPITALS"]) {
        Ok(_) => println!("Should not happen"),
        Err(err) => println!("rejected as expected: {}", err),
    }
    match all_words(&["a"]) {
        Ok(_) => println!("Should not happen"),
        Err(err) => println!("rejected as expected: {}", err),
    }

    // A narrowed vowel table changes what counts as a vowel, and with it
    // the derived word set
    let mut narrowed = Traits {
        known_vowels: ["a", "e", "i"].iter().map(|s| s.to_string()).collect(),
        ..Traits::default()
    };
    narrowed.examine(&source)?;
    println!("narrowed-vowel total: {}", narrowed.generator().count());

    Ok(())
}
