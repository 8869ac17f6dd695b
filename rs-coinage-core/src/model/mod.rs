//! Top-level module for the word synthesis system.
//!
//! This crate derives a traits envelope from a group of sample words and
//! enumerates the synthetic words the envelope permits, including:
//! - Sound tables and the glyph tokenizer (`sounds`)
//! - The traits envelope with its validators and exhaustive walker (`Traits`)
//! - Internal session-tree bookkeeping (`tree`)
//! - A lazy, randomized, non-repeating word generator (`Generator`)

/// Sound tables, the longest-match tokenizer, and sound-sequence scans.
///
/// Hosts the default sound and vowel tables, overridable per traits
/// envelope.
pub mod sounds;

/// The traits envelope extracted from sample words.
///
/// Exposes examination and merging, partial/complete word validation, and
/// exhaustive enumeration of the defined word set.
pub mod traits;

/// Internal mirror of the visited portion of a virtual word tree.
///
/// Tracks sprouted candidates, visited paths, and pruned subtrees for the
/// generator. This module is not exposed publicly.
mod tree;

/// Lazy random word generation over a traits envelope.
///
/// Exposes a pull-style, never-repeating iterator with an injectable
/// random source.
pub mod generator;
