use std::ops::ControlFlow;

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

use super::traits::Traits;
use super::tree::{NodeId, Tree};

/// Lazy generator of the words defined by a [`Traits`] envelope.
///
/// Pulls one word per call, never repeats, and spreads successive words
/// across the whole word set instead of clustering around neighbouring
/// branches. Implements [`Iterator`]; the stream ends when the set is
/// exhausted.
///
/// # Responsibilities
/// - Walk the envelope's virtual tree lazily, in randomized child order
/// - Mirror the visited portion in a session tree, so repeated pulls skip
///   rejected and consumed subtrees
/// - Emit random subpaths of discovered branches, so short words surface
///   early instead of leaf-first
///
/// # Notes
/// - The session tree is mutated on every pull; a generator is therefore
///   single-threaded. Any number of generators may share one envelope.
/// - Two generators over equivalent envelopes are fully independent.
/// - The random source is injectable via [`Generator::with_rng`]; the
///   default is the thread-local source.
#[derive(Debug)]
pub struct Generator<'a, R: Rng = ThreadRng> {
	traits: &'a Traits,
	tree: Tree,
	rng: R,
}

impl<'a> Generator<'a, ThreadRng> {
	/// Creates a generator over the envelope, driven by the thread-local
	/// random source.
	pub fn new(traits: &'a Traits) -> Self {
		Self::with_rng(traits, rand::rng())
	}
}

impl<'a, R: Rng> Generator<'a, R> {
	/// Creates a generator over the envelope, driven by the given random
	/// source. A seeded source makes the output sequence reproducible.
	pub fn with_rng(traits: &'a Traits, rng: R) -> Self {
		Self {
			traits,
			tree: Tree::new(),
			rng,
		}
	}

	/// One trip down the tree: walks until one new word has been emitted,
	/// then unwinds. Returns `None` once the word set is exhausted.
	fn pull(&mut self) -> Option<String> {
		let mut path = Vec::with_capacity(self.traits.max_n_sounds);
		match self.walk(Tree::ROOT, &mut path) {
			ControlFlow::Break(word) => Some(word),
			ControlFlow::Continue(()) => None,
		}
	}

	/// Post-order traversal of the virtual tree under the given node,
	/// mirrored in the session tree.
	///
	/// Children are offered in shuffled order. A child that fails the
	/// partial check is pruned outright. Otherwise its subtree is walked
	/// first; a child that comes back unvisited still has words to give and
	/// is handed to [`Generator::emit`]. A child survived by neither is
	/// exhausted and pruned, so later trips skip it.
	///
	/// A `Break` carries a freshly emitted word up through the recursion
	/// without touching the pruning scheduled after it; everything recorded
	/// before the emission stays in the session tree.
	fn walk(&mut self, node: NodeId, path: &mut Vec<String>) -> ControlFlow<String> {
		if !self.tree.sprouted(node) {
			let candidates = self.sprout(path);
			self.tree.adopt(node, candidates);
		}

		let mut sounds = self.tree.candidates(node);
		sounds.shuffle(&mut self.rng);

		for sound in sounds {
			path.push(sound.clone());

			if !self.traits.valid_part(path) {
				path.pop();
				self.tree.prune(node, &sound);
				continue;
			}

			let child = self.tree.descend(node, &sound);

			let flow = self.walk(child, path);
			if flow.is_break() {
				return flow;
			}

			if !self.tree.visited(child) {
				let flow = self.emit(path);
				if flow.is_break() {
					return flow;
				}
			}

			self.tree.prune(node, &sound);
			path.pop();
		}

		ControlFlow::Continue(())
	}

	/// Random-subpath pass over an exhausted branch: offers every prefix of
	/// length two or more in shuffled order, marks each offered node
	/// visited exactly once, and breaks with the first one that qualifies
	/// as a complete word. Emitting prefixes in random length order is what
	/// spreads output across the word set instead of biasing it toward
	/// leaves.
	fn emit(&mut self, path: &[String]) -> ControlFlow<String> {
		let mut lengths: Vec<usize> = (2..=path.len()).collect();
		lengths.shuffle(&mut self.rng);

		for length in lengths {
			let part = &path[..length];
			let node = self.tree.node_at(part);
			if self.tree.visited(node) {
				continue;
			}
			self.tree.mark_visited(node);
			if self.traits.check_bounds(part) {
				return ControlFlow::Break(part.concat());
			}
		}

		ControlFlow::Continue(())
	}

	/// Child candidates for the node at the given path: the distinct
	/// opening sounds of the pair set at the root, the pair continuations
	/// of the last sound everywhere else.
	fn sprout(&self, path: &[String]) -> Vec<String> {
		let mut candidates = Vec::new();
		match path.last() {
			None => {
				for pair in &self.traits.pair_set {
					if !candidates.contains(&pair[0]) {
						candidates.push(pair[0].clone());
					}
				}
			}
			Some(last) => {
				for pair in &self.traits.pair_set {
					if &pair[0] == last {
						candidates.push(pair[1].clone());
					}
				}
			}
		}
		candidates
	}
}

impl<'a, R: Rng> Iterator for Generator<'a, R> {
	type Item = String;

	fn next(&mut self) -> Option<String> {
		self.pull()
	}
}
