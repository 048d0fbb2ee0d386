use std::collections::HashMap;
use std::sync::mpsc;
use std::thread;

use rand::Rng;
use rand::prelude::IteratorRandom;

use super::tokenizer;
use super::weighted_table::WeightedTable;
use crate::error::ModelError;

/// First-order word-adjacency index.
///
/// For every token observed in the corpus, the index stores the weighted
/// table of tokens observed immediately after it, plus one global table
/// of the words observed immediately before sentence-ending punctuation.
///
/// # Responsibilities
/// - Build successor and terminator tables from a corpus
/// - Sample seed tokens, successors and terminators
/// - Merge with another index (parallel indexing support)
///
/// # Invariants
/// - A token is a successor key iff it was observed at least once as the
///   first element of an adjacent pair
/// - All stored occurrence counts are >= 1
#[derive(Clone, Debug, Default)]
pub struct AdjacencyIndex {
	/// Mapping from a token to the weighted table of its observed successors.
	successors: HashMap<String, WeightedTable<String>>,
	/// Weighted table of the words observed right before `!`, `.`, `?` or `;`.
	terminators: WeightedTable<String>,
}

impl AdjacencyIndex {
	/// Creates a new empty index.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds an index from a corpus in a single pass.
	///
	/// # Behavior
	/// - Tokenizes the corpus and records every consecutive token pair in
	///   the successor tables.
	/// - Scans the raw text for sentence-closing words and records them in
	///   the terminator table.
	///
	/// Empty and single-token corpora yield an empty (but valid) index.
	pub fn from_text(text: &str) -> Self {
		let mut index = Self::new();
		index.add_tokens(&tokenizer::tokenize(text));
		index.add_terminators(text);

		log::debug!(
			"indexed {} tokens and {} terminator occurrences",
			index.token_count(),
			index.terminators.total()
		);

		index
	}

	/// Builds an index from a corpus using every available CPU.
	///
	/// Observably identical to [`AdjacencyIndex::from_text`]: same tokens,
	/// same occurrence counts.
	///
	/// # Behavior
	/// - Tokenizes the corpus once, then splits the token sequence into
	///   chunks (based on CPU cores * factor).
	/// - Spawns threads to build partial indexes for each chunk.
	/// - Merges all partial indexes sequentially.
	/// - Scans for sentence-closing words on the calling thread.
	///
	/// # Notes
	/// - Uses MPSC channels to collect partial indexes from threads.
	/// - Each chunk carries one token of lookahead, so pairs crossing a
	///   chunk boundary are counted exactly once.
	pub fn from_text_parallel(text: &str) -> Self {
		let tokens = tokenizer::tokenize(text);

		let mut index = Self::new();
		if tokens.len() >= 2 {
			let cpus = num_cpus::get();
			let factor = 8;
			let chunks = cpus * factor;
			let chunk_size = (tokens.len() + chunks - 1) / chunks;

			let (tx, rx) = mpsc::channel();
			for start in (0..tokens.len() - 1).step_by(chunk_size) {
				let tx = tx.clone();
				// One token of lookahead to keep the boundary pair
				let end = (start + chunk_size + 1).min(tokens.len());
				let chunk: Vec<String> = tokens[start..end].to_vec();

				thread::spawn(move || {
					let mut partial_index = AdjacencyIndex::new();
					partial_index.add_tokens(&chunk);
					tx.send(partial_index).expect("Failed to send from thread");
				});
			}
			drop(tx);

			for partial_index in rx.iter() {
				index.merge(partial_index);
			}
		}
		index.add_terminators(text);

		log::debug!(
			"indexed {} tokens and {} terminator occurrences in parallel",
			index.token_count(),
			index.terminators.total()
		);

		index
	}

	/// Records every consecutive pair of `tokens` in the successor tables.
	fn add_tokens(&mut self, tokens: &[String]) {
		for pair in tokens.windows(2) {
			let table = self
				.successors
				.entry(pair[0].clone())
				.or_insert_with(WeightedTable::new);
			table.insert(pair[1].clone());
		}
	}

	/// Records the sentence-closing words of the raw `text`.
	fn add_terminators(&mut self, text: &str) {
		for terminator in tokenizer::sentence_terminators(text) {
			self.terminators.insert(terminator);
		}
	}

	/// Returns a random indexed token, uniformly over distinct tokens
	/// (not weighted by frequency).
	///
	/// Useful for starting a generation sequence.
	///
	/// # Errors
	/// Returns `EmptyIndex` if no adjacent pair was ever indexed.
	pub fn random_token(&self, rng: &mut impl Rng) -> Result<&str, ModelError> {
		self.successors
			.keys()
			.choose(rng)
			.map(String::as_str)
			.ok_or(ModelError::EmptyIndex)
	}

	/// Draws a successor of `token` using weighted random sampling.
	///
	/// The probability of selecting a successor is proportional to how
	/// many times it was observed right after `token` in the corpus.
	///
	/// # Errors
	/// Returns `NoSuccessor` if `token` was never observed with a
	/// following token.
	pub fn random_successor(&self, token: &str, rng: &mut impl Rng) -> Result<&str, ModelError> {
		let table = self
			.successors
			.get(token)
			.ok_or_else(|| ModelError::NoSuccessor(token.to_owned()))?;
		Ok(table.draw(rng)?.as_str())
	}

	/// Draws a sentence-closing word using weighted random sampling.
	///
	/// # Errors
	/// Returns `EmptyIndex` if the corpus contained no sentence-ending
	/// punctuation.
	pub fn random_terminator(&self, rng: &mut impl Rng) -> Result<&str, ModelError> {
		if self.terminators.is_empty() {
			return Err(ModelError::EmptyIndex);
		}
		Ok(self.terminators.draw(rng)?.as_str())
	}

	/// Merges another index into this one.
	///
	/// Successor tables of matching tokens are merged; tokens only present
	/// in `other` are moved in as-is. Terminator tables are merged too.
	///
	/// This method is intended for parallel indexing, where multiple
	/// partial indexes are combined into a single one.
	pub fn merge(&mut self, other: Self) {
		for (token, table) in other.successors {
			if let Some(existing) = self.successors.get_mut(&token) {
				existing.merge(table);
			} else {
				self.successors.insert(token, table);
			}
		}
		self.terminators.merge(other.terminators);
	}

	/// Returns the successor table of `token`, if any.
	pub fn successors_of(&self, token: &str) -> Option<&WeightedTable<String>> {
		self.successors.get(token)
	}

	/// Returns the terminator table.
	pub fn terminators(&self) -> &WeightedTable<String> {
		&self.terminators
	}

	/// Returns an iterator over the distinct indexed tokens.
	pub fn tokens(&self) -> impl Iterator<Item = &str> {
		self.successors.keys().map(String::as_str)
	}

	/// Returns the number of distinct tokens with at least one successor.
	pub fn token_count(&self) -> usize {
		self.successors.len()
	}

	/// Returns `true` if no adjacent pair was ever indexed.
	pub fn is_empty(&self) -> bool {
		self.successors.is_empty()
	}
}
