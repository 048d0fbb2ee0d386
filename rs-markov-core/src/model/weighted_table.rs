use std::collections::HashMap;
use std::hash::Hash;

use rand::Rng;

use crate::error::ModelError;

/// A frequency-weighted sampling table.
///
/// Stores how many times each distinct value was inserted and draws
/// values with probability proportional to their occurrence count.
/// Conceptually, a draw is a uniform pick over the multiset of all
/// insertions.
///
/// ## Responsibilities:
/// - Accumulate occurrences during indexing
/// - Draw values using weighted random sampling
/// - Merge with another table (parallel indexing support)
///
/// ## Invariants
/// - Each stored occurrence count is strictly positive
/// - `total` always equals the sum of stored occurrence counts
#[derive(Clone, Debug)]
pub struct WeightedTable<T> {
	/// Occurrence counts indexed by value.
	/// The value represents how many times it was inserted.
	/// Example: { "cat" => 42, "dog" => 3 }
	weights: HashMap<T, usize>,
	/// Sum of all occurrence counts, kept in sync by `insert` and `merge`.
	total: usize,
}

impl<T> Default for WeightedTable<T> {
	fn default() -> Self {
		Self {
			weights: HashMap::new(),
			total: 0,
		}
	}
}

impl<T: Eq + Hash> WeightedTable<T> {
	/// Creates a new empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of `value`.
	///
	/// - If the value is already stored, its occurrence count is increased.
	/// - Otherwise, the value is stored with an initial count of 1.
	pub fn insert(&mut self, value: T) {
		*self.weights.entry(value).or_insert(0) += 1;
		self.total += 1;
	}

	/// Draws a value using weighted random sampling.
	///
	/// The probability of selecting a value is proportional to its
	/// occurrence count.
	///
	/// This method performs:
	/// - an O(n) scan over the stored values
	/// - a cumulative subtraction to select a bucket
	///
	/// # Errors
	/// Returns `EmptyDistribution` if the table holds no occurrences.
	pub fn draw(&self, rng: &mut impl Rng) -> Result<&T, ModelError> {
		if self.total == 0 {
			return Err(ModelError::EmptyDistribution);
		}

		// Randomly select an occurrence bucket
		let mut r = rng.random_range(0..self.total);

		let mut fallback = None;
		for (value, occurrence) in &self.weights {
			if r < *occurrence {
				return Ok(value);
			}
			r -= occurrence;
			fallback = Some(value);
		}

		// Fallback: should not happen, but kept for safety.
		fallback.ok_or(ModelError::EmptyDistribution)
	}

	/// Returns an iterator over the distinct stored values.
	pub fn keys(&self) -> impl Iterator<Item = &T> {
		self.weights.keys()
	}

	/// Returns the occurrence count recorded for `value`, 0 if absent.
	pub fn weight_of(&self, value: &T) -> usize {
		self.weights.get(value).copied().unwrap_or(0)
	}

	/// Returns the sum of all occurrence counts.
	pub fn total(&self) -> usize {
		self.total
	}

	/// Returns the number of distinct stored values.
	pub fn len(&self) -> usize {
		self.weights.len()
	}

	/// Returns `true` if the table holds no occurrences.
	pub fn is_empty(&self) -> bool {
		self.total == 0
	}

	/// Merges another table into this one.
	///
	/// Occurrence counts of matching values are summed; values only
	/// present in `other` are moved in as-is.
	///
	/// This method is intended for parallel indexing, where multiple
	/// partial tables are combined into a single one.
	pub fn merge(&mut self, other: Self) {
		self.total += other.total;
		for (value, occurrence) in other.weights {
			*self.weights.entry(value).or_insert(0) += occurrence;
		}
	}
}
