use thiserror::Error;

/// Errors that can occur during index construction, sampling and
/// generation.
///
/// `NoSuccessor` is special: sentence generation treats it as a normal
/// early stop for the current walk, every other caller propagates it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
	/// Weighted draw attempted on a table with no recorded occurrences.
	#[error("empty distribution: nothing to draw from")]
	EmptyDistribution,

	/// The adjacency index holds no tokens (or no terminators) to sample.
	#[error("empty index: no tokens were indexed")]
	EmptyIndex,

	/// The token was never observed with a following token.
	#[error("no successor recorded for token '{0}'")]
	NoSuccessor(String),

	/// A count range violates `1 <= min <= max`.
	#[error("invalid count range: {min}..={max} (counts start at 1 and min must not exceed max)")]
	InvalidRange { min: usize, max: usize },
}
