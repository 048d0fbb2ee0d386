use rand::Rng;

use crate::error::ModelError;

/// Strategy used to select the opening word of each generated sentence.
///
/// # Variants
/// - `Random`: pick a random indexed token, uniformly over distinct
///   tokens.
/// - `Custom(String)`: use the provided word, lower-cased, to open every
///   sentence. An empty or whitespace-only word behaves like `Random`.
#[derive(Clone, Debug, PartialEq)]
pub enum StartSeed {
	Random,
	Custom(String),
}

/// An inclusive `[min, max]` count range.
///
/// Single source of truth for every count drawn during generation (words
/// walked per sentence, sentences per paragraph, paragraphs per
/// document): both bounds are included and `1 <= min <= max` always
/// holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountRange {
	min: usize,
	max: usize,
}

impl CountRange {
	/// Creates a validated inclusive range.
	///
	/// # Errors
	/// Returns `InvalidRange` unless `1 <= min <= max`.
	pub fn new(min: usize, max: usize) -> Result<Self, ModelError> {
		if min < 1 || min > max {
			return Err(ModelError::InvalidRange { min, max });
		}
		Ok(Self { min, max })
	}

	/// Returns the lower bound (included).
	pub fn min(&self) -> usize {
		self.min
	}

	/// Returns the upper bound (included).
	pub fn max(&self) -> usize {
		self.max
	}

	/// Draws a count uniformly from the range, both bounds included.
	pub fn sample(&self, rng: &mut impl Rng) -> usize {
		rng.random_range(self.min..=self.max)
	}
}

/// Input parameters for text generation.
///
/// `GenerationInput` contains both **shape parameters** (how many words,
/// sentences and paragraphs to aim for) and the **start-seed strategy**.
///
/// # Responsibilities
/// - Track the count ranges drawn from during generation
/// - Track the start-seed strategy for sentence openings
///
/// # Invariants
/// - Every count range satisfies `1 <= min <= max`
pub struct GenerationInput {
	/// Strategy for picking the opening word of each sentence.
	pub start_seed: StartSeed,

	/// Successor words walked per sentence, on top of the opening word
	/// and the closing terminator.
	sentence_words: CountRange,

	/// Sentences per generated paragraph.
	paragraph_sentences: CountRange,

	/// Paragraphs per generated document.
	document_paragraphs: CountRange,
}

impl Default for GenerationInput {
	/// Returns the default generation shape: 5 to 20 words walked per
	/// sentence, 2 to 10 sentences per paragraph, 3 to 5 paragraphs per
	/// document, random start seed.
	fn default() -> Self {
		Self {
			start_seed: StartSeed::Random,
			sentence_words: CountRange { min: 5, max: 20 },
			paragraph_sentences: CountRange { min: 2, max: 10 },
			document_paragraphs: CountRange { min: 3, max: 5 },
		}
	}
}

impl GenerationInput {
	/// Returns the words-walked-per-sentence range.
	pub fn sentence_words(&self) -> CountRange {
		self.sentence_words
	}

	/// Returns the sentences-per-paragraph range.
	pub fn paragraph_sentences(&self) -> CountRange {
		self.paragraph_sentences
	}

	/// Returns the paragraphs-per-document range.
	pub fn document_paragraphs(&self) -> CountRange {
		self.document_paragraphs
	}

	/// Sets the words walked per sentence, both bounds included.
	///
	/// # Errors
	/// Returns an error unless `1 <= min <= max`.
	pub fn set_sentence_words(&mut self, min: usize, max: usize) -> Result<(), ModelError> {
		self.sentence_words = CountRange::new(min, max)?;
		Ok(())
	}

	/// Sets the sentences per paragraph, both bounds included.
	///
	/// # Errors
	/// Returns an error unless `1 <= min <= max`.
	pub fn set_paragraph_sentences(&mut self, min: usize, max: usize) -> Result<(), ModelError> {
		self.paragraph_sentences = CountRange::new(min, max)?;
		Ok(())
	}

	/// Sets the paragraphs per document, both bounds included.
	///
	/// # Errors
	/// Returns an error unless `1 <= min <= max`.
	pub fn set_document_paragraphs(&mut self, min: usize, max: usize) -> Result<(), ModelError> {
		self.document_paragraphs = CountRange::new(min, max)?;
		Ok(())
	}
}
