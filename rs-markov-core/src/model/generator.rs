use rand::Rng;

use super::adjacency_index::AdjacencyIndex;
use super::generation_input::{GenerationInput, StartSeed};
use crate::error::ModelError;

/// High-level text generator walking a word-adjacency index.
///
/// Owns the index plus the explicit random source driving every draw;
/// both a seeded `StdRng` and `rand::rng()` fit.
///
/// # Responsibilities
/// - Resolve the opening word of each sentence (random token or custom
///   seed)
/// - Walk weighted successors up to a drawn word count
/// - Close sentences with a drawn terminator and assemble paragraphs and
///   documents
#[derive(Debug)]
pub struct TextGenerator<R: Rng> {
	index: AdjacencyIndex,
	rng: R,
}

impl<R: Rng> TextGenerator<R> {
	/// Creates a generator over an already-built index.
	pub fn new(index: AdjacencyIndex, rng: R) -> Self {
		Self { index, rng }
	}

	/// Builds the index from `text` in a single pass and wraps it.
	pub fn from_text(text: &str, rng: R) -> Self {
		Self::new(AdjacencyIndex::from_text(text), rng)
	}

	/// Builds the index from `text` on every available CPU and wraps it.
	pub fn from_text_parallel(text: &str, rng: R) -> Self {
		Self::new(AdjacencyIndex::from_text_parallel(text), rng)
	}

	/// Returns a read-only reference to the underlying index.
	pub fn index(&self) -> &AdjacencyIndex {
		&self.index
	}

	/// Generates one sentence.
	///
	/// # Behavior
	/// - Resolves the opening word from `input.start_seed`; a custom word
	///   is trimmed and lower-cased, an empty one falls back to a random
	///   token.
	/// - Draws a walk length from the words-per-sentence range, then walks
	///   that many weighted successors. A token that was never observed
	///   with a following token closes the sentence early; that is a
	///   normal outcome, not an error.
	/// - Appends one drawn terminator word with a literal `.` glued to it,
	///   upper-cases the first character of the opening word and joins
	///   everything with single spaces.
	///
	/// # Errors
	/// Returns `EmptyIndex` if the index holds no tokens or no
	/// terminators.
	pub fn generate_sentence(&mut self, input: &GenerationInput) -> Result<String, ModelError> {
		let seed = match &input.start_seed {
			StartSeed::Custom(word) if !word.trim().is_empty() => word.trim().to_lowercase(),
			_ => self.index.random_token(&mut self.rng)?.to_owned(),
		};

		let target = input.sentence_words().sample(&mut self.rng);
		let mut words = vec![seed];

		for _ in 0..target {
			// Should not panic, words always holds the opening word
			let current = words.last().unwrap();
			match self.index.random_successor(current, &mut self.rng) {
				Ok(next) => words.push(next.to_owned()),
				// A dead-end token closes the sentence early
				Err(ModelError::NoSuccessor(_)) => break,
				Err(error) => return Err(error),
			}
		}

		let terminator = self.index.random_terminator(&mut self.rng)?;
		words.push(format!("{}.", terminator));

		let opening = capitalize_first(&words[0]);
		words[0] = opening;

		Ok(words.join(" "))
	}

	/// Generates one paragraph.
	///
	/// Draws a sentence count from the sentences-per-paragraph range and
	/// joins that many sentences with single spaces. A custom start seed
	/// opens every sentence of the paragraph.
	///
	/// # Errors
	/// Returns `EmptyIndex` if the index holds no tokens or no
	/// terminators.
	pub fn generate_paragraph(&mut self, input: &GenerationInput) -> Result<String, ModelError> {
		let count = input.paragraph_sentences().sample(&mut self.rng);

		let mut sentences = Vec::with_capacity(count);
		for _ in 0..count {
			sentences.push(self.generate_sentence(input)?);
		}

		Ok(sentences.join(" "))
	}

	/// Generates a whole document.
	///
	/// Draws a paragraph count from the paragraphs-per-document range,
	/// joins the paragraphs with a blank line and trims trailing
	/// whitespace.
	///
	/// # Errors
	/// Returns `EmptyIndex` if the index holds no tokens or no
	/// terminators.
	pub fn generate_document(&mut self, input: &GenerationInput) -> Result<String, ModelError> {
		let count = input.document_paragraphs().sample(&mut self.rng);

		let mut paragraphs = Vec::with_capacity(count);
		for _ in 0..count {
			paragraphs.push(self.generate_paragraph(input)?);
		}

		Ok(paragraphs.join("\n\n").trim_end().to_owned())
	}
}

/// Upper-cases the first character of a word (Unicode-aware), leaving
/// the rest unchanged.
fn capitalize_first(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
		None => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	/// Every token has at least one successor, so walks never dead-end.
	const LOOPING_CORPUS: &str = "a b. b a. a b.";

	fn generator(corpus: &str, seed: u64) -> TextGenerator<StdRng> {
		TextGenerator::from_text(corpus, StdRng::seed_from_u64(seed))
	}

	#[test]
	fn sentence_ends_with_a_single_period_and_starts_uppercase() {
		let mut generator = generator(LOOPING_CORPUS, 10);
		let input = GenerationInput::default();

		for _ in 0..20 {
			let sentence = generator.generate_sentence(&input).unwrap();
			assert!(sentence.ends_with('.'), "no closing period: {:?}", sentence);
			assert!(!sentence.ends_with(".."), "double period: {:?}", sentence);
			assert!(
				sentence.chars().next().unwrap().is_uppercase(),
				"not capitalized: {:?}",
				sentence
			);
		}
	}

	#[test]
	fn sentence_length_tracks_the_drawn_walk() {
		let mut generator = generator(LOOPING_CORPUS, 11);
		let mut input = GenerationInput::default();
		input.set_sentence_words(3, 3).unwrap();

		// Opening word + 3 walked words + terminator
		let sentence = generator.generate_sentence(&input).unwrap();
		assert_eq!(sentence.split_whitespace().count(), 5, "{:?}", sentence);
	}

	#[test]
	fn custom_seed_opens_the_sentence() {
		let mut generator = generator("The cat sat on the mat. The cat ran.", 12);
		let mut input = GenerationInput::default();
		input.start_seed = StartSeed::Custom("The".to_owned());

		for _ in 0..10 {
			let sentence = generator.generate_sentence(&input).unwrap();
			assert!(sentence.starts_with("The "), "{:?}", sentence);
		}
	}

	#[test]
	fn blank_custom_seed_falls_back_to_a_random_token() {
		let mut generator = generator(LOOPING_CORPUS, 13);
		let mut input = GenerationInput::default();
		input.start_seed = StartSeed::Custom("  ".to_owned());

		let sentence = generator.generate_sentence(&input).unwrap();
		assert!(sentence.starts_with("A ") || sentence.starts_with("B "), "{:?}", sentence);
	}

	#[test]
	fn dead_end_seed_closes_the_sentence_early() {
		// "beta" is never followed by anything and is the only terminator
		let mut generator = generator("alpha beta.", 14);
		let mut input = GenerationInput::default();
		input.start_seed = StartSeed::Custom("beta".to_owned());

		let sentence = generator.generate_sentence(&input).unwrap();
		assert_eq!(sentence, "Beta beta.");
	}

	#[test]
	fn unknown_custom_seed_still_renders_a_minimal_sentence() {
		let mut generator = generator("alpha beta gamma.", 15);
		let mut input = GenerationInput::default();
		input.start_seed = StartSeed::Custom("zebra".to_owned());

		let sentence = generator.generate_sentence(&input).unwrap();
		assert!(sentence.starts_with("Zebra "), "{:?}", sentence);
		assert_eq!(sentence.split_whitespace().count(), 2, "{:?}", sentence);
	}

	#[test]
	fn empty_index_fails_with_a_typed_error() {
		let mut generator = generator("", 16);
		let input = GenerationInput::default();

		assert_eq!(
			generator.generate_sentence(&input),
			Err(ModelError::EmptyIndex)
		);
		assert_eq!(
			generator.generate_document(&input),
			Err(ModelError::EmptyIndex)
		);
	}

	#[test]
	fn corpus_without_punctuation_cannot_close_sentences() {
		let mut generator = generator("hello world hello world", 17);
		let input = GenerationInput::default();

		assert_eq!(
			generator.generate_sentence(&input),
			Err(ModelError::EmptyIndex)
		);
	}

	#[test]
	fn paragraph_holds_the_drawn_sentence_count() {
		let mut generator = generator(LOOPING_CORPUS, 18);
		let mut input = GenerationInput::default();
		input.set_paragraph_sentences(3, 3).unwrap();

		let paragraph = generator.generate_paragraph(&input).unwrap();
		// One period per sentence, none anywhere else
		assert_eq!(paragraph.matches('.').count(), 3, "{:?}", paragraph);
		assert!(!paragraph.contains('\n'));
	}

	#[test]
	fn document_joins_paragraphs_with_blank_lines() {
		let mut generator = generator(LOOPING_CORPUS, 19);
		let mut input = GenerationInput::default();
		input.set_document_paragraphs(2, 2).unwrap();

		let document = generator.generate_document(&input).unwrap();
		assert_eq!(document.matches("\n\n").count(), 1, "{:?}", document);
		assert_eq!(document, document.trim_end());
	}

	#[test]
	fn pinned_ranges_yield_one_paragraph_of_one_sentence() {
		let mut generator = generator(LOOPING_CORPUS, 20);
		let mut input = GenerationInput::default();
		input.set_sentence_words(1, 1).unwrap();
		input.set_paragraph_sentences(1, 1).unwrap();
		input.set_document_paragraphs(1, 1).unwrap();

		let document = generator.generate_document(&input).unwrap();
		assert_eq!(document.matches('.').count(), 1, "{:?}", document);
		assert!(!document.contains('\n'), "{:?}", document);
		// Opening word + 1 walked word + terminator
		assert_eq!(document.split_whitespace().count(), 3, "{:?}", document);
	}

	#[test]
	fn capitalize_first_handles_words_and_empties() {
		assert_eq!(capitalize_first("word"), "Word");
		assert_eq!(capitalize_first("it's"), "It's");
		assert_eq!(capitalize_first("été"), "Été");
		assert_eq!(capitalize_first(""), "");
	}
}
