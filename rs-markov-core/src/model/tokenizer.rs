/// Characters that split raw text into tokens.
///
/// Covers ASCII whitespace plus every punctuation mark treated as a word
/// boundary. The apostrophe is not a separator: [`tokenize`] trims it
/// from token edges but keeps it inside words, so contractions like
/// `it's` survive as one token.
pub const WORD_SEPARATORS: [char; 35] = [
	' ', '\t', '\r', '\n', '!', '"', '#', '$', '%', '&', '*', '+', ',', '-', '.', '/', ':', ';',
	'<', '=', '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~', '(', ')',
];

/// Punctuation that closes a sentence.
pub const TERMINATOR_PUNCTUATION: [char; 4] = ['!', '.', '?', ';'];

/// Splits a raw text into normalized tokens.
///
/// # Behavior
/// - Lower-cases the whole input first (locale-insensitive).
/// - Splits on [`WORD_SEPARATORS`].
/// - Trims residual whitespace and edge apostrophes from each fragment.
/// - Drops fragments that end up empty.
///
/// Token order follows corpus order and duplicates are preserved; the
/// adjacency index relies on both.
pub fn tokenize(text: &str) -> Vec<String> {
	text.to_lowercase()
		.split(|c: char| WORD_SEPARATORS.contains(&c))
		.map(|fragment| fragment.trim().trim_matches('\''))
		.filter(|fragment| !fragment.is_empty())
		.map(str::to_owned)
		.collect()
}

/// Extracts the sentence-closing words of a raw text, lower-cased, in
/// corpus order.
///
/// A word closes a sentence when it sits immediately before terminating
/// punctuation in the raw text, as in `fine.` or `really?`. Word
/// characters are alphanumerics and `_`.
///
/// # Behavior
/// - Scans the characters once, accumulating the current word run.
/// - On [`TERMINATOR_PUNCTUATION`], emits the pending run.
/// - Any other non-word character clears the pending run, so `end..`
///   emits `end` exactly once.
pub fn sentence_terminators(text: &str) -> Vec<String> {
	let mut terminators = Vec::new();
	let mut run = String::new();

	for c in text.chars() {
		if c.is_alphanumeric() || c == '_' {
			run.push(c);
		} else {
			if !run.is_empty() && TERMINATOR_PUNCTUATION.contains(&c) {
				terminators.push(run.to_lowercase());
			}
			run.clear();
		}
	}

	terminators
}
