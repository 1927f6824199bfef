use std::collections::HashMap;
use std::collections::HashSet;

/// Reserved vocabulary entry for tokens not seen during training.
pub const UNK_TOKEN: &str = "UNK";

/// Reserved token marking line/sequence boundaries in the training corpus.
///
/// Inserted between lines by the training-file loader, so it enters the
/// vocabulary as an ordinary corpus token. Generation treats it as a
/// terminator and never includes it in the final output.
pub const BOUNDARY_TOKEN: &str = "endofline";

/// Cleans raw training text into a sequence of tokens.
///
/// Steps, in order:
/// - Strip all ASCII punctuation characters
/// - Lowercase
/// - Drop any non-ASCII character (discarded, not transliterated)
/// - Split on whitespace
///
/// Pure and deterministic. Never produces empty tokens.
pub fn clean(text: &str) -> Vec<String> {
	let cleaned: String = text
		.chars()
		.filter(|c| !c.is_ascii_punctuation())
		.flat_map(|c| c.to_lowercase())
		.filter(|c| c.is_ascii())
		.collect();

	cleaned.split_whitespace().map(str::to_owned).collect()
}

/// Bidirectional mapping between tokens and dense integer indices.
///
/// Built once from a training token sequence and immutable afterward.
///
/// # Responsibilities
/// - Assign each distinct token a unique index in `[0, N)`
/// - Reserve one extra `UNK` entry at the next available index
/// - Resolve tokens to indices and indices back to tokens
///
/// # Invariants
/// - The mapping is a bijection: every index in `[0, len)` has exactly
///   one token and vice versa
/// - `UNK`'s index is fixed at build time and never remapped
/// - Index assignment order among distinct tokens is unspecified
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
	/// Forward map: token -> index.
	token_index: HashMap<String, usize>,
	/// Reverse map: index -> token. Dense, `tokens[i]` is the token at index `i`.
	tokens: Vec<String>,
	/// Fixed index of the `UNK` entry.
	unk: usize,
}

impl Vocabulary {
	/// Builds a vocabulary from a training token sequence.
	///
	/// Duplicates are collapsed; one `UNK` entry is appended after all
	/// distinct corpus tokens. Corpus tokens are lowercase after `clean`,
	/// so the uppercase `UNK` sentinel can never collide with them.
	pub fn build<'a, I>(tokens: I) -> Self
	where
		I: IntoIterator<Item = &'a str>,
	{
		let unique: HashSet<&str> = tokens.into_iter().collect();

		let mut token_index = HashMap::with_capacity(unique.len() + 1);
		let mut reverse = Vec::with_capacity(unique.len() + 1);
		for token in unique {
			token_index.insert(token.to_owned(), reverse.len());
			reverse.push(token.to_owned());
		}

		let unk = reverse.len();
		token_index.insert(UNK_TOKEN.to_owned(), unk);
		reverse.push(UNK_TOKEN.to_owned());

		Self { token_index, tokens: reverse, unk }
	}

	/// Total number of entries, `UNK` included.
	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	/// Returns `true` if the vocabulary holds no entries at all
	/// (only an unfitted, default-constructed vocabulary does).
	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	/// Returns the index of `token`, or `None` if it is not in the vocabulary.
	pub fn index_of(&self, token: &str) -> Option<usize> {
		self.token_index.get(token).copied()
	}

	/// Returns the token stored at `index`, or `None` if out of range.
	pub fn token_of(&self, index: usize) -> Option<&str> {
		self.tokens.get(index).map(String::as_str)
	}

	/// Returns `true` if `token` is in the vocabulary.
	pub fn contains(&self, token: &str) -> bool {
		self.token_index.contains_key(token)
	}

	/// The fixed index of the `UNK` entry.
	pub fn unk_index(&self) -> usize {
		self.unk
	}

	/// Maps a token sequence to its index sequence.
	///
	/// Tokens absent from the vocabulary map to the `UNK` index. In the
	/// fit path this is unreachable (the vocabulary is built from the same
	/// token stream), but foreign token sequences are handled the same way.
	pub fn index_sequence<T: AsRef<str>>(&self, tokens: &[T]) -> Vec<usize> {
		tokens
			.iter()
			.map(|token| self.index_of(token.as_ref()).unwrap_or(self.unk))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clean_strips_punctuation_and_lowercases() {
		let tokens = clean("The cat sat. The cat ran.");
		assert_eq!(tokens, vec!["the", "cat", "sat", "the", "cat", "ran"]);
	}

	#[test]
	fn clean_drops_non_ascii() {
		let tokens = clean("café noël 日本");
		assert_eq!(tokens, vec!["caf", "nol"]);
	}

	#[test]
	fn clean_produces_no_empty_tokens() {
		let tokens = clean("  ... ,,, !!! \t\n  ");
		assert!(tokens.is_empty());

		let tokens = clean("a	 b\n\nc");
		assert_eq!(tokens, vec!["a", "b", "c"]);
	}

	#[test]
	fn build_is_a_bijection_over_all_indices() {
		let tokens = clean("the cat sat the cat ran");
		let vocabulary = Vocabulary::build(tokens.iter().map(String::as_str));

		// 4 distinct tokens + UNK
		assert_eq!(vocabulary.len(), 5);
		for index in 0..vocabulary.len() {
			let token = vocabulary.token_of(index).unwrap();
			assert_eq!(vocabulary.index_of(token), Some(index));
		}
		for token in &tokens {
			let index = vocabulary.index_of(token).unwrap();
			assert_eq!(vocabulary.token_of(index), Some(token.as_str()));
		}
	}

	#[test]
	fn unk_is_the_last_entry() {
		let vocabulary = Vocabulary::build(["a", "b", "a"]);
		assert_eq!(vocabulary.len(), 3);
		assert_eq!(vocabulary.unk_index(), 2);
		assert_eq!(vocabulary.index_of(UNK_TOKEN), Some(2));
		assert_eq!(vocabulary.token_of(2), Some(UNK_TOKEN));
	}

	#[test]
	fn index_sequence_round_trips_known_tokens() {
		let tokens = clean("the cat sat the cat ran");
		let vocabulary = Vocabulary::build(tokens.iter().map(String::as_str));

		let indices = vocabulary.index_sequence(&tokens);
		let round_trip: Vec<&str> = indices
			.iter()
			.map(|&index| vocabulary.token_of(index).unwrap())
			.collect();
		assert_eq!(round_trip, tokens);
	}

	#[test]
	fn foreign_tokens_map_to_unk() {
		let vocabulary = Vocabulary::build(["a", "b"]);
		let indices = vocabulary.index_sequence(&["a", "zebra", "b"]);
		assert_eq!(indices[0], vocabulary.index_of("a").unwrap());
		assert_eq!(indices[1], vocabulary.unk_index());
		assert_eq!(indices[2], vocabulary.index_of("b").unwrap());
	}

	#[test]
	fn empty_corpus_keeps_only_unk() {
		let no_tokens: [&str; 0] = [];
		let vocabulary = Vocabulary::build(no_tokens);
		assert!(!vocabulary.is_empty());
		assert_eq!(vocabulary.len(), 1);
		assert_eq!(vocabulary.unk_index(), 0);
		assert!(Vocabulary::default().is_empty());
	}
}
