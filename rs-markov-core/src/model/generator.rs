use log::trace;

use crate::error::ModelError;
use super::markov_model::MarkovModel;
use super::sampler::Sampler;
use super::vocabulary::BOUNDARY_TOKEN;

/// Strategy used to select the starting context when generating a sequence.
///
/// # Variants
/// - `Boundary`: start from the boundary sentinel alone; the first draw
///   picks a trained line-start token.
/// - `One(token)`: use the provided token as the initial context.
/// - `Two(first, second)`: use the provided pair, in corpus order, as the
///   initial context.
///
/// Seed tokens must exist in the trained vocabulary; an unknown seed makes
/// generation fail with `UnknownToken`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Seed {
	#[default]
	Boundary,
	One(String),
	Two(String, String),
}

/// Input parameters for sequence generation.
///
/// # Invariants
/// - `max_len` bounds the number of drawn tokens, not the seed tokens;
///   it is a safety valve against unbounded generation, and exhausting it
///   is a successful run, not a failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationInput {
	/// Maximum number of tokens drawn in one run.
	pub max_len: usize,

	/// Starting context for the run.
	pub seed: Seed,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self { max_len: 100, seed: Seed::Boundary }
	}
}

/// High-level interface driving a fitted model through one generation run.
///
/// Borrows the model read-only and owns the sampling strategy, so several
/// generators can share one fitted model.
///
/// # Responsibilities
/// - Seed the output buffer (one leading boundary sentinel plus the seed
///   tokens)
/// - Call `MarkovModel::next` with the last one or two buffer tokens,
///   preferring the two-token context once two real tokens are available
/// - Terminate on the boundary sentinel, on an exhausted context
///   (`NoCandidates`), or after `max_len` draws
#[derive(Debug)]
pub struct Generator<'a, S: Sampler> {
	model: &'a MarkovModel,
	sampler: S,
}

impl<'a, S: Sampler> Generator<'a, S> {
	/// Creates a generator over a fitted model.
	pub fn new(model: &'a MarkovModel, sampler: S) -> Self {
		Self { model, sampler }
	}

	/// Generates one bounded token sequence.
	///
	/// The buffer starts with the boundary sentinel followed by the seed
	/// tokens. Each iteration draws one token from the model:
	/// - with fewer than two real tokens in the buffer, the order-1
	///   distribution of the last token is used (the sentinel itself when
	///   the buffer holds nothing else);
	/// - from two real tokens on, the order-2 distribution of the last
	///   pair is used.
	///
	/// The run stops when the model draws the boundary sentinel (which is
	/// discarded), when the current context has no trained successors, or
	/// after `max_len` draws. The leading sentinel is never part of the
	/// returned sequence.
	///
	/// # Errors
	/// - `UnknownToken` if a seed token is absent from the vocabulary
	/// - `DegenerateDistribution` on a broken model invariant
	///
	/// `NoCandidates` is handled internally: the run terminates and the
	/// accumulated output is returned.
	pub fn generate_tokens(&mut self, input: &GenerationInput) -> Result<Vec<String>, ModelError> {
		let mut buffer: Vec<String> = vec![BOUNDARY_TOKEN.to_owned()];
		match &input.seed {
			Seed::Boundary => (),
			Seed::One(token) => buffer.push(token.clone()),
			Seed::Two(first, second) => {
				buffer.push(first.clone());
				buffer.push(second.clone());
			}
		}

		for _ in 0..input.max_len {
			let last = buffer.len() - 1;
			// buffer[0] is the sentinel: two real tokens means len >= 3
			let drawn = if buffer.len() >= 3 {
				self.model.next(&buffer[last], Some(&buffer[last - 1]), &mut self.sampler)
			} else {
				self.model.next(&buffer[last], None, &mut self.sampler)
			};

			match drawn {
				Ok(token) if token == BOUNDARY_TOKEN => {
					trace!("Generation hit the boundary sentinel after {} tokens", buffer.len() - 1);
					break;
				}
				Ok(token) => buffer.push(token),
				Err(ModelError::NoCandidates(context)) => {
					trace!("Generation exhausted context '{context}' after {} tokens", buffer.len() - 1);
					break;
				}
				Err(other) => return Err(other),
			}
		}

		// Discard the leading sentinel
		buffer.remove(0);
		Ok(buffer)
	}

	/// Generates one sequence and joins it with single spaces.
	pub fn generate(&mut self, input: &GenerationInput) -> Result<String, ModelError> {
		Ok(self.generate_tokens(input)?.join(" "))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::sampler::RandomSampler;

	/// Deterministic sampler double: always picks the heaviest bucket,
	/// breaking ties on the lowest index.
	struct GreedySampler;

	impl Sampler for GreedySampler {
		fn pick(&mut self, weights: &[f64]) -> Option<usize> {
			weights
				.iter()
				.enumerate()
				.max_by(|a, b| a.1.partial_cmp(b.1).unwrap().then(b.0.cmp(&a.0)))
				.map(|(index, _)| index)
		}
	}

	fn fitted(text: &str) -> MarkovModel {
		let mut model = MarkovModel::default();
		model.fit(text);
		model
	}

	#[test]
	fn max_len_bounds_the_number_of_drawn_tokens() {
		// Endless cycle, no sentinel: only max_len can stop the run
		let model = fitted("a b a b a b a b");
		let input = GenerationInput {
			max_len: 5,
			seed: Seed::One("a".to_owned()),
		};

		for _ in 0..50 {
			let tokens = Generator::new(&model, RandomSampler).generate_tokens(&input).unwrap();
			// Seed token plus at most 5 drawn tokens
			assert!(tokens.len() <= 6);
			assert_eq!(tokens[0], "a");
		}
	}

	#[test]
	fn sentinel_terminates_the_run_and_is_discarded() {
		let model = fitted("a b endofline a b endofline");
		let input = GenerationInput {
			max_len: 100,
			seed: Seed::One("a".to_owned()),
		};

		let tokens = Generator::new(&model, GreedySampler).generate_tokens(&input).unwrap();
		assert_eq!(tokens, vec!["a", "b"]);
	}

	#[test]
	fn exhausted_context_ends_the_run_gracefully() {
		// 'c' has no successors: the run stops with what was accumulated
		let model = fitted("a b c");
		let input = GenerationInput {
			max_len: 100,
			seed: Seed::Two("b".to_owned(), "c".to_owned()),
		};

		let tokens = Generator::new(&model, RandomSampler).generate_tokens(&input).unwrap();
		assert_eq!(tokens, vec!["b", "c"]);
	}

	#[test]
	fn unknown_seed_propagates_as_an_error() {
		let model = fitted("a b c");
		let input = GenerationInput {
			max_len: 10,
			seed: Seed::One("zebra".to_owned()),
		};

		let err = Generator::new(&model, RandomSampler).generate_tokens(&input).unwrap_err();
		assert_eq!(err, ModelError::UnknownToken("zebra".to_owned()));
	}

	#[test]
	fn boundary_seed_starts_from_trained_line_starts() {
		let mut model = MarkovModel::default();
		// The sentinel enters the corpus like a regular token
		model.fit("endofline the cat sat endofline the cat ran endofline");

		let input = GenerationInput::default();
		for _ in 0..20 {
			let text = Generator::new(&model, RandomSampler).generate(&input).unwrap();
			assert!(text.starts_with("the cat"), "got '{text}'");
			assert!(!text.contains(BOUNDARY_TOKEN));
		}
	}

	#[test]
	fn two_token_contexts_are_preferred_once_available() {
		// Order-1 after 'b' favors 'z', order-2 after (a, b) gives 'c';
		// the greedy double makes any order-1 fallback visible.
		let model = fitted("a b c z b z z b z z b z");
		let input = GenerationInput {
			max_len: 1,
			seed: Seed::Two("a".to_owned(), "b".to_owned()),
		};

		let tokens = Generator::new(&model, GreedySampler).generate_tokens(&input).unwrap();
		assert_eq!(tokens, vec!["a", "b", "c"]);
	}

	#[test]
	fn boundary_seed_requires_the_sentinel_in_the_corpus() {
		// Fitted from a raw string, the corpus never saw the sentinel
		let model = fitted("a b c");

		let err = Generator::new(&model, RandomSampler)
			.generate_tokens(&GenerationInput::default())
			.unwrap_err();
		assert_eq!(err, ModelError::UnknownToken(BOUNDARY_TOKEN.to_owned()));
	}

	#[test]
	fn generation_always_terminates() {
		let model = fitted("a a a a a a");
		let input = GenerationInput {
			max_len: 1000,
			seed: Seed::One("a".to_owned()),
		};

		let tokens = Generator::new(&model, RandomSampler).generate_tokens(&input).unwrap();
		assert_eq!(tokens.len(), 1001);
	}
}
