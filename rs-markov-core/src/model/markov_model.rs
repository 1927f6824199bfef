use std::path::Path;

use log::debug;

use crate::error::ModelError;
use crate::io;
use super::config::ModelConfig;
use super::sampler::Sampler;
use super::transition::{Order1Table, Order2Table};
use super::vocabulary::{self, Vocabulary, BOUNDARY_TOKEN};

/// Word-level Markov model over order-1 and order-2 transitions.
///
/// A single `fit` call builds the vocabulary and both transition tables;
/// everything is read-only afterward, so `&self` generation from multiple
/// callers is safe. Refitting replaces all state.
///
/// # Responsibilities
/// - Clean and index the training corpus
/// - Estimate the order-1 and order-2 transition tables
/// - Sample successor tokens for a 1- or 2-token context
/// - Expose negative-log-probability costs for scoring use cases
///
/// # Invariants
/// - The vocabulary and both tables always come from the same corpus
/// - Tables are never mutated outside `fit`
#[derive(Clone, Debug, Default)]
pub struct MarkovModel {
	config: ModelConfig,
	vocabulary: Vocabulary,
	order_1: Order1Table,
	order_2: Order2Table,
}

impl MarkovModel {
	/// Creates an unfitted model with the given hyperparameters.
	pub fn new(config: ModelConfig) -> Self {
		Self {
			config,
			vocabulary: Vocabulary::default(),
			order_1: Order1Table::default(),
			order_2: Order2Table::default(),
		}
	}

	/// Trains the model on a raw corpus string.
	///
	/// Cleans the text, builds the vocabulary, indexes the corpus and fits
	/// both transition tables. Corpora shorter than 2 (resp. 3) tokens
	/// yield an empty order-1 (resp. order-2) table.
	pub fn fit(&mut self, text: &str) {
		let tokens = vocabulary::clean(text);
		self.vocabulary = Vocabulary::build(tokens.iter().map(String::as_str));

		let indices = self.vocabulary.index_sequence(&tokens);
		self.order_1 = Order1Table::fit_order_1(&indices, &self.config);
		self.order_2 = Order2Table::fit_order_2(&indices, &self.config);

		debug!(
			"Fitted model: {} tokens, {} vocabulary entries, {} order-1 contexts, {} order-2 contexts",
			tokens.len(),
			self.vocabulary.len(),
			self.order_1.len(),
			self.order_2.len()
		);
	}

	/// Trains the model on a text file.
	///
	/// Reads the file tolerantly (invalid bytes dropped, not failing the
	/// load) and joins its non-empty lines with the boundary sentinel, so
	/// line boundaries survive as ordinary transitions.
	pub fn fit_from_path<P: AsRef<Path>>(&mut self, filename: P) -> std::io::Result<()> {
		let text = io::read_joined(filename, BOUNDARY_TOKEN)?;
		self.fit(&text);
		Ok(())
	}

	/// The trained vocabulary.
	pub fn vocabulary(&self) -> &Vocabulary {
		&self.vocabulary
	}

	/// The hyperparameters this model was built with.
	pub fn config(&self) -> &ModelConfig {
		&self.config
	}

	/// Samples the next token given 1 or 2 context tokens.
	///
	/// With only `prev`, draws from the order-1 distribution of `prev`;
	/// with `prev_prev` as well, draws from the order-2 distribution of
	/// the `(prev_prev, prev)` pair. The draw is a weighted random choice
	/// over the trained successor probabilities, never a greedy argmax.
	///
	/// # Errors
	/// - `UnknownToken` if a context token is absent from the vocabulary
	///   (no implicit `UNK` substitution here, unlike the indexing path)
	/// - `NoCandidates` if the context was never observed during training
	/// - `DegenerateDistribution` if a trained distribution cannot be
	///   sampled (broken invariant)
	pub fn next<S: Sampler>(
		&self,
		prev: &str,
		prev_prev: Option<&str>,
		sampler: &mut S,
	) -> Result<String, ModelError> {
		let prev_index = self.resolve(prev)?;

		let distribution = match prev_prev {
			None => self.order_1.distribution(&prev_index),
			Some(prev_prev) => {
				let prev_prev_index = self.resolve(prev_prev)?;
				self.order_2.distribution(&(prev_prev_index, prev_index))
			}
		};

		let context = match prev_prev {
			None => prev.to_owned(),
			Some(prev_prev) => format!("{prev_prev} {prev}"),
		};
		let distribution = distribution.ok_or_else(|| ModelError::NoCandidates(context.clone()))?;

		let mut candidates = Vec::with_capacity(distribution.len());
		let mut weights = Vec::with_capacity(distribution.len());
		for (&successor, &probability) in distribution {
			candidates.push(successor);
			weights.push(probability);
		}

		let drawn = sampler
			.pick(&weights)
			.ok_or_else(|| ModelError::DegenerateDistribution(context.clone()))?;

		self.vocabulary
			.token_of(candidates[drawn])
			.map(str::to_owned)
			.ok_or(ModelError::DegenerateDistribution(context))
	}

	/// Cost (negative log-probability) of the order-1 transition
	/// `prev -> cur`, by vocabulary index.
	///
	/// Returns the fixed missing-transition-1 cost when the entry is
	/// absent at either level.
	pub fn transition_1_cost(&self, cur: usize, prev: usize) -> f64 {
		match self.order_1.probability(&prev, cur) {
			Some(probability) => -probability.ln(),
			None => self.config.missing_transition_1_cost(),
		}
	}

	/// Cost (negative log-probability) of the order-2 transition
	/// `prev_2 -> prev -> cur`, by vocabulary index.
	///
	/// Returns the fixed missing-transition-2 cost when the entry is
	/// absent at either level.
	pub fn transition_2_cost(&self, cur: usize, prev: usize, prev_2: usize) -> f64 {
		match self.order_2.probability(&(prev_2, prev), cur) {
			Some(probability) => -probability.ln(),
			None => self.config.missing_transition_2_cost(),
		}
	}

	fn resolve(&self, token: &str) -> Result<usize, ModelError> {
		self.vocabulary
			.index_of(token)
			.ok_or_else(|| ModelError::UnknownToken(token.to_owned()))
	}
}
