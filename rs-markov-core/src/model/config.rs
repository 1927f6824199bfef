/// Model hyperparameters.
///
/// An immutable configuration passed into the estimator and generator at
/// construction time. The defaults reproduce the fixed constants the model
/// was designed with.
///
/// # Invariants
/// - Both probabilities are in (0.0, 1.0]; the derived costs are therefore
///   finite and non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelConfig {
	/// Probability floor assigned when a distribution would otherwise be
	/// normalized by a zero total. Also the basis of `missing_word_cost`.
	pub missing_word_probability: f64,

	/// Probability assumed for a transition that was never observed.
	/// Basis of the missing-transition costs.
	pub missing_transition_probability: f64,
}

impl Default for ModelConfig {
	fn default() -> Self {
		Self {
			missing_word_probability: 1e-4,
			missing_transition_probability: 1e-11,
		}
	}
}

impl ModelConfig {
	/// Cost (negative log-probability) of an unknown word.
	pub fn missing_word_cost(&self) -> f64 {
		-self.missing_word_probability.ln()
	}

	/// Cost returned for an order-1 transition absent from the table.
	pub fn missing_transition_1_cost(&self) -> f64 {
		-self.missing_transition_probability.ln()
	}

	/// Cost returned for an order-2 transition absent from the table.
	pub fn missing_transition_2_cost(&self) -> f64 {
		-self.missing_transition_probability.ln()
	}
}
