use std::collections::HashMap;
use std::hash::Hash;

use super::config::ModelConfig;

/// Order-1 table: predecessor index -> successor distribution.
pub type Order1Table = TransitionTable<usize>;

/// Order-2 table: (second-previous index, previous index) -> successor
/// distribution. A single flat map keyed by the predecessor pair, not
/// three levels of nesting.
pub type Order2Table = TransitionTable<(usize, usize)>;

/// Normalized transition-probability table.
///
/// Maps a predecessor context `K` to the distribution over its observed
/// successors. One generic structure covers both the order-1 case
/// (`K = usize`) and the order-2 case (`K = (usize, usize)`).
///
/// # Responsibilities
/// - Accumulate transition counts from `(context, successor)` observations
/// - Normalize each context's counts into probabilities summing to 1
/// - Resolve distributions and single probabilities for trained contexts
///
/// # Invariants
/// - For every context present in the table, the successor probabilities
///   sum to 1 within floating-point tolerance
/// - Contexts never observed during training are simply absent; lookups
///   for them return `None` rather than failing
/// - Read-only after `fit`
#[derive(Clone, Debug, Default)]
pub struct TransitionTable<K> {
	probabilities: HashMap<K, HashMap<usize, f64>>,
}

impl<K: Eq + Hash> TransitionTable<K> {
	/// Builds a table from `(context, successor)` observations.
	///
	/// Counts every observation, then divides each context's successor
	/// counts by their total. A zero total cannot occur given the counting
	/// loop (every stored count is >= 1), but if it ever did, the
	/// missing-word-probability floor is assigned instead of dividing
	/// by zero.
	pub fn fit<I>(observations: I, config: &ModelConfig) -> Self
	where
		I: IntoIterator<Item = (K, usize)>,
	{
		let mut counts: HashMap<K, HashMap<usize, u64>> = HashMap::new();
		for (context, successor) in observations {
			*counts
				.entry(context)
				.or_default()
				.entry(successor)
				.or_insert(0) += 1;
		}

		// Divide by sum to get probabilities
		let mut probabilities = HashMap::with_capacity(counts.len());
		for (context, successors) in counts {
			let total: u64 = successors.values().sum();
			let distribution = successors
				.into_iter()
				.map(|(successor, count)| {
					let probability = if total == 0 {
						config.missing_word_probability
					} else {
						count as f64 / total as f64
					};
					(successor, probability)
				})
				.collect();
			probabilities.insert(context, distribution);
		}

		Self { probabilities }
	}

	/// Returns the successor distribution for `context`, or `None` if the
	/// context was never observed during training.
	pub fn distribution(&self, context: &K) -> Option<&HashMap<usize, f64>> {
		self.probabilities.get(context)
	}

	/// Returns the stored probability of `context -> successor`, or `None`
	/// if either the context or the successor under it is missing.
	pub fn probability(&self, context: &K, successor: usize) -> Option<f64> {
		self.probabilities.get(context)?.get(&successor).copied()
	}

	/// Number of trained contexts.
	pub fn len(&self) -> usize {
		self.probabilities.len()
	}

	/// Returns `true` if no context was trained.
	pub fn is_empty(&self) -> bool {
		self.probabilities.is_empty()
	}
}

impl TransitionTable<usize> {
	/// Fits an order-1 table from an indexed token sequence.
	///
	/// Every adjacent `(prev, cur)` pair is one observation. Sequences
	/// shorter than 2 tokens produce an empty table.
	pub fn fit_order_1(indices: &[usize], config: &ModelConfig) -> Self {
		Self::fit(indices.windows(2).map(|w| (w[0], w[1])), config)
	}
}

impl TransitionTable<(usize, usize)> {
	/// Fits an order-2 table from an indexed token sequence.
	///
	/// Every adjacent `(prev2, prev1, cur)` triple is one observation,
	/// keyed by the `(prev2, prev1)` pair. Sequences shorter than 3 tokens
	/// produce an empty table.
	pub fn fit_order_2(indices: &[usize], config: &ModelConfig) -> Self {
		Self::fit(indices.windows(3).map(|w| ((w[0], w[1]), w[2])), config)
	}
}
