use rand::Rng;

/// Strategy for drawing one of N categorical outcomes given weights.
///
/// The weighted-random draw is the only nondeterministic step in the whole
/// generation pipeline; keeping it behind this trait lets tests substitute
/// a deterministic double for reproducible assertions.
pub trait Sampler {
	/// Draws one index into `weights`, with probability proportional to
	/// the weight at that index.
	///
	/// Returns `None` if `weights` is empty or its total is not positive.
	fn pick(&mut self, weights: &[f64]) -> Option<usize>;
}

/// Weighted random sampler backed by the thread-local RNG.
///
/// Performs an O(n) cumulative-subtraction scan over the weights to select
/// a bucket.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomSampler;

impl Sampler for RandomSampler {
	fn pick(&mut self, weights: &[f64]) -> Option<usize> {
		if weights.is_empty() {
			return None;
		}

		// Compute the total weight
		let total: f64 = weights.iter().sum();
		if !(total > 0.0) || !total.is_finite() {
			return None;
		}

		// Randomly select a bucket
		let mut r = rand::rng().random_range(0.0..total);

		let mut fallback = None;
		for (index, weight) in weights.iter().enumerate() {
			if *weight <= 0.0 {
				continue;
			}
			if r < *weight {
				return Some(index);
			}
			r -= weight;
			fallback = Some(index);
		}

		// Fallback: floating-point rounding may exhaust the scan.
		fallback
	}
}
