use thiserror::Error;

/// Errors surfaced by model lookups and generation.
///
/// All model operations are pure and local: there are no retries and no
/// partial recovery. `NoCandidates` is the only variant the generation
/// loop handles itself (it terminates the run and keeps the accumulated
/// output); everything else propagates to the caller untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
	/// A context or seed token is absent from the trained vocabulary.
	///
	/// The lookup contract requires the caller to pre-validate tokens
	/// against the vocabulary; unknown tokens are never silently mapped
	/// to `UNK` during generation.
	#[error("Token '{0}' is not in the vocabulary")]
	UnknownToken(String),

	/// The given context combination has zero trained successors.
	///
	/// Signals the generation loop to terminate the run rather than
	/// retry indefinitely.
	#[error("No trained successors for context '{0}'")]
	NoCandidates(String),

	/// A trained distribution violated an internal invariant
	/// (zero total weight, or an index with no vocabulary entry).
	///
	/// Should not happen given the counting and normalization invariants;
	/// treat as an assertion failure, not a recoverable condition.
	#[error("Degenerate distribution for context '{0}'")]
	DegenerateDistribution(String),
}
