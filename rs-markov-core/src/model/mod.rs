//! Top-level module for the word-chain generation system.
//!
//! This crate provides an order-1/order-2 Markov word generator, including:
//! - Corpus cleaning and indexed vocabulary (`Vocabulary`)
//! - Normalized transition tables (`TransitionTable`)
//! - Model hyperparameters (`ModelConfig`)
//! - The trained model itself (`MarkovModel`)
//! - Sampling strategies (`Sampler`)
//! - A high-level generation interface (`Generator`)

/// Corpus cleaning and the token <-> index vocabulary.
///
/// Handles punctuation stripping, lowercasing, non-ASCII removal,
/// whitespace splitting and the reserved `UNK` entry.
pub mod vocabulary;

/// Normalized transition-probability tables.
///
/// One generic table covers both the order-1 (single predecessor index)
/// and order-2 (predecessor pair) cases.
pub mod transition;

/// Model hyperparameters.
///
/// Missing-probability floor and the derived missing-transition costs,
/// passed explicitly into the estimator and generator.
pub mod config;

/// The trained word-chain model.
///
/// Handles corpus fitting, successor sampling and the
/// negative-log-probability cost lookups.
pub mod markov_model;

/// Categorical sampling strategies.
///
/// A small trait so that deterministic test doubles can replace
/// the random sampler during testing.
pub mod sampler;

/// High-level interface for generating bounded word sequences.
///
/// Drives the model from a seeded start to a sentinel- or
/// length-bounded end.
pub mod generator;
