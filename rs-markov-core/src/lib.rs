//! Word-level Markov text generation library.
//!
//! This crate provides a probabilistic word-chain generation system including:
//! - Corpus cleaning and integer-indexed vocabulary construction
//! - Order-1 and order-2 transition-probability estimation
//! - Stochastic generation with pluggable sampling strategies
//! - Internal utilities for tolerant training-file loading
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core model and generation logic.
///
/// This module exposes the vocabulary, transition tables, model and
/// generator while keeping internal representations private.
pub mod model;

/// Error types surfaced by model and generation operations.
pub mod error;

/// I/O utilities (tolerant training-file loading).
///
/// Not exposed
pub(crate) mod io;
