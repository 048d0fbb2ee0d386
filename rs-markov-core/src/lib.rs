//! First-order Markov text generation library.
//!
//! This crate builds a word-adjacency model from a training text and uses
//! it to synthesize pseudo-random sentences, paragraphs and documents:
//! - Separator-based tokenization and sentence-terminator extraction
//! - Frequency-weighted successor tables
//! - Sequential and multithreaded index construction
//! - Configurable generation (count ranges, start seed) driven by an
//!   explicit random source
//!
//! The crate never touches the filesystem, network or console. Callers
//! hand the corpus in as a string and get generated text back.

/// Error kinds shared by the whole crate.
pub mod error;

/// Word-adjacency model and generation logic.
///
/// This module exposes the tokenizer, the adjacency index and the
/// high-level text generator interface.
pub mod model;
