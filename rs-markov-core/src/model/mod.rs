//! Top-level module for the word-adjacency generation system.
//!
//! This module provides a first-order Markov text generator, including:
//! - Corpus tokenization (`tokenizer`)
//! - Frequency-weighted sampling tables (`WeightedTable`)
//! - The word-adjacency index (`AdjacencyIndex`)
//! - Generation configuration (`GenerationInput`)
//! - A high-level generation interface (`TextGenerator`)

/// High-level interface for generating sentences, paragraphs and
/// documents from a word-adjacency index.
///
/// Exposes index construction, seed control and document assembly over
/// an explicit random source.
pub mod generator;

/// First-order word-adjacency index.
///
/// Handles corpus ingestion (sequential or multithreaded), successor and
/// terminator counting, weighted sampling, and index merging.
pub mod adjacency_index;

/// Frequency-weighted sampling table.
///
/// Tracks occurrence counts per value and supports weighted random
/// draws and merging.
pub mod weighted_table;

/// Corpus tokenization.
///
/// Splits raw text into normalized tokens and extracts the words that
/// close sentences in the source text.
pub mod tokenizer;

/// Generation configuration structure.
///
/// Stores generation parameters such as count ranges and the start-seed
/// strategy. Constrained values are validated at the setters.
pub mod generation_input;
