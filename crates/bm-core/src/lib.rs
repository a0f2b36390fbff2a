//! Core data for Bibliomancer: trigrams, hexagrams, and the King Wen catalog.
//!
//! This crate owns the static divination content. Nothing here consumes
//! randomness: casting lives in `bm-oracle`, which resolves the six-bit line
//! patterns it produces through the [`Catalog`] defined here.

/// Process-wide hexagram catalog and the pattern lookup table.
pub mod catalog;
/// Authored hexagram content, split along the two canons.
pub mod content;
/// Error types used throughout the crate.
pub mod error;
/// The hexagram data model.
pub mod hexagram;
/// The eight trigrams.
pub mod trigram;

/// Re-export catalog types.
pub use catalog::{Catalog, LinePattern};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export hexagram types.
pub use hexagram::{Hexagram, LineText};
/// Re-export the trigram type.
pub use trigram::Trigram;
