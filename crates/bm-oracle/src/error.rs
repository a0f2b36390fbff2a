//! Error types for the divination engine.

use bm_core::CoreError;
use thiserror::Error;

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Errors that can occur while divining.
///
/// Casting itself cannot fail once an engine exists; these come from
/// construction (a catalog that fails its integrity check) and from direct
/// lookups with an out-of-range number.
#[derive(Debug, Error)]
pub enum OracleError {
    /// Catalog error: invalid number, unresolved pattern, or integrity failure.
    #[error(transparent)]
    Catalog(#[from] CoreError),
}

impl OracleError {
    /// Whether the error was caused by caller input rather than bad data.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Catalog(CoreError::InvalidHexagramNumber(_)))
    }
}
