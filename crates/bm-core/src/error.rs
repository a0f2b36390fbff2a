/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when reading the hexagram catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A hexagram number outside 1..=64 was requested.
    #[error("invalid hexagram number {0}: expected 1-64")]
    InvalidHexagramNumber(u8),

    /// A line pattern has no entry in the King Wen table.
    #[error("unresolved line pattern {0:#08b}")]
    UnresolvedPattern(u8),

    /// The authored content failed the completeness check.
    #[error("catalog integrity check failed: {0}")]
    Integrity(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            CoreError::InvalidHexagramNumber(65).to_string(),
            "invalid hexagram number 65: expected 1-64"
        );
        assert_eq!(
            CoreError::UnresolvedPattern(64).to_string(),
            "unresolved line pattern 0b1000000"
        );
        assert_eq!(
            CoreError::Integrity("duplicate hexagram 3".into()).to_string(),
            "catalog integrity check failed: duplicate hexagram 3"
        );
    }
}
