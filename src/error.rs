//! Error types for key estimation and feature assembly

use thiserror::Error;

/// Errors that can occur during key estimation or feature assembly
///
/// Degenerate (silent or constant) chroma is not an error: it produces an
/// undetermined [`KeyEstimate`](crate::KeyEstimate). Unknown genres are not an
/// error either: they fall back to the general profile.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// Invalid input (malformed chroma vector, empty frame set, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An external collaborator (chroma, tempo, pitch or onset backend) failed
    #[error("Extraction error: {0}")]
    ExtractionError(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_message() {
        let err = AnalysisError::InvalidInput("Chroma vector must have 12 elements, got 3".into());
        assert_eq!(
            err.to_string(),
            "Invalid input: Chroma vector must have 12 elements, got 3"
        );

        let err = AnalysisError::ExtractionError("tempo backend offline".into());
        assert_eq!(err.to_string(), "Extraction error: tempo backend offline");
    }
}
