//! Configuration parameters for feature assembly

use serde::{Deserialize, Serialize};

use crate::features::key::Genre;

/// What to do when the chroma backend returns malformed frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyFallback {
    /// Propagate `AnalysisError::InvalidInput` and abort the extraction
    #[default]
    Abort,
    /// Report an undetermined key and keep the other features
    Undetermined,
}

/// Analysis configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    // Key estimation
    /// Genre whose tonal templates are used (default: General)
    pub genre: Genre,

    /// Key strength below which the result is flagged as weak tonality (default: 0.5)
    pub weak_tonality_threshold: f64,

    /// Handling of malformed chroma (default: Abort)
    pub key_fallback: KeyFallback,

    // Pitch track
    /// Keep at most this many voiced pitch values (default: Some(10), None = all)
    pub max_pitch_values: Option<usize>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            genre: Genre::General,
            weak_tonality_threshold: 0.5,
            key_fallback: KeyFallback::Abort,
            max_pitch_values: Some(10),
        }
    }
}

impl AnalysisConfig {
    /// Default configuration with the genre resolved from an identifier
    ///
    /// Unknown identifiers select the general profile.
    pub fn for_genre_name(name: &str) -> Self {
        Self {
            genre: Genre::from_name(name),
            ..Self::default()
        }
    }
}
