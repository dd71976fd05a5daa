//! Analysis metadata structures

use serde::{Deserialize, Serialize};

use crate::features::key::Genre;

/// Analysis flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisFlag {
    /// Chroma carried no tonal information; no key was reported
    UndeterminedKey,
    /// Best key correlation below the configured threshold (atonal/ambiguous)
    WeakTonality,
}

/// Analysis metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Genre profile the key was estimated with
    pub genre: Genre,

    /// Processing time in milliseconds
    pub processing_time_ms: f32,

    /// Algorithm version
    pub algorithm_version: String,

    /// Analysis flags
    pub flags: Vec<AnalysisFlag>,

    /// Confidence warnings (weak tonality, substituted results, ...)
    pub confidence_warnings: Vec<String>,
}

impl Default for AnalysisMetadata {
    fn default() -> Self {
        Self {
            genre: Genre::default(),
            processing_time_ms: 0.0,
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
            flags: vec![],
            confidence_warnings: vec![],
        }
    }
}
