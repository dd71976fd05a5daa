//! Audio file handle passed to extraction collaborators

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Descriptor of an audio file awaiting analysis
///
/// The crate never opens or decodes the file; extraction backends do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioFile {
    /// Location on disk or in storage
    pub path: PathBuf,

    /// Container/codec hint, e.g. "wav" or "mp3"
    pub format: String,

    /// Duration in seconds
    pub duration_seconds: f64,

    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl AudioFile {
    /// Describe an audio file
    pub fn new(
        path: impl Into<PathBuf>,
        format: impl Into<String>,
        duration_seconds: f64,
        sample_rate: u32,
    ) -> Self {
        Self {
            path: path.into(),
            format: format.into(),
            duration_seconds,
            sample_rate,
        }
    }

    /// Location of the file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
