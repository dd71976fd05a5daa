//! Key estimator facade
//!
//! Binds one genre's template pair to correlation and decision. The estimator
//! holds only a reference into the static template registry, so it is `Copy`,
//! `Send` and `Sync` and can be shared freely across threads.

use rayon::prelude::*;

use super::correlation::{correlate, CorrelationResult};
use super::decision::decide;
use super::templates::{Genre, GenreProfile};
use crate::analysis::result::KeyEstimate;
use crate::error::Result;
use crate::features::chroma::{average_frames, ChromaExtractor, ChromaVector};
use crate::io::AudioFile;

/// Genre-conditioned Krumhansl-Schmuckler key estimator
#[derive(Debug, Clone, Copy)]
pub struct KeyEstimator {
    profile: &'static GenreProfile,
}

impl KeyEstimator {
    /// Estimator for `genre`
    pub fn new(genre: Genre) -> Self {
        Self {
            profile: GenreProfile::for_genre(genre),
        }
    }

    /// Estimator for a genre identifier; unknown identifiers use the general profile
    pub fn for_genre_name(name: &str) -> Self {
        Self::new(Genre::from_name(name))
    }

    /// Genre whose templates this estimator uses
    pub fn genre(&self) -> Genre {
        self.profile.genre()
    }

    /// Major and minor correlations for `chroma`, in that order
    pub fn correlations(&self, chroma: &ChromaVector) -> (CorrelationResult, CorrelationResult) {
        (
            correlate(chroma, self.profile.major()),
            correlate(chroma, self.profile.minor()),
        )
    }

    /// Estimate the key of a validated chroma vector
    pub fn estimate(&self, chroma: &ChromaVector) -> KeyEstimate {
        let (major, minor) = self.correlations(chroma);
        decide(&major, &minor)
    }

    /// Validate raw bins, then estimate
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if `bins` is not 12 finite,
    /// non-negative values.
    pub fn estimate_slice(&self, bins: &[f64]) -> Result<KeyEstimate> {
        let chroma = ChromaVector::from_slice(bins)?;
        Ok(self.estimate(&chroma))
    }

    /// Average per-frame chroma, then estimate
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` for empty or malformed frames.
    pub fn estimate_frames(&self, frames: &[Vec<f64>]) -> Result<KeyEstimate> {
        let chroma = average_frames(frames)?;
        Ok(self.estimate(&chroma))
    }

    /// Extract chroma from `audio` with an external extractor, then estimate
    ///
    /// # Errors
    ///
    /// Propagates extractor failures and rejects malformed frames.
    pub fn estimate_audio<E>(&self, extractor: &E, audio: &AudioFile) -> Result<KeyEstimate>
    where
        E: ChromaExtractor + ?Sized,
    {
        let frames = extractor.extract_chroma(audio)?;
        self.estimate_frames(&frames)
    }

    /// Estimate many chroma vectors in parallel, preserving input order
    pub fn estimate_batch(&self, chromas: &[ChromaVector]) -> Vec<KeyEstimate> {
        chromas.par_iter().map(|c| self.estimate(c)).collect()
    }
}

impl Default for KeyEstimator {
    fn default() -> Self {
        Self::new(Genre::default())
    }
}

/// Estimate the key of 12 chroma bins using a genre's templates
///
/// The genre is matched case-insensitively; unknown genres use the general
/// profile.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if `chroma` is not 12 finite,
/// non-negative values.
///
/// # Example
///
/// ```
/// use stratum_tonal::{estimate_key, Key};
///
/// let chroma = [6.0, 2.5, 3.5, 2.5, 4.0, 4.0, 2.5, 5.0, 3.0, 3.5, 2.5, 3.0];
/// let estimate = estimate_key("general", &chroma)?;
///
/// assert_eq!(estimate.key(), Some(Key::major(0)));
/// assert_eq!(estimate.label(), Some("C major"));
/// # Ok::<(), stratum_tonal::AnalysisError>(())
/// ```
pub fn estimate_key(genre: &str, chroma: &[f64]) -> Result<KeyEstimate> {
    KeyEstimator::for_genre_name(genre).estimate_slice(chroma)
}
