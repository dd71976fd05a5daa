//! Musical feature assembly
//!
//! Packages the key estimate with tempo, pitch and rhythm produced by an
//! external analysis backend into one [`MusicalFeatures`] result.
//!
//! # Pipeline
//!
//! 1. Chroma frames from the backend → time average → key estimate
//! 2. Tempo (BPM) from the backend
//! 3. Pitch track: unvoiced/invalid values dropped, optionally truncated
//! 4. Beat times from the backend as rhythm

use std::time::Instant;

use super::metadata::{AnalysisFlag, AnalysisMetadata};
use super::result::{KeyEstimate, MusicalFeatures};
use crate::config::{AnalysisConfig, KeyFallback};
use crate::error::{AnalysisError, Result};
use crate::features::chroma::ChromaExtractor;
use crate::features::key::KeyEstimator;
use crate::io::AudioFile;

/// External analysis backend for everything besides key estimation
///
/// Failures should be reported as `AnalysisError::ExtractionError`.
pub trait FeatureBackend: ChromaExtractor {
    /// Global tempo in BPM
    fn tempo_bpm(&self, audio: &AudioFile) -> Result<f64>;

    /// Frame-wise fundamental frequency in Hz; zero or negative marks unvoiced frames
    fn pitch_track_hz(&self, audio: &AudioFile) -> Result<Vec<f64>>;

    /// Beat times in seconds
    fn beat_times(&self, audio: &AudioFile) -> Result<Vec<f64>>;
}

/// Feature extraction use case: backend + key estimator + configuration
#[derive(Debug, Clone)]
pub struct FeatureAssembler<B> {
    backend: B,
    estimator: KeyEstimator,
    config: AnalysisConfig,
}

impl<B: FeatureBackend> FeatureAssembler<B> {
    /// Assemble features with `backend`, estimating keys for `config.genre`
    pub fn new(backend: B, config: AnalysisConfig) -> Self {
        Self {
            backend,
            estimator: KeyEstimator::new(config.genre),
            config,
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Underlying backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Extract all musical features for `audio`
    ///
    /// # Errors
    ///
    /// Propagates backend failures. Malformed chroma aborts with
    /// `AnalysisError::InvalidInput` unless `config.key_fallback` is
    /// `KeyFallback::Undetermined`.
    pub fn extract(&self, audio: &AudioFile) -> Result<MusicalFeatures> {
        let start_time = Instant::now();

        log::debug!(
            "Extracting features for {} ({} Hz, {:.1}s, genre={})",
            audio.path().display(),
            audio.sample_rate,
            audio.duration_seconds,
            self.config.genre
        );

        let mut metadata = AnalysisMetadata {
            genre: self.config.genre,
            ..AnalysisMetadata::default()
        };

        let key = self.estimate_key(audio, &mut metadata)?;

        let tempo_bpm = self.backend.tempo_bpm(audio)?;
        if !tempo_bpm.is_finite() || tempo_bpm < 0.0 {
            return Err(AnalysisError::ExtractionError(format!(
                "Tempo backend returned invalid BPM: {}",
                tempo_bpm
            )));
        }

        let pitch_hz = voiced_pitches(
            &self.backend.pitch_track_hz(audio)?,
            self.config.max_pitch_values,
        );
        let rhythm_seconds = self.backend.beat_times(audio)?;

        metadata.processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;

        log::debug!(
            "Features: tempo={:.2} BPM, key={}, {} pitches, {} beats ({:.2} ms)",
            tempo_bpm,
            key,
            pitch_hz.len(),
            rhythm_seconds.len(),
            metadata.processing_time_ms
        );

        Ok(MusicalFeatures {
            tempo_bpm,
            key,
            pitch_hz,
            rhythm_seconds,
            metadata,
        })
    }

    fn estimate_key(&self, audio: &AudioFile, metadata: &mut AnalysisMetadata) -> Result<KeyEstimate> {
        let frames = self.backend.extract_chroma(audio)?;

        let estimate = match self.estimator.estimate_frames(&frames) {
            Ok(estimate) => estimate,
            Err(AnalysisError::InvalidInput(msg))
                if self.config.key_fallback == KeyFallback::Undetermined =>
            {
                log::warn!("Invalid chroma, reporting undetermined key: {}", msg);
                metadata
                    .confidence_warnings
                    .push(format!("Key not estimated: {}", msg));
                KeyEstimate::Undetermined
            }
            Err(e) => return Err(e),
        };

        match estimate.strength() {
            None => {
                metadata.flags.push(AnalysisFlag::UndeterminedKey);
            }
            Some(strength) if strength < self.config.weak_tonality_threshold => {
                metadata.flags.push(AnalysisFlag::WeakTonality);
                metadata.confidence_warnings.push(format!(
                    "Weak tonality: key strength {:.3} below {:.3}",
                    strength, self.config.weak_tonality_threshold
                ));
            }
            Some(_) => {}
        }

        Ok(estimate)
    }
}

/// Keep finite, positive pitch values, at most `limit` of them
fn voiced_pitches(track: &[f64], limit: Option<usize>) -> Vec<f64> {
    let voiced = track.iter().copied().filter(|hz| hz.is_finite() && *hz > 0.0);
    match limit {
        Some(n) => voiced.take(n).collect(),
        None => voiced.collect(),
    }
}
