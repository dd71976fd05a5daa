//! Chroma extraction boundary
//!
//! Turning audio into chroma frames is the job of an external DSP/ML service.
//! This module defines the seam it plugs into and folds its per-frame output
//! into the single time-averaged vector key estimation consumes.

use super::vector::ChromaVector;
use crate::error::{AnalysisError, Result};
use crate::io::AudioFile;

/// External chroma extraction service
///
/// Implementations return one 12-element frame per analysis window. Failures
/// should be reported as `AnalysisError::ExtractionError`.
pub trait ChromaExtractor {
    /// Extract per-frame chroma for `audio`
    fn extract_chroma(&self, audio: &AudioFile) -> Result<Vec<Vec<f64>>>;
}

/// Average chroma frames bin-wise into one vector
///
/// # Arguments
///
/// * `frames` - 12-element chroma frames (one per analysis window)
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if `frames` is empty, a frame is not
/// 12 elements long, or the mean is not a valid chroma vector.
pub fn average_frames(frames: &[Vec<f64>]) -> Result<ChromaVector> {
    log::debug!("Averaging {} chroma frames", frames.len());

    if frames.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "Empty chroma frames".to_string(),
        ));
    }

    let mut sum = [0.0f64; 12];
    for (i, frame) in frames.iter().enumerate() {
        if frame.len() != 12 {
            return Err(AnalysisError::InvalidInput(format!(
                "Chroma frame at index {} has {} elements, expected 12",
                i,
                frame.len()
            )));
        }
        for (acc, &value) in sum.iter_mut().zip(frame) {
            *acc += value;
        }
    }

    let n = frames.len() as f64;
    for acc in &mut sum {
        *acc /= n;
    }

    ChromaVector::new(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_frames_mean() {
        let mut a = vec![0.0; 12];
        let mut b = vec![0.0; 12];
        a[0] = 1.0;
        b[0] = 3.0;
        b[7] = 2.0;

        let chroma = average_frames(&[a, b]).unwrap();
        assert_eq!(chroma.bins()[0], 2.0);
        assert_eq!(chroma.bins()[7], 1.0);
        assert_eq!(chroma.bins()[4], 0.0);
    }

    #[test]
    fn test_average_frames_empty() {
        assert!(matches!(
            average_frames(&[]),
            Err(AnalysisError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_average_frames_ragged() {
        let frames = vec![vec![0.5; 12], vec![0.5; 10]];
        let err = average_frames(&frames).unwrap_err();
        assert!(err.to_string().contains("index 1"), "{}", err);
    }

    #[test]
    fn test_average_frames_rejects_nan() {
        let mut frame = vec![0.5; 12];
        frame[2] = f64::NAN;
        assert!(average_frames(&[frame]).is_err());
    }
}
