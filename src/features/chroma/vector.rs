//! Validated 12-bin chroma vector

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// Time-averaged pitch-class energy, index 0 = C ... 11 = B
///
/// Always exactly 12 finite, non-negative values. Scale is irrelevant to key
/// estimation (Pearson correlation is scale-invariant), so no normalization is
/// applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct ChromaVector([f64; 12]);

impl ChromaVector {
    /// Validate and wrap 12 bins
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if any bin is NaN, infinite or negative.
    pub fn new(bins: [f64; 12]) -> Result<Self> {
        for (i, &value) in bins.iter().enumerate() {
            if !value.is_finite() {
                return Err(AnalysisError::InvalidInput(format!(
                    "Chroma bin {} is not finite: {}",
                    i, value
                )));
            }
            if value < 0.0 {
                return Err(AnalysisError::InvalidInput(format!(
                    "Chroma bin {} is negative: {}",
                    i, value
                )));
            }
        }
        Ok(Self(bins))
    }

    /// Validate a slice that must hold exactly 12 bins
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` on wrong length or invalid values.
    pub fn from_slice(bins: &[f64]) -> Result<Self> {
        let bins: [f64; 12] = bins.try_into().map_err(|_| {
            AnalysisError::InvalidInput(format!(
                "Chroma vector must have 12 elements, got {}",
                bins.len()
            ))
        })?;
        Self::new(bins)
    }

    /// Bin values, C first
    pub fn bins(&self) -> &[f64; 12] {
        &self.0
    }
}

impl TryFrom<&[f64]> for ChromaVector {
    type Error = AnalysisError;

    fn try_from(bins: &[f64]) -> Result<Self> {
        Self::from_slice(bins)
    }
}

impl TryFrom<Vec<f64>> for ChromaVector {
    type Error = AnalysisError;

    fn try_from(bins: Vec<f64>) -> Result<Self> {
        Self::from_slice(&bins)
    }
}

impl TryFrom<[f64; 12]> for ChromaVector {
    type Error = AnalysisError;

    fn try_from(bins: [f64; 12]) -> Result<Self> {
        Self::new(bins)
    }
}

impl From<ChromaVector> for Vec<f64> {
    fn from(chroma: ChromaVector) -> Self {
        chroma.0.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_unnormalized() {
        let chroma = ChromaVector::new([10.0, 0.0, 3.5, 0.0, 7.0, 2.0, 0.0, 9.0, 0.0, 1.0, 0.0, 4.0]);
        assert!(chroma.is_ok());
        assert_eq!(chroma.unwrap().bins()[0], 10.0);
    }

    #[test]
    fn test_wrong_length() {
        let err = ChromaVector::from_slice(&[1.0; 11]).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::InvalidInput("Chroma vector must have 12 elements, got 11".into())
        );
        assert!(ChromaVector::try_from(vec![0.5; 13]).is_err());
        assert!(ChromaVector::from_slice(&[]).is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        let mut bins = [1.0; 12];
        bins[4] = f64::NAN;
        assert!(matches!(
            ChromaVector::new(bins),
            Err(AnalysisError::InvalidInput(_))
        ));
        bins[4] = f64::INFINITY;
        assert!(ChromaVector::new(bins).is_err());
    }

    #[test]
    fn test_rejects_negative() {
        let mut bins = [1.0; 12];
        bins[11] = -0.1;
        assert!(ChromaVector::new(bins).is_err());
    }

    #[test]
    fn test_serde_validates() {
        let chroma: ChromaVector = serde_json::from_str("[1,0,0,0,1,0,0,1,0,0,0,0]").unwrap();
        assert_eq!(chroma.bins()[7], 1.0);
        assert!(serde_json::from_str::<ChromaVector>("[1,2,3]").is_err());
        assert_eq!(
            serde_json::to_string(&chroma).unwrap(),
            "[1.0,0.0,0.0,0.0,1.0,0.0,0.0,1.0,0.0,0.0,0.0,0.0]"
        );
    }
}
