//! Template correlation across all 12 tonics
//!
//! For every candidate tonic the template is rotated so its tonic weight sits
//! on that pitch class, and the Pearson correlation coefficient between the
//! chroma vector and the rotated template is taken over the 12 paired bins.
//!
//! # Reference
//!
//! Krumhansl, C. L. (1990). *Cognitive Foundations of Musical Pitch*. Oxford
//! University Press. (Key-finding algorithm, with M. A. Schmuckler.)

use serde::{Deserialize, Serialize};

use super::templates::TonalTemplate;
use crate::features::chroma::ChromaVector;

/// Sum of squared deviations at or below this value, after scaling the
/// largest magnitude to 1, counts as zero variance. Absorbs the rounding left
/// when the mean of a constant vector is not exactly representable.
const VARIANCE_FLOOR: f64 = 1e-24;

/// Correlation per candidate tonic (index = pitch class)
///
/// `None` marks a tonic whose correlation is undefined because the chroma or
/// the template has zero variance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult([Option<f64>; 12]);

impl CorrelationResult {
    /// Wrap precomputed per-tonic values
    pub fn from_values(values: [Option<f64>; 12]) -> Self {
        Self(values)
    }

    /// All 12 values, C first
    pub fn values(&self) -> &[Option<f64>; 12] {
        &self.0
    }

    /// Value at `tonic`
    pub fn get(&self, tonic: usize) -> Option<f64> {
        self.0.get(tonic).copied().flatten()
    }

    /// True if every value is undefined
    pub fn is_undefined(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// Best tonic and its value
    ///
    /// Ties go to the lowest pitch-class index; undefined values rank below
    /// every defined one. `None` if every value is undefined.
    pub fn best(&self) -> Option<(u8, f64)> {
        let mut best: Option<(u8, f64)> = None;
        for (tonic, value) in self.0.iter().enumerate() {
            if let Some(value) = *value {
                match best {
                    Some((_, current)) if value <= current => {}
                    _ => best = Some((tonic as u8, value)),
                }
            }
        }
        best
    }
}

/// Correlate `chroma` with `template` rotated to every tonic
///
/// # Example
///
/// ```
/// use stratum_tonal::features::chroma::ChromaVector;
/// use stratum_tonal::features::key::{correlate, Genre};
///
/// let template = Genre::General.profile().major();
/// let chroma = ChromaVector::new(*template.weights())?;
/// let result = correlate(&chroma, template);
///
/// assert!((result.get(0).unwrap() - 1.0).abs() < 1e-9);
/// # Ok::<(), stratum_tonal::AnalysisError>(())
/// ```
pub fn correlate(chroma: &ChromaVector, template: &TonalTemplate) -> CorrelationResult {
    let mut values = [None; 12];
    for (tonic, slot) in values.iter_mut().enumerate() {
        *slot = pearson(chroma.bins(), &template.rotated(tonic));
    }
    CorrelationResult(values)
}

/// Pearson correlation of two 12-sample series, `None` on zero variance
///
/// Both series are scaled to a peak magnitude of 1 first so the squared
/// deviations neither overflow nor underflow for any finite input.
fn pearson(x: &[f64; 12], y: &[f64; 12]) -> Option<f64> {
    let x = unit_peak(x)?;
    let y = unit_peak(y)?;

    let x_mean = x.iter().sum::<f64>() / 12.0;
    let y_mean = y.iter().sum::<f64>() / 12.0;

    let mut cov = 0.0;
    let mut x_sq = 0.0;
    let mut y_sq = 0.0;
    for (&xi, &yi) in x.iter().zip(&y) {
        let xd = xi - x_mean;
        let yd = yi - y_mean;
        cov += xd * yd;
        x_sq += xd * xd;
        y_sq += yd * yd;
    }

    if x_sq <= VARIANCE_FLOOR || y_sq <= VARIANCE_FLOOR {
        return None;
    }

    Some((cov / (x_sq * y_sq).sqrt()).clamp(-1.0, 1.0))
}

/// Divide by the largest magnitude; `None` for an all-zero series
fn unit_peak(values: &[f64; 12]) -> Option<[f64; 12]> {
    let peak = values.iter().fold(0.0f64, |m, v| m.max(v.abs()));
    if peak == 0.0 {
        return None;
    }
    Some(values.map(|v| v / peak))
}
