//! Key decision from per-mode correlation arrays

use super::correlation::CorrelationResult;
use crate::analysis::result::{Key, KeyEstimate};

/// Pick the winning key from major and minor correlations
///
/// Within each mode the strongest tonic wins, lowest pitch class on ties.
/// Across modes, major is chosen only when strictly stronger than minor;
/// equal strengths resolve to minor. A mode with no defined correlation
/// loses to the other, and if neither has one the key is undetermined.
///
/// # Example
///
/// ```
/// use stratum_tonal::features::key::{decide, CorrelationResult};
/// use stratum_tonal::{Key, KeyEstimate};
///
/// let major = CorrelationResult::from_values([Some(0.5); 12]);
/// let minor = CorrelationResult::from_values([Some(0.5); 12]);
/// assert_eq!(decide(&major, &minor).key(), Some(Key::minor(0)));
///
/// let silent = CorrelationResult::from_values([None; 12]);
/// assert_eq!(decide(&silent, &silent), KeyEstimate::Undetermined);
/// ```
pub fn decide(major: &CorrelationResult, minor: &CorrelationResult) -> KeyEstimate {
    match (major.best(), minor.best()) {
        (Some((major_tonic, major_strength)), Some((_, minor_strength)))
            if major_strength > minor_strength =>
        {
            KeyEstimate::determined(Key::major(major_tonic), major_strength)
        }
        (_, Some((minor_tonic, minor_strength))) => {
            KeyEstimate::determined(Key::minor(minor_tonic), minor_strength)
        }
        (Some((major_tonic, major_strength)), None) => {
            KeyEstimate::determined(Key::major(major_tonic), major_strength)
        }
        (None, None) => KeyEstimate::Undetermined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peaked(tonic: usize, peak: f64) -> CorrelationResult {
        let mut values = [Some(0.0); 12];
        values[tonic] = Some(peak);
        CorrelationResult::from_values(values)
    }

    #[test]
    fn test_major_wins_when_stronger() {
        let estimate = decide(&peaked(7, 0.9), &peaked(4, 0.6));
        assert_eq!(estimate.key(), Some(Key::major(7)));
        assert_eq!(estimate.strength(), Some(0.9));
        assert_eq!(estimate.label(), Some("G major"));
    }

    #[test]
    fn test_minor_wins_when_stronger() {
        let estimate = decide(&peaked(0, 0.6), &peaked(9, 0.85));
        assert_eq!(estimate.key(), Some(Key::minor(9)));
        assert_eq!(estimate.label(), Some("A minor"));
    }

    #[test]
    fn test_equal_strength_resolves_to_minor() {
        let estimate = decide(&peaked(0, 0.75), &peaked(9, 0.75));
        assert_eq!(estimate.key(), Some(Key::minor(9)));
        assert_eq!(estimate.strength(), Some(0.75));
    }

    #[test]
    fn test_tie_within_mode_lowest_tonic() {
        let mut values = [Some(0.2); 12];
        values[2] = Some(0.9);
        values[10] = Some(0.9);
        let major = CorrelationResult::from_values(values);
        let estimate = decide(&major, &peaked(0, 0.1));
        assert_eq!(estimate.key(), Some(Key::major(2)));
    }

    fn single(tonic: usize, value: f64) -> CorrelationResult {
        let mut values = [None; 12];
        values[tonic] = Some(value);
        CorrelationResult::from_values(values)
    }

    #[test]
    fn test_undefined_mode_loses() {
        let undefined = CorrelationResult::from_values([None; 12]);

        let estimate = decide(&single(5, -0.3), &undefined);
        assert_eq!(estimate.key(), Some(Key::major(5)));
        assert_eq!(estimate.strength(), Some(-0.3));

        let estimate = decide(&undefined, &single(1, -0.9));
        assert_eq!(estimate.key(), Some(Key::minor(1)));
        assert_eq!(estimate.strength(), Some(-0.9));
    }

    #[test]
    fn test_both_undefined() {
        let undefined = CorrelationResult::from_values([None; 12]);
        assert_eq!(decide(&undefined, &undefined), KeyEstimate::Undetermined);
    }
}
