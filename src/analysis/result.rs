//! Key estimation result types

use std::fmt;

use serde::{Deserialize, Serialize};

use super::metadata::AnalysisMetadata;

/// Pitch-class names, sharp spellings only (0 = C, 1 = C#, ..., 11 = B)
pub const PITCH_CLASS_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Tonal mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Major mode
    Major,
    /// Minor mode
    Minor,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Major => write!(f, "major"),
            Mode::Minor => write!(f, "minor"),
        }
    }
}

/// Musical key: tonic pitch class plus mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    /// Tonic pitch class (0 = C, 1 = C#, ..., 11 = B)
    pub tonic: u8,
    /// Major or minor
    pub mode: Mode,
}

impl Key {
    /// Major key on `tonic` (wrapped into 0-11)
    pub fn major(tonic: u8) -> Self {
        Self {
            tonic: tonic % 12,
            mode: Mode::Major,
        }
    }

    /// Minor key on `tonic` (wrapped into 0-11)
    pub fn minor(tonic: u8) -> Self {
        Self {
            tonic: tonic % 12,
            mode: Mode::Minor,
        }
    }

    /// Name of the tonic pitch class ("C", "F#", ...)
    pub fn tonic_name(&self) -> &'static str {
        PITCH_CLASS_NAMES[self.tonic as usize % 12]
    }

    /// Human-readable label, e.g. "C major" or "F# minor"
    ///
    /// # Example
    ///
    /// ```
    /// use stratum_tonal::Key;
    ///
    /// assert_eq!(Key::major(0).name(), "C major");
    /// assert_eq!(Key::minor(9).name(), "A minor");
    /// assert_eq!(Key::minor(10).name(), "A# minor");
    /// ```
    pub fn name(&self) -> String {
        format!("{} {}", self.tonic_name(), self.mode)
    }

    /// Key signature an exporter should write for this key
    ///
    /// Minor keys share the signature of their relative major (three
    /// semitones up). The tonic is placed on the circle of fifths and folded
    /// into -6..=6, flats negative. F# major is written with six sharps,
    /// C# major as Db with five flats.
    ///
    /// # Example
    ///
    /// ```
    /// use stratum_tonal::Key;
    ///
    /// assert_eq!(Key::major(7).key_signature().fifths, 1);  // G: one sharp
    /// assert_eq!(Key::major(5).key_signature().fifths, -1); // F: one flat
    /// assert_eq!(Key::minor(9).key_signature().fifths, 0);  // A minor
    /// ```
    pub fn key_signature(&self) -> KeySignature {
        let relative_major = match self.mode {
            Mode::Major => self.tonic as i32 % 12,
            Mode::Minor => (self.tonic as i32 + 3) % 12,
        };
        // Seven semitones per fifth, so 7 * pc mod 12 is the circle position
        let position = (relative_major * 7) % 12;
        let fifths = if position > 6 { position - 12 } else { position };

        KeySignature {
            fifths: fifths as i8,
            mode: self.mode,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tonic_name(), self.mode)
    }
}

/// Key signature in the form MIDI and MusicXML writers consume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySignature {
    /// Sharps (positive) or flats (negative), -6..=6
    pub fifths: i8,
    /// Mode of the key
    pub mode: Mode,
}

impl KeySignature {
    /// Data bytes of the Standard MIDI File key-signature meta event (`sf`, `mi`)
    pub fn midi_meta_bytes(&self) -> [u8; 2] {
        let mi = match self.mode {
            Mode::Major => 0,
            Mode::Minor => 1,
        };
        [self.fifths as u8, mi]
    }
}

/// Outcome of a single key estimation
///
/// `Undetermined` is returned when the chroma carries no tonal information
/// (silence, constant energy) and no key can be ranked above another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum KeyEstimate {
    /// A key was found
    Determined {
        /// Winning key
        key: Key,
        /// Pearson correlation of the winning template rotation, in [-1, 1]
        strength: f64,
        /// Rendered label, e.g. "C major"
        label: String,
    },
    /// No key could be ranked (degenerate input)
    Undetermined,
}

impl KeyEstimate {
    /// Build a determined estimate, rendering its label
    pub fn determined(key: Key, strength: f64) -> Self {
        KeyEstimate::Determined {
            key,
            strength,
            label: key.name(),
        }
    }

    /// True unless the estimate is undetermined
    pub fn is_determined(&self) -> bool {
        matches!(self, KeyEstimate::Determined { .. })
    }

    /// Winning key, if any
    pub fn key(&self) -> Option<Key> {
        match self {
            KeyEstimate::Determined { key, .. } => Some(*key),
            KeyEstimate::Undetermined => None,
        }
    }

    /// Correlation strength of the winning key, if any
    pub fn strength(&self) -> Option<f64> {
        match self {
            KeyEstimate::Determined { strength, .. } => Some(*strength),
            KeyEstimate::Undetermined => None,
        }
    }

    /// Rendered label, if any
    pub fn label(&self) -> Option<&str> {
        match self {
            KeyEstimate::Determined { label, .. } => Some(label),
            KeyEstimate::Undetermined => None,
        }
    }
}

impl fmt::Display for KeyEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyEstimate::Determined { label, strength, .. } => {
                write!(f, "{} ({:.3})", label, strength)
            }
            KeyEstimate::Undetermined => write!(f, "undetermined"),
        }
    }
}

/// Aggregate of all musical features extracted for one audio file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MusicalFeatures {
    /// Tempo estimate in BPM
    pub tempo_bpm: f64,

    /// Estimated global key
    pub key: KeyEstimate,

    /// Voiced pitch values in Hz (possibly truncated, see `AnalysisConfig::max_pitch_values`)
    pub pitch_hz: Vec<f64>,

    /// Beat times in seconds
    pub rhythm_seconds: Vec<f64>,

    /// Analysis metadata
    pub metadata: AnalysisMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_name_major() {
        assert_eq!(Key::major(0).name(), "C major");
        assert_eq!(Key::major(1).name(), "C# major");
        assert_eq!(Key::major(6).name(), "F# major");
        assert_eq!(Key::major(11).name(), "B major");
    }

    #[test]
    fn test_key_name_minor() {
        assert_eq!(Key::minor(0).name(), "C minor");
        assert_eq!(Key::minor(3).name(), "D# minor");
        assert_eq!(Key::minor(9).name(), "A minor");
        assert_eq!(Key::minor(8).name(), "G# minor");
    }

    #[test]
    fn test_tonic_wraps() {
        assert_eq!(Key::major(14), Key::major(2));
        assert_eq!(Key::minor(12).tonic, 0);
    }

    #[test]
    fn test_display_matches_name() {
        for tonic in 0..12 {
            let key = Key::minor(tonic);
            assert_eq!(key.to_string(), key.name());
        }
    }

    #[test]
    fn test_key_signature_major() {
        // Circle of fifths: C G D A E B F# | Db Ab Eb Bb F
        let expected: [(u8, i8); 12] = [
            (0, 0),
            (7, 1),
            (2, 2),
            (9, 3),
            (4, 4),
            (11, 5),
            (6, 6),
            (1, -5),
            (8, -4),
            (3, -3),
            (10, -2),
            (5, -1),
        ];
        for (tonic, fifths) in expected {
            assert_eq!(
                Key::major(tonic).key_signature().fifths,
                fifths,
                "major tonic {}",
                tonic
            );
        }
    }

    #[test]
    fn test_key_signature_minor_uses_relative_major() {
        assert_eq!(Key::minor(9).key_signature().fifths, 0); // Am ~ C
        assert_eq!(Key::minor(4).key_signature().fifths, 1); // Em ~ G
        assert_eq!(Key::minor(2).key_signature().fifths, -1); // Dm ~ F
        assert_eq!(Key::minor(0).key_signature().fifths, -3); // Cm ~ Eb
        assert_eq!(Key::minor(3).key_signature().fifths, 6); // D#m ~ F#
    }

    #[test]
    fn test_midi_meta_bytes() {
        assert_eq!(Key::major(7).key_signature().midi_meta_bytes(), [1, 0]);
        assert_eq!(Key::minor(2).key_signature().midi_meta_bytes(), [0xFF, 1]);
    }

    #[test]
    fn test_estimate_accessors() {
        let estimate = KeyEstimate::determined(Key::minor(9), 0.82);
        assert!(estimate.is_determined());
        assert_eq!(estimate.key(), Some(Key::minor(9)));
        assert_eq!(estimate.strength(), Some(0.82));
        assert_eq!(estimate.label(), Some("A minor"));
        assert_eq!(estimate.to_string(), "A minor (0.820)");

        let undetermined = KeyEstimate::Undetermined;
        assert!(!undetermined.is_determined());
        assert_eq!(undetermined.key(), None);
        assert_eq!(undetermined.strength(), None);
        assert_eq!(undetermined.label(), None);
        assert_eq!(undetermined.to_string(), "undetermined");
    }
}
