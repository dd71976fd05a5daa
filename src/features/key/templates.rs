//! Genre-conditioned tonal templates
//!
//! Each genre carries a major and a minor 12-element profile describing the
//! expected stability of every scale degree, starting at the tonic. The
//! classical pair is the Krumhansl-Kessler probe-tone profile; the others
//! are empirically calibrated variants and can be swapped independently
//! without touching the correlation or decision logic.
//!
//! The registry is a static table, so it is fully built before first use and
//! can be shared across threads without synchronization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analysis::result::Mode;

/// A 12-element tonal profile, index 0 = tonic
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TonalTemplate([f64; 12]);

impl TonalTemplate {
    /// Wrap 12 profile weights
    pub const fn new(weights: [f64; 12]) -> Self {
        Self(weights)
    }

    /// Profile weights, tonic first
    pub fn weights(&self) -> &[f64; 12] {
        &self.0
    }

    /// Template shifted so that scale degree 0 lands on pitch class `tonic`
    ///
    /// `rotated(r)[i] == weights[(i - r) mod 12]`.
    pub fn rotated(&self, tonic: usize) -> [f64; 12] {
        let shift = tonic % 12;
        let mut out = [0.0; 12];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.0[(i + 12 - shift) % 12];
        }
        out
    }
}

/// Genre selector for template choice
///
/// Deserializes leniently: unknown identifiers become [`Genre::General`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Genre {
    /// Default profile
    #[default]
    General,
    /// Krumhansl-Kessler profile
    Classical,
    /// Jazz
    Jazz,
    /// Pop
    Pop,
    /// Blues
    Blues,
    /// Rock
    Rock,
    /// Metal
    Metal,
    /// Flamenco (Phrygian-leaning)
    Flamenco,
}

impl Genre {
    /// Every built-in genre, in registry order
    pub const ALL: [Genre; 8] = [
        Genre::General,
        Genre::Classical,
        Genre::Jazz,
        Genre::Pop,
        Genre::Blues,
        Genre::Rock,
        Genre::Metal,
        Genre::Flamenco,
    ];

    /// Resolve a genre identifier, case-insensitively
    ///
    /// Unknown or empty identifiers resolve to [`Genre::General`].
    ///
    /// # Example
    ///
    /// ```
    /// use stratum_tonal::Genre;
    ///
    /// assert_eq!(Genre::from_name("Jazz"), Genre::Jazz);
    /// assert_eq!(Genre::from_name(" METAL "), Genre::Metal);
    /// assert_eq!(Genre::from_name("polka"), Genre::General);
    /// ```
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|g| g.name().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }

    /// Lowercase identifier ("general", "jazz", ...)
    pub fn name(&self) -> &'static str {
        match self {
            Genre::General => "general",
            Genre::Classical => "classical",
            Genre::Jazz => "jazz",
            Genre::Pop => "pop",
            Genre::Blues => "blues",
            Genre::Rock => "rock",
            Genre::Metal => "metal",
            Genre::Flamenco => "flamenco",
        }
    }

    /// Template pair for this genre
    pub fn profile(&self) -> &'static GenreProfile {
        GenreProfile::for_genre(*self)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl From<String> for Genre {
    fn from(name: String) -> Self {
        Genre::from_name(&name)
    }
}

impl FromStr for Genre {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Genre::from_name(s))
    }
}

/// Major/minor template pair for one genre
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenreProfile {
    genre: Genre,
    major: TonalTemplate,
    minor: TonalTemplate,
}

impl GenreProfile {
    /// Profile registered for `genre`
    pub fn for_genre(genre: Genre) -> &'static GenreProfile {
        // PROFILES is laid out in `Genre::ALL` order
        &PROFILES[genre as usize]
    }

    /// Profile for a genre identifier; unknown identifiers get the general profile
    pub fn lookup(name: &str) -> &'static GenreProfile {
        Self::for_genre(Genre::from_name(name))
    }

    /// Genre this profile belongs to
    pub fn genre(&self) -> Genre {
        self.genre
    }

    /// Major-mode template
    pub fn major(&self) -> &TonalTemplate {
        &self.major
    }

    /// Minor-mode template
    pub fn minor(&self) -> &TonalTemplate {
        &self.minor
    }

    /// Template for `mode`
    pub fn template(&self, mode: Mode) -> &TonalTemplate {
        match mode {
            Mode::Major => &self.major,
            Mode::Minor => &self.minor,
        }
    }
}

const fn profile(genre: Genre, major: [f64; 12], minor: [f64; 12]) -> GenreProfile {
    GenreProfile {
        genre,
        major: TonalTemplate::new(major),
        minor: TonalTemplate::new(minor),
    }
}

static PROFILES: [GenreProfile; 8] = [
    profile(
        Genre::General,
        [6.0, 2.5, 3.5, 2.5, 4.0, 4.0, 2.5, 5.0, 3.0, 3.5, 2.5, 3.0],
        [6.0, 2.5, 3.5, 5.0, 3.0, 3.5, 2.5, 4.8, 4.0, 3.0, 3.5, 3.0],
    ),
    profile(
        Genre::Classical,
        [6.35, 2.23, 3.48, 2.33, 4.38, 4.09, 2.52, 5.19, 2.39, 3.66, 2.29, 2.88],
        [6.33, 2.68, 3.52, 5.38, 2.60, 3.53, 2.54, 4.75, 3.98, 2.69, 3.34, 3.17],
    ),
    profile(
        Genre::Jazz,
        [5.35, 2.5, 3.3, 3.0, 4.0, 4.5, 2.8, 5.5, 3.5, 4.0, 3.2, 3.5],
        [5.2, 3.0, 3.6, 5.0, 3.5, 3.6, 3.0, 5.0, 4.0, 3.8, 3.4, 3.5],
    ),
    profile(
        Genre::Pop,
        [6.5, 2.5, 3.5, 2.0, 4.5, 4.0, 3.0, 5.0, 3.0, 4.5, 2.0, 2.5],
        [6.3, 2.9, 3.7, 5.0, 3.0, 3.5, 2.8, 4.8, 4.2, 2.7, 3.5, 2.8],
    ),
    profile(
        Genre::Blues,
        [5.8, 2.3, 4.5, 3.2, 4.1, 3.8, 2.6, 4.9, 3.4, 3.7, 2.1, 2.9],
        [5.9, 3.1, 3.4, 4.9, 3.7, 3.6, 2.7, 4.2, 4.5, 3.2, 2.7, 3.0],
    ),
    profile(
        Genre::Rock,
        [6.6, 2.6, 3.4, 2.0, 4.3, 4.2, 3.2, 5.1, 3.1, 4.2, 2.3, 2.7],
        [6.4, 2.8, 3.9, 5.1, 3.1, 3.2, 2.6, 4.9, 4.3, 2.5, 3.4, 2.6],
    ),
    profile(
        Genre::Metal,
        [5.9, 2.0, 3.0, 3.8, 4.4, 4.1, 2.9, 5.5, 3.0, 4.0, 3.2, 3.4],
        [6.5, 3.2, 3.7, 5.2, 2.9, 3.9, 2.8, 4.8, 4.0, 3.1, 3.6, 2.7],
    ),
    profile(
        Genre::Flamenco,
        [5.2, 2.5, 4.1, 2.7, 3.9, 4.6, 3.1, 5.0, 2.9, 3.8, 2.6, 3.4],
        [5.8, 3.0, 3.6, 4.7, 3.1, 3.9, 3.2, 4.9, 3.8, 2.9, 2.7, 3.5],
    ),
];
