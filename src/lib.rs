//! # Stratum Tonal
//!
//! Genre-aware musical key estimation and feature assembly for audio analysis
//! front-ends.
//!
//! ## Features
//!
//! - **Key Estimation**: Krumhansl-Schmuckler correlation of a time-averaged
//!   chroma vector against major/minor tonal templates at all 12 tonics
//! - **Genre Templates**: Eight built-in template pairs (general, classical,
//!   jazz, pop, blues, rock, metal, flamenco)
//! - **Feature Assembly**: Key, tempo, pitch and rhythm packaged into one
//!   result from pluggable extraction backends
//! - **Key Signatures**: Circle-of-fifths signatures for MIDI/MusicXML writers
//!
//! ## Quick Start
//!
//! ```
//! use stratum_tonal::estimate_key;
//!
//! // Time-averaged chroma from your extraction front-end (C, C#, ..., B)
//! let chroma = [0.9, 0.1, 0.5, 0.1, 0.7, 0.6, 0.1, 0.8, 0.1, 0.5, 0.1, 0.3];
//!
//! let estimate = estimate_key("pop", &chroma)?;
//! if let Some(label) = estimate.label() {
//!     println!("Key: {} (strength: {:.2})", label, estimate.strength().unwrap_or(0.0));
//! }
//! # Ok::<(), stratum_tonal::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Genre → Template Registry ─┐
//! Chroma ────────────────────┴→ Correlation (12 rotations × 2 modes) → Decision → KeyEstimate
//! ```
//!
//! Chroma extraction, tempo, pitch and onset tracking are external services,
//! plugged in through [`ChromaExtractor`] and [`FeatureBackend`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod io;

// Re-export main types
pub use analysis::features::{FeatureAssembler, FeatureBackend};
pub use analysis::metadata::{AnalysisFlag, AnalysisMetadata};
pub use analysis::result::{Key, KeyEstimate, KeySignature, Mode, MusicalFeatures};
pub use config::{AnalysisConfig, KeyFallback};
pub use error::AnalysisError;
pub use features::chroma::{ChromaExtractor, ChromaVector};
pub use features::key::{estimate_key, Genre, KeyEstimator};
pub use io::AudioFile;
