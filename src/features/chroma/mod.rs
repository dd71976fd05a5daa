//! Chroma input modules
//!
//! Pitch-class distribution (12 semitones) as consumed by key estimation:
//! - Validated chroma vector
//! - Frame averaging
//! - External extractor boundary

pub mod extractor;
pub mod vector;

pub use extractor::{average_frames, ChromaExtractor};
pub use vector::ChromaVector;
