//! Analysis and result aggregation modules
//!
//! Combines the key estimate with externally extracted features:
//! - Feature assembly (key, tempo, pitch, rhythm)
//! - Result types
//! - Metadata

pub mod features;
pub mod metadata;
pub mod result;

pub use features::{FeatureAssembler, FeatureBackend};
pub use metadata::{AnalysisFlag, AnalysisMetadata};
pub use result::{Key, KeyEstimate, KeySignature, Mode, MusicalFeatures, PITCH_CLASS_NAMES};
