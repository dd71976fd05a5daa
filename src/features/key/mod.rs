//! Key estimation modules
//!
//! Estimate the global musical key with:
//! - Genre-conditioned tonal templates (major/minor pairs)
//! - Pearson correlation at all 12 tonic rotations
//! - Deterministic key decision

pub mod correlation;
pub mod decision;
pub mod estimator;
pub mod templates;

pub use correlation::{correlate, CorrelationResult};
pub use decision::decide;
pub use estimator::{estimate_key, KeyEstimator};
pub use templates::{Genre, GenreProfile, TonalTemplate};
