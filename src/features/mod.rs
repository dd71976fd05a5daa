//! Feature modules
//!
//! - Chroma input (validation, frame averaging, extractor boundary)
//! - Key estimation

pub mod chroma;
pub mod key;
