//! Audio I/O types
//!
//! Handles describing audio for external extraction backends.

pub mod audio_file;

pub use audio_file::AudioFile;
