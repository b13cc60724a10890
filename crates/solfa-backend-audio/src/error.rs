//! Error types for audio backend.

use std::path::PathBuf;

use solfa_spec::{BackendError, ValidationError};
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during sequence generation.
///
/// A silent buffer or a non-finite sample is not an error: both are absorbed
/// by the normalization step.
#[derive(Debug, Error)]
pub enum AudioError {
    /// The request failed validation before any audio was rendered.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The output directory could not be created.
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateOutputDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The WAV file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    WriteFile {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl AudioError {
    /// Returns true if the failure came from a caller precondition rather
    /// than from the filesystem.
    pub fn is_precondition(&self) -> bool {
        matches!(self, AudioError::Validation(_))
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::Validation(ValidationError::InvalidSamplingRequest { .. }) => "AUDIO_001",
            AudioError::Validation(ValidationError::InvalidParameter { .. }) => "AUDIO_002",
            AudioError::CreateOutputDir { .. } => "AUDIO_003",
            AudioError::WriteFile { .. } => "AUDIO_004",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}
