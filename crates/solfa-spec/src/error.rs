//! Error types for request validation.

use thiserror::Error;

/// Trait for errors surfaced by Solfa backends.
///
/// Gives callers a stable code and a category so failures can be reported
/// uniformly regardless of which crate produced them.
pub trait BackendError: std::error::Error {
    /// Stable error code such as "SPEC_001" or "AUDIO_003".
    fn code(&self) -> &'static str;

    /// Human-readable message. Defaults to the `Display` output.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Error category for grouping ("spec", "audio").
    fn category(&self) -> &'static str;
}

/// Errors raised when a sequence request cannot be honored.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// More test notes were requested than the range can supply without repeats.
    #[error(
        "cannot draw {num_notes} distinct notes from a range of {note_range} semitones"
    )]
    InvalidSamplingRequest {
        /// Requested number of test notes.
        num_notes: usize,
        /// Size of the semitone range the notes are drawn from.
        note_range: usize,
    },

    /// A request field is outside its accepted domain.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Field name.
        name: String,
        /// What is wrong with it.
        message: String,
    },
}

impl ValidationError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl BackendError for ValidationError {
    fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidSamplingRequest { .. } => "SPEC_001",
            ValidationError::InvalidParameter { .. } => "SPEC_002",
        }
    }

    fn category(&self) -> &'static str {
        "spec"
    }
}
