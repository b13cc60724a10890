//! Machine-readable output types for `--json`.

use serde::Serialize;
use solfa_backend_audio::SequenceResult;
use solfa_spec::{BackendError, Note, SequenceRequest, Settings};

/// Top-level `generate --json` document.
#[derive(Debug, Serialize)]
pub struct GenerateOutput {
    /// Whether every round was written.
    pub success: bool,
    /// Base seed for the run.
    pub seed: u32,
    /// Settings used for every round.
    pub settings: Settings,
    /// One entry per generated file.
    pub rounds: Vec<RoundOutput>,
    /// Failure details, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

/// One generated sequence.
#[derive(Debug, Serialize)]
pub struct RoundOutput {
    /// Seed that drove this round's note draw.
    pub seed: u32,
    /// Path of the written file.
    pub path: String,
    /// Bare file name (the answer key).
    pub file_name: String,
    /// "scale" or "chord".
    pub sound_type: String,
    /// Root note of the request.
    pub root_note: Note,
    /// Intro notes, ascending.
    pub intro_notes: Vec<Note>,
    /// Test notes in playback order.
    pub test_notes: Vec<Note>,
    /// Solfege label per test note.
    pub solfege: Vec<String>,
    /// Total samples written.
    pub num_samples: usize,
    /// Total length in seconds.
    pub duration_seconds: f64,
    /// BLAKE3 hash of the PCM data.
    pub pcm_hash: String,
}

impl RoundOutput {
    /// Builds a round entry from a generation result.
    pub fn new(seed: u32, request: &SequenceRequest, result: &SequenceResult) -> Self {
        Self {
            seed,
            path: result.path.display().to_string(),
            file_name: result.file_name.clone(),
            sound_type: request.sound_type.as_str().to_string(),
            root_note: request.root_note,
            intro_notes: result.intro_notes.clone(),
            test_notes: result.test_notes.clone(),
            solfege: result.solfege.clone(),
            num_samples: result.wav.num_samples,
            duration_seconds: result.wav.duration_seconds(),
            pcm_hash: result.wav.pcm_hash.clone(),
        }
    }
}

/// Structured error entry.
#[derive(Debug, Serialize)]
pub struct JsonError {
    /// Stable error code.
    pub code: String,
    /// Error category.
    pub category: String,
    /// Human-readable message.
    pub message: String,
}

impl JsonError {
    /// Builds an entry from any backend error.
    pub fn from_backend<E: BackendError + ?Sized>(err: &E) -> Self {
        Self {
            code: err.code().to_string(),
            category: err.category().to_string(),
            message: err.message(),
        }
    }
}
