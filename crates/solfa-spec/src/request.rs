//! Sequence generation requests.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::note::{Note, SoundType};
use crate::settings::Settings;

/// Default root note (middle C).
pub const DEFAULT_ROOT_NOTE: Note = 60;

/// Default number of test notes.
pub const DEFAULT_NUM_NOTES: usize = 8;

/// Default semitone range the test notes are drawn from (one octave).
pub const DEFAULT_NOTE_RANGE: usize = 12;

/// Default output sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Highest accepted sample rate in Hz.
pub const MAX_SAMPLE_RATE: u32 = 768_000;

/// A single request to build an intro + silence + test sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceRequest {
    /// Intro flavor.
    pub sound_type: SoundType,
    /// Intro, test note, and gap durations.
    pub settings: Settings,
    /// Anchor note for the intro, the test range, and solfege naming.
    pub root_note: Note,
    /// How many distinct test notes to draw.
    pub num_notes: usize,
    /// Test notes are drawn from `[root_note, root_note + note_range)`.
    pub note_range: usize,
    /// Output sample rate in Hz.
    pub sample_rate: u32,
}

impl SequenceRequest {
    /// Creates a builder anchored at `root_note` with default values elsewhere.
    pub fn builder(root_note: Note) -> SequenceRequestBuilder {
        SequenceRequestBuilder::new(root_note)
    }

    /// Checks the request's preconditions.
    ///
    /// Drawing without replacement requires `num_notes <= note_range`; a
    /// request that violates this is reported rather than truncated.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sample_rate == 0 {
            return Err(ValidationError::invalid_param(
                "sample_rate",
                "must be greater than 0",
            ));
        }
        if self.sample_rate > MAX_SAMPLE_RATE {
            return Err(ValidationError::invalid_param(
                "sample_rate",
                format!("must be at most {} Hz", MAX_SAMPLE_RATE),
            ));
        }
        if self.num_notes == 0 {
            return Err(ValidationError::invalid_param(
                "num_notes",
                "must be at least 1",
            ));
        }
        if self.note_range == 0 {
            return Err(ValidationError::invalid_param(
                "note_range",
                "must be at least 1 semitone",
            ));
        }
        if self.num_notes > self.note_range {
            return Err(ValidationError::InvalidSamplingRequest {
                num_notes: self.num_notes,
                note_range: self.note_range,
            });
        }
        let fits = i32::try_from(self.note_range)
            .ok()
            .and_then(|range| self.root_note.checked_add(range))
            .is_some();
        if !fits {
            return Err(ValidationError::invalid_param(
                "note_range",
                format!(
                    "{} semitones above note {} overflows the note numbering",
                    self.note_range, self.root_note
                ),
            ));
        }
        Ok(())
    }

    /// Number of notes in the scale intro: `min(num_notes, note_range)`.
    pub fn intro_note_count(&self) -> usize {
        self.num_notes.min(self.note_range)
    }

    /// Exclusive upper bound of the test note range.
    ///
    /// Only meaningful after [`validate`](Self::validate) has succeeded.
    pub fn range_end(&self) -> Note {
        self.root_note.saturating_add(self.note_range as i32)
    }
}

/// Builder for [`SequenceRequest`].
#[derive(Debug, Clone)]
pub struct SequenceRequestBuilder {
    request: SequenceRequest,
}

impl SequenceRequestBuilder {
    /// Creates a builder with default settings anchored at `root_note`.
    pub fn new(root_note: Note) -> Self {
        Self {
            request: SequenceRequest {
                sound_type: SoundType::default(),
                settings: Settings::default(),
                root_note,
                num_notes: DEFAULT_NUM_NOTES,
                note_range: DEFAULT_NOTE_RANGE,
                sample_rate: DEFAULT_SAMPLE_RATE,
            },
        }
    }

    /// Sets the intro sound type.
    pub fn sound_type(mut self, sound_type: SoundType) -> Self {
        self.request.sound_type = sound_type;
        self
    }

    /// Sets all three durations.
    pub fn settings(mut self, settings: Settings) -> Self {
        self.request.settings = settings;
        self
    }

    /// Sets the number of test notes.
    pub fn num_notes(mut self, num_notes: usize) -> Self {
        self.request.num_notes = num_notes;
        self
    }

    /// Sets the semitone range for test notes.
    pub fn note_range(mut self, note_range: usize) -> Self {
        self.request.note_range = note_range;
        self
    }

    /// Sets the output sample rate.
    pub fn sample_rate(mut self, sample_rate: u32) -> Self {
        self.request.sample_rate = sample_rate;
        self
    }

    /// Finishes the builder. Validation is left to the caller.
    pub fn build(self) -> SequenceRequest {
        self.request
    }
}
