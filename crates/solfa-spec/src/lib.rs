//! Solfa Request Types
//!
//! This crate holds the plain data that flows into the Solfa audio backend:
//!
//! - **Note**: a semitone-indexed pitch identifier (MIDI numbering, 69 = A4)
//! - **SoundType**: whether the intro is a scale run or a major triad
//! - **Settings**: the three timing durations the listener can tune
//! - **SequenceRequest**: one full generation request, with validation
//!
//! Nothing here touches the filesystem or produces audio; the backend crate
//! consumes these values and the CLI owns persistence.
//!
//! # Example
//!
//! ```
//! use solfa_spec::{SequenceRequest, Settings, SoundType};
//!
//! let request = SequenceRequest::builder(60)
//!     .sound_type(SoundType::Chord)
//!     .settings(Settings::default())
//!     .num_notes(3)
//!     .note_range(12)
//!     .build();
//!
//! assert!(request.validate().is_ok());
//! ```

pub mod error;
pub mod note;
pub mod request;
pub mod settings;

pub use error::{BackendError, ValidationError};
pub use note::{Note, SoundType, A4_FREQUENCY, A4_NOTE, SEMITONES_PER_OCTAVE};
pub use request::{
    SequenceRequest, SequenceRequestBuilder, DEFAULT_NOTE_RANGE, DEFAULT_NUM_NOTES,
    DEFAULT_ROOT_NOTE, DEFAULT_SAMPLE_RATE, MAX_SAMPLE_RATE,
};
pub use settings::Settings;
