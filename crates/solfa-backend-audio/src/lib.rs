//! Solfa Audio Backend
//!
//! This crate turns a [`SequenceRequest`](solfa_spec::SequenceRequest) into a
//! playable ear-training WAV file:
//!
//! 1. An **intro** (an ascending scale run or a major triad on the root)
//! 2. A stretch of **silence**
//! 3. A **test** segment of randomly drawn, distinct notes
//!
//! The output file is named after the solfege syllables of the test notes, in
//! playback order, so the answer travels with the audio.
//!
//! # Determinism
//!
//! The only randomness is the test note draw (and the rare fallback file
//! name). Both take an injected [`rand::Rng`]; seeding it through
//! [`rng::create_rng`] gives byte-identical output for the same request.
//!
//! # Example
//!
//! ```no_run
//! use solfa_backend_audio::{generate_sequence, rng::create_rng};
//! use solfa_spec::SequenceRequest;
//! use std::path::Path;
//!
//! let request = SequenceRequest::builder(60).build();
//! let mut rng = create_rng(42);
//! let result = generate_sequence(&request, Path::new("test_file_folder"), &mut rng)?;
//! println!("{}", result.file_name);
//! # Ok::<(), solfa_backend_audio::AudioError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`frequency`] - Note to frequency conversion
//! - [`normalize`] - Shared normalize-scrub-narrow primitive
//! - [`synthesis`] - Single-note and triad renderers
//! - [`solfege`] - Solfege syllable labeling
//! - [`generate`] - Sequence assembly and file naming
//! - [`rng`] - Deterministic RNG with seed derivation
//! - [`wav`] - Deterministic WAV writer

pub mod error;
pub mod frequency;
pub mod generate;
pub mod normalize;
pub mod rng;
pub mod solfege;
pub mod synthesis;
pub mod wav;

pub use error::{AudioError, AudioResult};
pub use frequency::note_to_frequency;
pub use generate::{
    generate_sequence, render_sequence, RenderedSequence, SequenceResult, DEFAULT_OUTPUT_DIR,
};
pub use solfege::{build_solfege_map, SolfegeMap};
pub use synthesis::{render_chord, render_note, Fade};
pub use wav::{write_wav_file, WavResult};
