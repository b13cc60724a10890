//! Main entry point for sequence generation.
//!
//! A sequence is `intro ++ silence ++ test`. The intro and test segments are
//! each normalized to full scale on their own; no loudness matching happens
//! across the segment boundary.

mod filename;
mod segments;

#[cfg(test)]
mod tests;

use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;
use solfa_spec::{Note, SequenceRequest};

use crate::error::{AudioError, AudioResult};
use crate::frequency::note_to_frequency;
use crate::solfege::{build_solfege_map, DEFAULT_SOLFEGE_SPAN};
use crate::synthesis::Fade;
use crate::wav::{write_wav_file, WavResult};

pub use filename::{
    fallback_file_name, sanitize_label, sequence_file_name, FALLBACK_LABEL, WAV_EXTENSION,
};

/// Relative directory generated files are written to by default.
pub const DEFAULT_OUTPUT_DIR: &str = "test_file_folder";

/// A fully rendered sequence that has not been written anywhere yet.
#[derive(Debug, Clone)]
pub struct RenderedSequence {
    /// Final 16-bit samples: intro, silence, test.
    pub samples: Vec<i16>,
    /// Output file name derived from the test labels.
    pub file_name: String,
    /// Notes played in the intro, ascending.
    pub intro_notes: Vec<Note>,
    /// Test notes in draw (playback) order.
    pub test_notes: Vec<Note>,
    /// Solfege label of each test note, unsanitized.
    pub solfege: Vec<String>,
    /// Sample counts of the intro, silence, and test segments.
    pub segment_lengths: [usize; 3],
}

/// Result of writing a sequence to disk.
#[derive(Debug, Clone)]
pub struct SequenceResult {
    /// Full path of the written file.
    pub path: PathBuf,
    /// Bare file name (also the answer key).
    pub file_name: String,
    /// Notes played in the intro, ascending.
    pub intro_notes: Vec<Note>,
    /// Test notes in playback order.
    pub test_notes: Vec<Note>,
    /// Solfege label of each test note, unsanitized.
    pub solfege: Vec<String>,
    /// Serialized WAV and its PCM hash.
    pub wav: WavResult,
}

/// Renders a sequence in memory.
///
/// Validates the request first; an impossible note draw is reported as
/// [`ValidationError::InvalidSamplingRequest`](solfa_spec::ValidationError::InvalidSamplingRequest).
pub fn render_sequence<R: Rng + ?Sized>(
    request: &SequenceRequest,
    rng: &mut R,
) -> AudioResult<RenderedSequence> {
    request.validate()?;
    let fade = Fade::default();

    let (intro, intro_notes) = segments::render_intro(request, &fade);
    tracing::debug!(
        sound_type = %request.sound_type,
        samples = intro.len(),
        "rendered intro"
    );

    let silence = segments::render_silence(request);

    let test_notes = segments::draw_test_notes(request, rng);
    let solfege_map = build_solfege_map(request.root_note, DEFAULT_SOLFEGE_SPAN);
    let solfege: Vec<String> = test_notes
        .iter()
        .map(|&note| solfege_map.lookup(note).into_owned())
        .collect();
    let test = segments::render_test(request, &test_notes, &fade);
    tracing::debug!(notes = ?test_notes, samples = test.len(), "rendered test notes");

    let file_name = sequence_file_name(request.root_note, &solfege, rng);
    let segment_lengths = [intro.len(), silence.len(), test.len()];

    let mut samples = Vec::with_capacity(segment_lengths.iter().sum());
    samples.extend_from_slice(&intro);
    samples.extend_from_slice(&silence);
    samples.extend_from_slice(&test);

    Ok(RenderedSequence {
        samples,
        file_name,
        intro_notes,
        test_notes,
        solfege,
        segment_lengths,
    })
}

/// Renders a sequence and writes it to `out_dir/<file name>`.
///
/// `out_dir` is created if missing. An existing file with the same name is
/// overwritten. Nothing touches the filesystem when validation fails.
pub fn generate_sequence<R: Rng + ?Sized>(
    request: &SequenceRequest,
    out_dir: &Path,
    rng: &mut R,
) -> AudioResult<SequenceResult> {
    let rendered = render_sequence(request, rng)?;

    fs::create_dir_all(out_dir).map_err(|source| AudioError::CreateOutputDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let path = out_dir.join(&rendered.file_name);
    let wav = write_wav_file(&path, request.sample_rate, &rendered.samples).map_err(|source| {
        AudioError::WriteFile {
            path: path.clone(),
            source,
        }
    })?;

    tracing::info!(
        root_note = request.root_note,
        root_frequency = note_to_frequency(request.root_note),
        path = %path.display(),
        duration = wav.duration_seconds(),
        "wrote sequence"
    );

    Ok(SequenceResult {
        path,
        file_name: rendered.file_name,
        intro_notes: rendered.intro_notes,
        test_notes: rendered.test_notes,
        solfege: rendered.solfege,
        wav,
    })
}
