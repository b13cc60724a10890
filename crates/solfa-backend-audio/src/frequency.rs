//! Note number to frequency conversion.

use solfa_spec::{Note, A4_FREQUENCY, A4_NOTE, SEMITONES_PER_OCTAVE};

/// Converts a note number to its fundamental frequency in Hz.
///
/// Uses the equal-temperament formula: f = 440 * 2^((n-69)/12).
/// Any integer is accepted; there is no clamping, so extreme notes give
/// vanishingly small or very large frequencies.
///
/// # Examples
/// ```
/// use solfa_backend_audio::note_to_frequency;
///
/// assert!((note_to_frequency(69) - 440.0).abs() < 1e-9);
/// assert!((note_to_frequency(60) - 261.626).abs() < 0.01);
/// ```
pub fn note_to_frequency(note: Note) -> f64 {
    A4_FREQUENCY * 2.0_f64.powf((note as f64 - A4_NOTE as f64) / SEMITONES_PER_OCTAVE as f64)
}
