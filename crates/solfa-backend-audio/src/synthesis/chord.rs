//! Major triad renderer.

use solfa_spec::Note;

use crate::frequency::note_to_frequency;
use crate::normalize::normalize_to_pcm16;

use super::{block_sample_count, sine_wave};

/// Semitone offsets of a major triad: root, major third, perfect fifth.
pub const MAJOR_TRIAD: [i32; 3] = [0, 4, 7];

/// Renders a major triad on `root_note` lasting `duration` seconds.
///
/// The three voices are summed without fades, then normalized to full scale
/// and narrowed to 16 bits.
pub fn render_chord(root_note: Note, duration: f64, sample_rate: u32) -> Vec<i16> {
    let num_samples = block_sample_count(duration, sample_rate);
    let mut mix = vec![0.0_f64; num_samples];

    for offset in MAJOR_TRIAD {
        let frequency = note_to_frequency(root_note.saturating_add(offset));
        for (acc, voice) in mix
            .iter_mut()
            .zip(sine_wave(frequency, num_samples, sample_rate))
        {
            *acc += voice;
        }
    }

    normalize_to_pcm16(&mix)
}
