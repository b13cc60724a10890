//! Intro, silence, and test segment rendering.

use rand::seq::index;
use rand::Rng;
use solfa_spec::{Note, SequenceRequest, SoundType};

use crate::frequency::note_to_frequency;
use crate::normalize::renormalize_pcm16;
use crate::synthesis::{block_sample_count, render_chord, render_note, Fade, MAJOR_TRIAD};

/// Renders the intro segment and returns it with the notes it contains.
///
/// A chord intro is one triad on the root. A scale intro is the first
/// `min(num_notes, note_range)` notes upward from the root, each getting an
/// equal share of the intro duration.
pub(crate) fn render_intro(request: &SequenceRequest, fade: &Fade) -> (Vec<i16>, Vec<Note>) {
    let intro_duration = request.settings.intro_duration;

    let (samples, notes) = match request.sound_type {
        SoundType::Chord => {
            let notes = MAJOR_TRIAD
                .iter()
                .map(|&offset| request.root_note.saturating_add(offset))
                .collect();
            (
                render_chord(request.root_note, intro_duration, request.sample_rate),
                notes,
            )
        }
        SoundType::Scale => {
            let notes: Vec<Note> = (0..request.intro_note_count() as i32)
                .map(|i| request.root_note + i)
                .collect();
            let note_duration = intro_duration / notes.len() as f64;
            let samples = notes
                .iter()
                .flat_map(|&note| {
                    render_note(
                        note_to_frequency(note),
                        note_duration,
                        request.sample_rate,
                        fade,
                    )
                })
                .collect();
            (samples, notes)
        }
    };

    (renormalize_pcm16(&samples), notes)
}

/// All-zero gap between intro and test segments.
pub(crate) fn render_silence(request: &SequenceRequest) -> Vec<i16> {
    vec![0; block_sample_count(request.settings.space_duration, request.sample_rate)]
}

/// Draws `num_notes` distinct notes from `[root_note, root_note + note_range)`.
///
/// The request must already be validated; draw order is preserved.
pub(crate) fn draw_test_notes<R: Rng + ?Sized>(request: &SequenceRequest, rng: &mut R) -> Vec<Note> {
    index::sample(rng, request.note_range, request.num_notes)
        .into_iter()
        .map(|i| request.root_note + i as i32)
        .collect()
}

/// Renders each test note at full test duration, in draw order.
pub(crate) fn render_test(request: &SequenceRequest, notes: &[Note], fade: &Fade) -> Vec<i16> {
    let samples: Vec<i16> = notes
        .iter()
        .flat_map(|&note| {
            render_note(
                note_to_frequency(note),
                request.settings.test_duration,
                request.sample_rate,
                fade,
            )
        })
        .collect();

    renormalize_pcm16(&samples)
}
