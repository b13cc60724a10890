//! Tone synthesis: single notes with fades and major triads.
//!
//! Both renderers produce full-scale 16-bit buffers via the shared
//! [`normalize_to_pcm16`](crate::normalize::normalize_to_pcm16) step.

mod chord;
mod note;

pub use chord::{render_chord, MAJOR_TRIAD};
pub use note::{render_note, Fade};

use std::f64::consts::TAU;

/// Number of samples for a note of `duration` seconds.
///
/// Rounds up, so a fractional trailing sample is kept. Zero, negative, and
/// non-finite durations yield 0.
pub fn note_sample_count(duration: f64, sample_rate: u32) -> usize {
    let n = duration * sample_rate as f64;
    if n.is_finite() && n > 0.0 {
        n.ceil() as usize
    } else {
        0
    }
}

/// Number of samples for a fixed-length block (chord or silence) of
/// `duration` seconds. Truncates toward zero.
pub fn block_sample_count(duration: f64, sample_rate: u32) -> usize {
    let n = duration * sample_rate as f64;
    if n.is_finite() && n > 0.0 {
        n as usize
    } else {
        0
    }
}

/// Unit-amplitude sine wave, phase 0 at sample index 0.
pub(crate) fn sine_wave(frequency: f64, num_samples: usize, sample_rate: u32) -> Vec<f64> {
    let step = TAU * frequency / sample_rate as f64;
    (0..num_samples).map(|i| (step * i as f64).sin()).collect()
}
