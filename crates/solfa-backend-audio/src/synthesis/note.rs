//! Single sine-tone renderer with linear fades.

use crate::normalize::{normalize, normalize_to_pcm16, PEAK_AMPLITUDE};

use super::{note_sample_count, sine_wave};

/// Linear fade-in and fade-out lengths, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    /// Ramp 0 -> 1 at the start of the note.
    pub fade_in: f64,
    /// Ramp 1 -> 0 at the end of the note.
    pub fade_out: f64,
}

impl Fade {
    /// Creates a fade shape.
    pub fn new(fade_in: f64, fade_out: f64) -> Self {
        Self { fade_in, fade_out }
    }

    fn sample_counts(&self, sample_rate: u32) -> (usize, usize) {
        let count = |seconds: f64| {
            let n = seconds * sample_rate as f64;
            if n.is_finite() && n > 0.0 {
                n as usize
            } else {
                0
            }
        };
        (count(self.fade_in), count(self.fade_out))
    }
}

impl Default for Fade {
    fn default() -> Self {
        Self::new(0.01, 0.1)
    }
}

/// Renders a sine tone of `duration` seconds at `frequency` Hz.
///
/// When the tone is longer than both fades together, the first and last
/// samples are shaped by linear ramps. Shorter tones skip the fades and are
/// only peak-normalized. Either way the result is normalized to full scale
/// and narrowed to 16 bits; a zero or negative duration gives an empty
/// buffer.
pub fn render_note(frequency: f64, duration: f64, sample_rate: u32, fade: &Fade) -> Vec<i16> {
    let num_samples = note_sample_count(duration, sample_rate);
    let mut waveform = sine_wave(frequency, num_samples, sample_rate);

    let (fade_in_samples, fade_out_samples) = fade.sample_counts(sample_rate);
    if waveform.len() > fade_in_samples + fade_out_samples {
        apply_fade_in(&mut waveform[..fade_in_samples]);
        let tail_start = waveform.len() - fade_out_samples;
        apply_fade_out(&mut waveform[tail_start..]);
    } else {
        normalize(&mut waveform, PEAK_AMPLITUDE);
    }

    normalize_to_pcm16(&waveform)
}

/// Position `i` of an `n`-point ramp from 0 to 1, endpoints included.
fn ramp(i: usize, n: usize) -> f64 {
    if n > 1 {
        i as f64 / (n - 1) as f64
    } else {
        0.0
    }
}

fn apply_fade_in(head: &mut [f64]) {
    let n = head.len();
    for (i, sample) in head.iter_mut().enumerate() {
        *sample *= ramp(i, n);
    }
}

fn apply_fade_out(tail: &mut [f64]) {
    let n = tail.len();
    for (i, sample) in tail.iter_mut().enumerate() {
        *sample *= 1.0 - ramp(i, n);
    }
}
