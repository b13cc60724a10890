//! Peak normalization and 16-bit narrowing.
//!
//! Every renderer and every assembled segment goes through
//! [`normalize_to_pcm16`], so the peak of any non-silent buffer is exactly
//! [`PEAK_AMPLITUDE`] and every sample lies in `[-32767, 32767]`.

/// Target peak for normalized 16-bit output.
pub const PEAK_AMPLITUDE: f64 = 32767.0;

/// Largest magnitude allowed after narrowing.
const PCM_LIMIT: i16 = 32767;

/// Returns the largest absolute sample value, ignoring NaN.
pub fn peak(samples: &[f64]) -> f64 {
    samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f64, |a, b| a.max(b))
}

/// Scales samples in place so the peak magnitude equals `target_peak`.
///
/// A silent (all-zero or empty) buffer is left untouched.
pub fn normalize(samples: &mut [f64], target_peak: f64) {
    let current_peak = peak(samples);

    if current_peak > 0.0 {
        let gain = target_peak / current_peak;
        for sample in samples.iter_mut() {
            *sample *= gain;
        }
    }
}

/// Narrows samples to 16-bit integers.
///
/// Non-finite values become 0; the rest are rounded to nearest and clamped to
/// `[-32767, 32767]`.
pub fn narrow_to_pcm16(samples: &[f64]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| {
            if s.is_finite() {
                (s.round() as i16).clamp(-PCM_LIMIT, PCM_LIMIT)
            } else {
                0
            }
        })
        .collect()
}

/// Normalizes to full scale, scrubs non-finite values, and narrows to 16 bits.
pub fn normalize_to_pcm16(samples: &[f64]) -> Vec<i16> {
    let mut scaled = samples.to_vec();
    normalize(&mut scaled, PEAK_AMPLITUDE);
    narrow_to_pcm16(&scaled)
}

/// Runs an already narrowed buffer through [`normalize_to_pcm16`] again.
///
/// Used on concatenated segments, whose parts were normalized independently.
pub fn renormalize_pcm16(samples: &[i16]) -> Vec<i16> {
    let widened: Vec<f64> = samples.iter().map(|&s| s as f64).collect();
    normalize_to_pcm16(&widened)
}
