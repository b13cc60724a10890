//! Output file naming from solfege labels.

use rand::Rng;
use solfa_spec::Note;

/// Label that forces the randomized fallback file name.
pub const FALLBACK_LABEL: &str = "n/a";

/// File extension for generated sequences.
pub const WAV_EXTENSION: &str = ".wav";

/// Replaces characters that are unsafe in file names (`/` becomes `|`).
pub fn sanitize_label(label: &str) -> String {
    label.replace('/', "|")
}

/// Derives the output file name for a sequence.
///
/// The test-note labels, sanitized and joined with `_` in playback order,
/// form the stem. If any label is [`FALLBACK_LABEL`] the name becomes
/// `sequence_<root>_<4 digits>.wav` instead.
pub fn sequence_file_name<R: Rng + ?Sized>(
    root_note: Note,
    labels: &[String],
    rng: &mut R,
) -> String {
    let sanitized: Vec<String> = labels.iter().map(|l| sanitize_label(l)).collect();
    let needs_fallback = labels
        .iter()
        .zip(&sanitized)
        .any(|(raw, clean)| raw == FALLBACK_LABEL || clean == FALLBACK_LABEL);

    if needs_fallback {
        fallback_file_name(root_note, rng)
    } else {
        format!("{}{}", sanitized.join("_"), WAV_EXTENSION)
    }
}

/// `sequence_<root>_<NNNN>.wav` with a random four-digit suffix.
pub fn fallback_file_name<R: Rng + ?Sized>(root_note: Note, rng: &mut R) -> String {
    format!(
        "sequence_{}_{}{}",
        root_note,
        rng.gen_range(1000..=9999),
        WAV_EXTENSION
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use pretty_assertions::assert_eq;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_labels_joined_in_order() {
        let mut rng = create_rng(1);
        let name = sequence_file_name(60, &labels(&["sol", "do", "mi"]), &mut rng);
        assert_eq!(name, "sol_do_mi.wav");
    }

    #[test]
    fn test_slashes_are_sanitized() {
        let mut rng = create_rng(1);
        let name = sequence_file_name(60, &labels(&["di/ra", "ti", "li/te"]), &mut rng);
        assert_eq!(name, "di|ra_ti_li|te.wav");
        assert!(!name.contains('/'));
    }

    #[test]
    fn test_fallback_label_triggers_random_name() {
        let mut rng = create_rng(1);
        let name = sequence_file_name(62, &labels(&["do", FALLBACK_LABEL]), &mut rng);
        assert!(name.starts_with("sequence_62_"));
        assert!(name.ends_with(".wav"));
        let digits = &name["sequence_62_".len()..name.len() - 4];
        assert_eq!(digits.len(), 4);
        let value: u32 = digits.parse().unwrap();
        assert!((1000..=9999).contains(&value));
    }

    #[test]
    fn test_fallback_is_deterministic_per_seed() {
        let a = fallback_file_name(60, &mut create_rng(5));
        let b = fallback_file_name(60, &mut create_rng(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_out_of_map_labels_keep_underscores() {
        let mut rng = create_rng(1);
        let name = sequence_file_name(60, &labels(&["note_90", "do"]), &mut rng);
        assert_eq!(name, "note_90_do.wav");
    }
}
