//! Tests for sequence assembly.

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use solfa_spec::{SequenceRequest, Settings, SoundType, ValidationError};

use super::*;
use crate::rng::create_rng;
use crate::solfege::SOLFEGE_CYCLE;

fn scale_request() -> SequenceRequest {
    SequenceRequest::builder(60)
        .sound_type(SoundType::Scale)
        .settings(Settings::new(0.2, 1.0, 1.0))
        .num_notes(8)
        .note_range(12)
        .build()
}

fn peak_abs(samples: &[i16]) -> i16 {
    samples.iter().map(|s| s.abs()).max().unwrap_or(0)
}

// =========================================================================
// Segment layout
// =========================================================================

#[test]
fn test_scale_segment_lengths() {
    let rendered = render_sequence(&scale_request(), &mut create_rng(42)).unwrap();

    // 0.2 s / 8 notes = 0.025 s -> 1102.5 samples, rounded up per note
    assert_eq!(rendered.segment_lengths, [8 * 1103, 44100, 8 * 44100]);
    assert_eq!(
        rendered.samples.len(),
        rendered.segment_lengths.iter().sum::<usize>()
    );
    assert_eq!(rendered.intro_notes, (60..68).collect::<Vec<_>>());
}

#[test]
fn test_chord_intro_is_one_triad() {
    let request = SequenceRequest::builder(60)
        .sound_type(SoundType::Chord)
        .num_notes(3)
        .note_range(12)
        .build();
    let rendered = render_sequence(&request, &mut create_rng(7)).unwrap();

    assert_eq!(rendered.intro_notes, vec![60, 64, 67]);
    assert_eq!(rendered.segment_lengths, [8820, 44100, 3 * 44100]);
}

#[test]
fn test_silence_is_zero() {
    let rendered = render_sequence(&scale_request(), &mut create_rng(1)).unwrap();
    let [intro, gap, _] = rendered.segment_lengths;
    assert!(rendered.samples[intro..intro + gap].iter().all(|&s| s == 0));
}

#[test]
fn test_segments_are_independently_full_scale() {
    let rendered = render_sequence(&scale_request(), &mut create_rng(3)).unwrap();
    let [intro, gap, _] = rendered.segment_lengths;

    assert_eq!(peak_abs(&rendered.samples[..intro]), 32767);
    assert_eq!(peak_abs(&rendered.samples[intro + gap..]), 32767);
    assert!(rendered
        .samples
        .iter()
        .all(|&s| (-32767..=32767).contains(&s)));
}

#[test]
fn test_zero_durations_do_not_crash() {
    let request = SequenceRequest::builder(60)
        .settings(Settings::new(0.0, 0.0, 0.0))
        .num_notes(4)
        .note_range(6)
        .build();
    let rendered = render_sequence(&request, &mut create_rng(9)).unwrap();

    assert!(rendered.samples.is_empty());
    assert_eq!(rendered.test_notes.len(), 4);
    assert!(rendered.file_name.ends_with(".wav"));
}

// =========================================================================
// Test note draw
// =========================================================================

#[test]
fn test_drawn_notes_are_distinct_and_in_range() {
    for seed in 0..50 {
        let rendered = render_sequence(&scale_request(), &mut create_rng(seed)).unwrap();
        let unique: HashSet<_> = rendered.test_notes.iter().collect();

        assert_eq!(rendered.test_notes.len(), 8);
        assert_eq!(unique.len(), 8);
        assert!(rendered.test_notes.iter().all(|n| (60..72).contains(n)));
    }
}

#[test]
fn test_full_range_draw_is_a_permutation() {
    let request = SequenceRequest::builder(40)
        .num_notes(5)
        .note_range(5)
        .build();
    let rendered = render_sequence(&request, &mut create_rng(11)).unwrap();

    let mut sorted = rendered.test_notes.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![40, 41, 42, 43, 44]);
}

#[test]
fn test_same_seed_same_sequence() {
    let a = render_sequence(&scale_request(), &mut create_rng(42)).unwrap();
    let b = render_sequence(&scale_request(), &mut create_rng(42)).unwrap();

    assert_eq!(a.test_notes, b.test_notes);
    assert_eq!(a.file_name, b.file_name);
    assert_eq!(a.samples, b.samples);
}

#[test]
fn test_seeds_vary_the_draw() {
    let draws: HashSet<Vec<i32>> = (0..20)
        .map(|seed| {
            render_sequence(&scale_request(), &mut create_rng(seed))
                .unwrap()
                .test_notes
        })
        .collect();
    assert!(draws.len() > 1);
}

#[test]
fn test_too_many_notes_rejected() {
    let request = SequenceRequest::builder(60)
        .num_notes(10)
        .note_range(5)
        .build();
    let err = render_sequence(&request, &mut create_rng(0)).unwrap_err();

    assert!(matches!(
        err,
        AudioError::Validation(ValidationError::InvalidSamplingRequest {
            num_notes: 10,
            note_range: 5,
        })
    ));
}

// =========================================================================
// Labels and file name
// =========================================================================

#[test]
fn test_labels_follow_draw_order() {
    let rendered = render_sequence(&scale_request(), &mut create_rng(21)).unwrap();

    for (note, label) in rendered.test_notes.iter().zip(&rendered.solfege) {
        let degree = (note - 60).rem_euclid(12) as usize;
        assert_eq!(label, SOLFEGE_CYCLE[degree]);
    }

    let expected: Vec<String> = rendered
        .solfege
        .iter()
        .map(|l| sanitize_label(l))
        .collect();
    assert_eq!(rendered.file_name, format!("{}.wav", expected.join("_")));
}

#[test]
fn test_filename_token_count_matches_note_count() {
    let rendered = render_sequence(&scale_request(), &mut create_rng(5)).unwrap();
    let stem = rendered.file_name.trim_end_matches(".wav");
    assert_eq!(stem.split('_').count(), 8);
}

#[test]
fn test_notes_beyond_label_span_use_numeric_label() {
    let request = SequenceRequest::builder(60)
        .num_notes(36)
        .note_range(36)
        .build();
    let rendered = render_sequence(&request, &mut create_rng(2)).unwrap();

    for (note, label) in rendered.test_notes.iter().zip(&rendered.solfege) {
        if *note >= 84 {
            assert_eq!(label, &format!("note_{}", note));
        } else {
            assert!(!label.starts_with("note_"));
        }
    }

    // Notes 84..96 each carry one extra token from their numeric label.
    let stem = rendered.file_name.trim_end_matches(".wav");
    assert_eq!(stem.split('_').count(), 36 + 12);
}

// =========================================================================
// File output
// =========================================================================

#[test]
fn test_generate_writes_named_file() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join(DEFAULT_OUTPUT_DIR);

    let result = generate_sequence(&scale_request(), &out_dir, &mut create_rng(42)).unwrap();

    assert_eq!(result.path, out_dir.join(&result.file_name));
    let bytes = std::fs::read(&result.path).unwrap();
    assert_eq!(bytes, result.wav.wav_data);
    assert_eq!(result.wav.num_samples, 8 * 1103 + 44100 + 8 * 44100);
}

#[test]
fn test_generate_is_idempotent_on_directory() {
    let dir = tempfile::tempdir().unwrap();
    let first = generate_sequence(&scale_request(), dir.path(), &mut create_rng(1)).unwrap();
    let second = generate_sequence(&scale_request(), dir.path(), &mut create_rng(1)).unwrap();

    assert_eq!(first.path, second.path);
    assert_eq!(first.wav.pcm_hash, second.wav.pcm_hash);
}

#[test]
fn test_invalid_request_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("never_created");
    let request = SequenceRequest::builder(60)
        .num_notes(10)
        .note_range(5)
        .build();

    assert!(generate_sequence(&request, &out_dir, &mut create_rng(0)).is_err());
    assert!(!out_dir.exists());
}

#[test]
fn test_unwritable_output_dir_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("occupied");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let err = generate_sequence(&scale_request(), &blocker, &mut create_rng(0)).unwrap_err();
    assert!(matches!(err, AudioError::CreateOutputDir { .. }));
}
