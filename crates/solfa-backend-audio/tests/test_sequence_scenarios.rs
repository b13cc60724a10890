//! End-to-end sequence generation scenarios.

use solfa_backend_audio::rng::create_rng;
use solfa_backend_audio::{generate_sequence, AudioError};
use solfa_spec::{BackendError, SequenceRequest, Settings, SoundType};

fn read_samples(path: &std::path::Path) -> (hound::WavSpec, Vec<i16>) {
    let mut reader = hound::WavReader::open(path).expect("written file should be a valid WAV");
    let spec = reader.spec();
    let samples = reader
        .samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .expect("samples should decode");
    (spec, samples)
}

#[test]
fn test_scale_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let request = SequenceRequest::builder(60)
        .sound_type(SoundType::Scale)
        .settings(Settings::new(0.2, 1.0, 1.0))
        .num_notes(8)
        .note_range(12)
        .sample_rate(44100)
        .build();

    let result = generate_sequence(&request, dir.path(), &mut create_rng(2024)).unwrap();
    let (spec, samples) = read_samples(&result.path);

    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.bits_per_sample, 16);

    // 0.2 + 1.0 + 8 * 1.0 seconds, allowing one sample of rounding per intro note
    let expected = (0.2 + 1.0 + 8.0) * 44100.0;
    assert!((samples.len() as f64 - expected).abs() <= 8.0);

    let stem = result.file_name.strip_suffix(".wav").unwrap();
    assert_eq!(stem.split('_').count(), 8);
    assert_eq!(result.solfege.len(), 8);
}

#[test]
fn test_chord_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let request = SequenceRequest::builder(60)
        .sound_type(SoundType::Chord)
        .settings(Settings::new(0.2, 1.0, 1.0))
        .num_notes(3)
        .note_range(12)
        .build();

    let result = generate_sequence(&request, dir.path(), &mut create_rng(99)).unwrap();

    let metadata = std::fs::metadata(&result.path).unwrap();
    assert!(metadata.len() > 44);

    let (_, samples) = read_samples(&result.path);
    assert_eq!(samples.len(), 8820 + 44100 + 3 * 44100);
    let intro_peak = samples[..8820].iter().map(|s| s.abs()).max().unwrap();
    assert_eq!(intro_peak, 32767);
}

#[test]
fn test_invalid_sampling_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let request = SequenceRequest::builder(60)
        .num_notes(10)
        .note_range(5)
        .build();

    let err = generate_sequence(&request, dir.path(), &mut create_rng(0)).unwrap_err();

    assert!(matches!(err, AudioError::Validation(_)));
    assert_eq!(err.code(), "AUDIO_001");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_oversized_sample_rate_is_rejected_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("out");
    let request = SequenceRequest::builder(60)
        .settings(Settings::new(0.0, 0.0, 0.0))
        .num_notes(2)
        .note_range(12)
        .sample_rate(u32::MAX)
        .build();

    let err = generate_sequence(&request, &out_dir, &mut create_rng(0)).unwrap_err();

    assert!(err.is_precondition());
    assert_eq!(err.code(), "AUDIO_002");
    assert!(!out_dir.exists());
}

#[test]
fn test_highest_sample_rate_writes_consistent_header() {
    let dir = tempfile::tempdir().unwrap();
    let request = SequenceRequest::builder(60)
        .settings(Settings::new(0.001, 0.001, 0.001))
        .num_notes(2)
        .note_range(12)
        .sample_rate(solfa_spec::MAX_SAMPLE_RATE)
        .build();

    let result = generate_sequence(&request, dir.path(), &mut create_rng(5)).unwrap();
    let (spec, _) = read_samples(&result.path);
    assert_eq!(spec.sample_rate, solfa_spec::MAX_SAMPLE_RATE);
}

#[test]
fn test_seeded_generation_is_byte_identical() {
    let dir_a = tempfile::tempdir().unwrap();
    let dir_b = tempfile::tempdir().unwrap();
    let request = SequenceRequest::builder(67).num_notes(5).note_range(24).build();

    let a = generate_sequence(&request, dir_a.path(), &mut create_rng(31337)).unwrap();
    let b = generate_sequence(&request, dir_b.path(), &mut create_rng(31337)).unwrap();

    assert_eq!(a.file_name, b.file_name);
    assert_eq!(
        std::fs::read(&a.path).unwrap(),
        std::fs::read(&b.path).unwrap()
    );
}

#[test]
fn test_every_sample_within_bounds() {
    let dir = tempfile::tempdir().unwrap();
    let request = SequenceRequest::builder(21)
        .sound_type(SoundType::Chord)
        .settings(Settings::new(0.05, 0.05, 0.01))
        .num_notes(6)
        .note_range(6)
        .build();

    let result = generate_sequence(&request, dir.path(), &mut create_rng(8)).unwrap();
    let (_, samples) = read_samples(&result.path);

    assert!(samples.iter().all(|&s| (-32767..=32767).contains(&s)));
    assert_eq!(samples.iter().map(|s| s.abs()).max(), Some(32767));
}
