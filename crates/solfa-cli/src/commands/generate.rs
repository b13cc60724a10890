//! Generate command implementation
//!
//! Renders one or more ear-training sequences and writes them as WAV files.

use anyhow::Result;
use colored::Colorize;
use solfa_backend_audio::rng::{create_rng, derive_round_seed};
use solfa_backend_audio::{
    generate_sequence, note_to_frequency, AudioError, SequenceResult, DEFAULT_OUTPUT_DIR,
};
use solfa_spec::{
    BackendError, Note, SequenceRequest, Settings, SoundType, DEFAULT_NOTE_RANGE,
    DEFAULT_NUM_NOTES, DEFAULT_ROOT_NOTE, DEFAULT_SAMPLE_RATE,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use super::json_output::{GenerateOutput, JsonError, RoundOutput};
use crate::playback::{check_playable, open_in_player, wait_for_enter_stdin};
use crate::settings_store::{apply_overrides, load_settings, save_settings, DEFAULT_SETTINGS_FILE};

/// Options for a `generate` run, as collected from the command line.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub sound_type: SoundType,
    pub root_note: Note,
    pub num_notes: usize,
    pub note_range: usize,
    /// Intro duration override, persisted to the settings file.
    pub intro: Option<f64>,
    /// Per-test-note duration override, persisted to the settings file.
    pub test: Option<f64>,
    /// Silence duration override, persisted to the settings file.
    pub space: Option<f64>,
    pub sample_rate: u32,
    /// Base seed; a random one is drawn and reported when absent.
    pub seed: Option<u32>,
    /// Number of sequences to generate.
    pub count: u32,
    pub out_dir: PathBuf,
    pub settings_path: PathBuf,
    /// Hand each file to the system audio player.
    pub open: bool,
    /// Hide the answer until Enter is pressed.
    pub quiz: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            sound_type: SoundType::Scale,
            root_note: DEFAULT_ROOT_NOTE,
            num_notes: DEFAULT_NUM_NOTES,
            note_range: DEFAULT_NOTE_RANGE,
            intro: None,
            test: None,
            space: None,
            sample_rate: DEFAULT_SAMPLE_RATE,
            seed: None,
            count: 1,
            out_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            settings_path: PathBuf::from(DEFAULT_SETTINGS_FILE),
            open: false,
            quiz: false,
        }
    }
}

impl GenerateOptions {
    fn has_overrides(&self) -> bool {
        self.intro.is_some() || self.test.is_some() || self.space.is_some()
    }

    fn to_request(&self, settings: Settings) -> SequenceRequest {
        SequenceRequest::builder(self.root_note)
            .sound_type(self.sound_type)
            .settings(settings)
            .num_notes(self.num_notes)
            .note_range(self.note_range)
            .sample_rate(self.sample_rate)
            .build()
    }
}

/// One written sequence and the seed that produced it.
#[derive(Debug, Clone)]
pub struct Round {
    pub seed: u32,
    pub result: SequenceResult,
}

/// Seed for round `index` of a run of `count` rounds.
pub fn round_seed(base_seed: u32, index: u32, count: u32) -> u32 {
    if count <= 1 {
        base_seed
    } else {
        derive_round_seed(base_seed, index)
    }
}

/// Outcome of a drill set: the rounds written, and the failure that ended it
/// early, if any.
#[derive(Debug)]
pub struct DrillSet {
    pub rounds: Vec<Round>,
    pub error: Option<AudioError>,
}

/// Generates `count` sequences into `out_dir`.
///
/// Stops at the first failure. Rounds written before it stay on disk and are
/// returned alongside the error.
pub fn generate_rounds(
    request: &SequenceRequest,
    out_dir: &Path,
    base_seed: u32,
    count: u32,
) -> DrillSet {
    let mut rounds = Vec::with_capacity(count as usize);
    for index in 0..count {
        let seed = round_seed(base_seed, index, count);
        let mut rng = create_rng(seed);
        match generate_sequence(request, out_dir, &mut rng) {
            Ok(result) => {
                tracing::debug!(round = index, seed, file = %result.file_name, "round written");
                rounds.push(Round { seed, result });
            }
            Err(e) => {
                tracing::warn!(round = index, seed, "round failed: {}", e);
                return DrillSet {
                    rounds,
                    error: Some(e),
                };
            }
        }
    }
    DrillSet {
        rounds,
        error: None,
    }
}

/// Loads settings and persists any command-line overrides.
pub fn resolve_settings(options: &GenerateOptions) -> Result<Settings> {
    let stored = load_settings(&options.settings_path)?;
    if !options.has_overrides() {
        return Ok(stored);
    }
    let settings = apply_overrides(stored, options.intro, options.test, options.space);
    save_settings(&options.settings_path, &settings)?;
    Ok(settings)
}

/// Exit code for a generation failure: 1 for a bad request, 2 for I/O.
fn failure_code(err: &AudioError) -> ExitCode {
    if err.is_precondition() {
        ExitCode::from(1)
    } else {
        ExitCode::from(2)
    }
}

/// Run the generate command
///
/// # Returns
/// Exit code: 0 success, 1 invalid request, 2 I/O error
pub fn run(options: &GenerateOptions, json_output: bool) -> Result<ExitCode> {
    let settings = resolve_settings(options)?;
    let request = options.to_request(settings);
    let base_seed = options.seed.unwrap_or_else(rand::random);

    if json_output {
        run_json(options, &request, base_seed)
    } else {
        run_human(options, &request, base_seed)
    }
}

/// Run generate with human-readable (colored) output
fn run_human(
    options: &GenerateOptions,
    request: &SequenceRequest,
    base_seed: u32,
) -> Result<ExitCode> {
    println!(
        "{} {} from {} ({:.2} Hz), {} of {} notes",
        "Generating:".cyan().bold(),
        request.sound_type,
        request.root_note,
        note_to_frequency(request.root_note),
        request.num_notes,
        request.note_range
    );
    println!(
        "{} intro {}s, test {}s, space {}s",
        "Settings:".dimmed(),
        request.settings.intro_duration,
        request.settings.test_duration,
        request.settings.space_duration
    );
    println!("{} {}", "Seed:".dimmed(), base_seed);

    let DrillSet { rounds, error } =
        generate_rounds(request, &options.out_dir, base_seed, options.count);

    for (index, round) in rounds.iter().enumerate() {
        let result = &round.result;
        check_playable(&result.path)?;

        if options.quiz {
            println!(
                "  {} round {} written to {} ({:.2}s)",
                "+".green(),
                index + 1,
                options.out_dir.display(),
                result.wav.duration_seconds()
            );
        } else {
            println!(
                "  {} {} ({:.2}s)",
                "+".green(),
                result.path.display(),
                result.wav.duration_seconds()
            );
        }

        if options.open {
            open_in_player(&result.path)?;
        }

        if options.quiz {
            wait_for_enter_stdin("    Press Enter to reveal the answer...")?;
            println!("    {} {}", "File:".dimmed(), result.path.display());
            println!("    {} {}", "Answer:".cyan().bold(), result.solfege.join(" "));
        }
    }

    if let Some(e) = error {
        println!(
            "\n{} {} {}",
            "FAILED".red().bold(),
            format!("[{}]", e.code()).dimmed(),
            e
        );
        if !rounds.is_empty() {
            println!("  {} of {} rounds were written", rounds.len(), options.count);
        }
        return Ok(failure_code(&e));
    }

    println!(
        "\n{} {} sequence(s) written to {}",
        "SUCCESS".green().bold(),
        rounds.len(),
        options.out_dir.display()
    );
    Ok(ExitCode::SUCCESS)
}

/// Run generate with machine-readable JSON output
fn run_json(
    options: &GenerateOptions,
    request: &SequenceRequest,
    base_seed: u32,
) -> Result<ExitCode> {
    let drill = generate_rounds(request, &options.out_dir, base_seed, options.count);
    let code = drill.error.as_ref().map_or(ExitCode::SUCCESS, failure_code);

    for round in &drill.rounds {
        check_playable(&round.result.path)?;
        if options.open {
            open_in_player(&round.result.path)?;
        }
    }

    let output = json_report(request, base_seed, &drill);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(code)
}

/// Builds the `--json` document for a drill set, listing every round that
/// was written even when a later one failed.
fn json_report(request: &SequenceRequest, base_seed: u32, drill: &DrillSet) -> GenerateOutput {
    GenerateOutput {
        success: drill.error.is_none(),
        seed: base_seed,
        settings: request.settings,
        rounds: drill
            .rounds
            .iter()
            .map(|round| RoundOutput::new(round.seed, request, &round.result))
            .collect(),
        error: drill.error.as_ref().map(JsonError::from_backend),
    }
}
