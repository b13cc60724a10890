//! CLI argument definitions for the Solfa command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};
use solfa_backend_audio::DEFAULT_OUTPUT_DIR;
use solfa_cli::settings_store::DEFAULT_SETTINGS_FILE;

/// Solfa - Solfege ear-training sequence generator
#[derive(Parser)]
#[command(name = "solfa")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate ear-training sequences as WAV files
    Generate {
        /// Intro style: an ascending scale or a major triad
        #[arg(long, default_value = "scale", value_parser = ["scale", "chord"])]
        sound_type: String,

        /// Root note as a MIDI number (A0 = 21 through C8 = 108)
        #[arg(short, long, default_value_t = 60, value_parser = clap::value_parser!(i32).range(21..=108))]
        root: i32,

        /// Number of distinct test notes to draw
        #[arg(short, long, default_value_t = 8)]
        num_notes: usize,

        /// Width of the test pool in semitones above the root
        #[arg(long, default_value_t = 12, value_parser = clap::value_parser!(u64).range(1..=36))]
        range: u64,

        /// Intro duration in seconds (saved to the settings file)
        #[arg(long)]
        intro: Option<f64>,

        /// Duration of each test note in seconds (saved to the settings file)
        #[arg(long)]
        test: Option<f64>,

        /// Silence between intro and test in seconds (saved to the settings file)
        #[arg(long)]
        space: Option<f64>,

        /// Output sample rate in Hz
        #[arg(long, default_value_t = 44100, value_parser = clap::value_parser!(u32).range(1..=768_000))]
        sample_rate: u32,

        /// Seed for the note draw (random and reported when omitted)
        #[arg(long)]
        seed: Option<u32>,

        /// Number of sequences to generate
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,

        /// Output directory
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        out_dir: String,

        /// Path to the settings file
        #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
        settings: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,

        /// Open each file in the system audio player
        #[arg(long)]
        open: bool,

        /// Hide the answer until Enter is pressed
        #[arg(long, conflicts_with = "json")]
        quiz: bool,
    },

    /// Show or change the persisted timing settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
}

#[derive(Subcommand)]
pub(crate) enum SettingsCommands {
    /// Print the current settings
    Show {
        /// Path to the settings file
        #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
        settings: String,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Update one or more settings
    Set {
        /// Intro duration in seconds
        #[arg(long)]
        intro: Option<f64>,

        /// Duration of each test note in seconds
        #[arg(long)]
        test: Option<f64>,

        /// Silence between intro and test in seconds
        #[arg(long)]
        space: Option<f64>,

        /// Path to the settings file
        #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
        settings: String,
    },

    /// Restore the default settings
    Reset {
        /// Path to the settings file
        #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
        settings: String,
    },
}
