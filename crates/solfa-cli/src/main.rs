//! Solfa CLI - Command-line interface for ear-training sequence generation
//!
//! This binary renders solfege drill sequences to WAV files and manages the
//! persisted timing settings.

mod cli_args;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use cli_args::{Cli, Commands, SettingsCommands};
use solfa_cli::commands;
use solfa_cli::commands::generate::GenerateOptions;
use solfa_spec::SoundType;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            sound_type,
            root,
            num_notes,
            range,
            intro,
            test,
            space,
            sample_rate,
            seed,
            count,
            out_dir,
            settings,
            json,
            open,
            quiz,
        } => {
            let sound_type: SoundType = sound_type
                .parse()
                .expect("clap should have validated sound type");
            let options = GenerateOptions {
                sound_type,
                root_note: root,
                num_notes,
                note_range: range as usize,
                intro,
                test,
                space,
                sample_rate,
                seed,
                count,
                out_dir: PathBuf::from(out_dir),
                settings_path: PathBuf::from(settings),
                open,
                quiz,
            };
            commands::generate::run(&options, json)
        }
        Commands::Settings { command } => match command {
            SettingsCommands::Show { settings, json } => {
                commands::settings::run_show(&PathBuf::from(settings), json)
            }
            SettingsCommands::Set {
                intro,
                test,
                space,
                settings,
            } => commands::settings::run_set(&PathBuf::from(settings), intro, test, space),
            SettingsCommands::Reset { settings } => {
                commands::settings::run_reset(&PathBuf::from(settings))
            }
        },
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
