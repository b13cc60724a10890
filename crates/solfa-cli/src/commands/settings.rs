//! Settings command implementation
//!
//! Shows, updates, and resets the persisted timing settings.

use anyhow::{bail, Result};
use colored::Colorize;
use solfa_spec::Settings;
use std::path::Path;
use std::process::ExitCode;

use crate::settings_store::{apply_overrides, load_settings, reset_settings, save_settings};

fn print_settings(path: &Path, settings: &Settings) {
    println!("{} {}", "Settings file:".cyan().bold(), path.display());
    println!("  intro_speed   = {}", settings.intro_duration);
    println!("  test_speed    = {}", settings.test_duration);
    println!("  space_between = {}", settings.space_duration);
}

/// Prints the current settings, creating the file with defaults if needed.
pub fn run_show(path: &Path, json_output: bool) -> Result<ExitCode> {
    let settings = load_settings(path)?;
    if json_output {
        println!("{}", serde_json::to_string_pretty(&settings)?);
    } else {
        print_settings(path, &settings);
    }
    Ok(ExitCode::SUCCESS)
}

/// Updates the given fields and writes the file back.
///
/// Non-positive values fall back to the field's default.
pub fn run_set(
    path: &Path,
    intro: Option<f64>,
    test: Option<f64>,
    space: Option<f64>,
) -> Result<ExitCode> {
    if intro.is_none() && test.is_none() && space.is_none() {
        bail!("nothing to set (pass --intro, --test, or --space)");
    }
    let settings = apply_overrides(load_settings(path)?, intro, test, space);
    save_settings(path, &settings)?;
    println!("{} settings updated", "SUCCESS".green().bold());
    print_settings(path, &settings);
    Ok(ExitCode::SUCCESS)
}

/// Restores the default settings.
pub fn run_reset(path: &Path) -> Result<ExitCode> {
    let settings = reset_settings(path)?;
    println!("{} settings reset to defaults", "SUCCESS".green().bold());
    print_settings(path, &settings);
    Ok(ExitCode::SUCCESS)
}
