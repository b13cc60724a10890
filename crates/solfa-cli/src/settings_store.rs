//! Persistent timing settings.
//!
//! Settings live in a flat key-value text file with a single `[DEFAULT]`
//! section:
//!
//! ```text
//! [DEFAULT]
//! intro_speed = 0.2
//! test_speed = 1.0
//! space_between = 1.0
//! ```
//!
//! A missing or unreadable file is never fatal: defaults are used and written
//! back so the next run finds a valid file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use solfa_spec::Settings;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Default settings file name, relative to the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "settings.txt";

/// On-disk layout of the settings file.
#[derive(Debug, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(rename = "DEFAULT")]
    defaults: Settings,
}

/// Loads settings from `path`, recovering to defaults when needed.
///
/// Missing files, parse failures, missing keys, and non-numeric values all
/// fall back to [`Settings::default`] and rewrite the file. Non-positive
/// durations are replaced individually by their defaults.
pub fn load_settings(path: &Path) -> Result<Settings> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!("settings file {} not found, using defaults", path.display());
            return reset_settings(path);
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read settings file: {}", path.display()))
        }
    };

    let settings = match toml::from_str::<SettingsFile>(&text) {
        Ok(file) => file.defaults,
        Err(e) => {
            tracing::warn!(
                "invalid settings in {}, resetting to defaults: {}",
                path.display(),
                e
            );
            return reset_settings(path);
        }
    };

    if !settings.is_valid() {
        let sanitized = settings.sanitized();
        tracing::warn!(
            "non-positive durations in {}, replacing with defaults",
            path.display()
        );
        save_settings(path, &sanitized)?;
        return Ok(sanitized);
    }

    tracing::debug!(?settings, "settings loaded");
    Ok(settings)
}

/// Writes `settings` to `path`, replacing any existing file.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    let file = SettingsFile {
        defaults: *settings,
    };
    let text = toml::to_string(&file).context("Failed to serialize settings")?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, text)
        .with_context(|| format!("Failed to write settings file: {}", path.display()))?;

    tracing::debug!(?settings, "settings saved to {}", path.display());
    Ok(())
}

/// Writes default settings to `path` and returns them.
pub fn reset_settings(path: &Path) -> Result<Settings> {
    let settings = Settings::default();
    save_settings(path, &settings)?;
    Ok(settings)
}

/// Applies optional per-field overrides on top of `base`.
///
/// Zero or negative overrides fall back to the field's default.
pub fn apply_overrides(
    base: Settings,
    intro: Option<f64>,
    test: Option<f64>,
    space: Option<f64>,
) -> Settings {
    Settings::new(
        intro.unwrap_or(base.intro_duration),
        test.unwrap_or(base.test_duration),
        space.unwrap_or(base.space_duration),
    )
    .sanitized()
}
