//! Hand-off to an external audio player.
//!
//! Solfa never plays audio itself. It checks that a generated file is a
//! usable WAV and then asks the operating system to open it.

use anyhow::{bail, Context, Result};
use solfa_backend_audio::wav::extract_pcm_data;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Verifies that `path` exists, is non-empty, and carries a PCM data chunk.
pub fn check_playable(path: &Path) -> Result<()> {
    let bytes =
        fs::read(path).with_context(|| format!("Generated file missing: {}", path.display()))?;
    if bytes.is_empty() {
        bail!("Generated file is empty: {}", path.display());
    }
    if extract_pcm_data(&bytes).is_none() {
        bail!("Generated file is not a PCM WAV: {}", path.display());
    }
    Ok(())
}

/// Opens `path` with the system's default audio application.
pub fn open_in_player(path: &Path) -> Result<()> {
    check_playable(path)?;
    tracing::info!("opening {}", path.display());
    open::that(path).with_context(|| format!("Failed to open player for {}", path.display()))
}

/// Prints `prompt` and blocks until a line is read from `input`.
pub fn wait_for_enter<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read from stdin")?;
    Ok(())
}

/// [`wait_for_enter`] on the process's stdin and stdout.
pub fn wait_for_enter_stdin(prompt: &str) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    wait_for_enter(prompt, &mut input, &mut io::stdout())
}
