//! Pitch identifiers and intro sound types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A semitone-indexed pitch identifier using MIDI numbering.
///
/// Any integer is accepted; values outside 0..=127 simply map to very low or
/// very high frequencies.
pub type Note = i32;

/// MIDI note number of A4.
pub const A4_NOTE: Note = 69;

/// Reference frequency of A4 in Hz.
pub const A4_FREQUENCY: f64 = 440.0;

/// Semitones per octave (frequency doubles every octave).
pub const SEMITONES_PER_OCTAVE: i32 = 12;

/// What is played before the test notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundType {
    /// Ascending run of consecutive notes starting at the root.
    #[default]
    Scale,
    /// Major triad (root, major third, perfect fifth) on the root.
    Chord,
}

impl SoundType {
    /// Returns the sound type as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundType::Scale => "scale",
            SoundType::Chord => "chord",
        }
    }
}

impl fmt::Display for SoundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SoundType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scale" => Ok(SoundType::Scale),
            "chord" => Ok(SoundType::Chord),
            other => Err(format!(
                "unknown sound type '{}' (expected scale or chord)",
                other
            )),
        }
    }
}
