//! Listener-tunable timing settings.

use serde::{Deserialize, Serialize};

/// Timing durations, in seconds, used for every generated sequence.
///
/// Field names in serialized form match the keys of the persisted settings
/// file (`intro_speed`, `test_speed`, `space_between`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Total length of the intro segment (whole scale run or the chord).
    #[serde(rename = "intro_speed")]
    pub intro_duration: f64,
    /// Length of each individual test note.
    #[serde(rename = "test_speed")]
    pub test_duration: f64,
    /// Silence between the intro and the test notes.
    #[serde(rename = "space_between")]
    pub space_duration: f64,
}

impl Settings {
    /// Default intro length in seconds.
    pub const DEFAULT_INTRO_DURATION: f64 = 0.2;
    /// Default test note length in seconds.
    pub const DEFAULT_TEST_DURATION: f64 = 1.0;
    /// Default gap length in seconds.
    pub const DEFAULT_SPACE_DURATION: f64 = 1.0;

    /// Creates settings from explicit durations.
    pub fn new(intro_duration: f64, test_duration: f64, space_duration: f64) -> Self {
        Self {
            intro_duration,
            test_duration,
            space_duration,
        }
    }

    /// Returns a copy where every zero, negative, or non-finite duration is
    /// replaced by its default.
    pub fn sanitized(&self) -> Self {
        Self {
            intro_duration: positive_or(self.intro_duration, Self::DEFAULT_INTRO_DURATION),
            test_duration: positive_or(self.test_duration, Self::DEFAULT_TEST_DURATION),
            space_duration: positive_or(self.space_duration, Self::DEFAULT_SPACE_DURATION),
        }
    }

    /// Returns true if every duration is a positive finite number.
    pub fn is_valid(&self) -> bool {
        [self.intro_duration, self.test_duration, self.space_duration]
            .iter()
            .all(|d| d.is_finite() && *d > 0.0)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_INTRO_DURATION,
            Self::DEFAULT_TEST_DURATION,
            Self::DEFAULT_SPACE_DURATION,
        )
    }
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}
