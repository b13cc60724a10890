//! Solfege syllable labeling relative to a root note.
//!
//! Chromatic movable-do names: each of the 12 semitones above the root has a
//! syllable, with raised/lowered spellings joined by `/` (e.g. `di/ra`).

use std::borrow::Cow;
use std::collections::BTreeMap;

use solfa_spec::{Note, SEMITONES_PER_OCTAVE};

/// Syllables for the 12 semitones of one octave, starting at the root.
pub const SOLFEGE_CYCLE: [&str; 12] = [
    "do", "di/ra", "re", "ri/me", "mi", "fa", "fi/se", "sol", "si/le", "la", "li/te", "ti",
];

/// Default number of consecutive notes covered by a map (three octaves).
pub const DEFAULT_SOLFEGE_SPAN: usize = 36;

/// Note to syllable mapping anchored one octave below a root note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolfegeMap {
    root_note: Note,
    names: BTreeMap<Note, &'static str>,
}

impl SolfegeMap {
    /// Builds a map of `span` consecutive notes starting 12 semitones below
    /// `root_note`. The root and its octaves are always `do`.
    pub fn build(root_note: Note, span: usize) -> Self {
        let start = root_note.saturating_sub(SEMITONES_PER_OCTAVE);
        let names = (0..span)
            .map_while(|i| {
                let offset = i32::try_from(i).ok()?;
                let note = start.checked_add(offset)?;
                Some((note, SOLFEGE_CYCLE[i % SOLFEGE_CYCLE.len()]))
            })
            .collect();

        Self { root_note, names }
    }

    /// The root note this map was built for.
    pub fn root_note(&self) -> Note {
        self.root_note
    }

    /// Returns the syllable for `note` if it falls inside the map.
    pub fn get(&self, note: Note) -> Option<&'static str> {
        self.names.get(&note).copied()
    }

    /// Returns the syllable for `note`, or `note_<N>` outside the map.
    pub fn lookup(&self, note: Note) -> Cow<'static, str> {
        match self.get(note) {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(format!("note_{}", note)),
        }
    }

    /// Number of notes covered.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the map covers no notes.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over `(note, syllable)` pairs in ascending note order.
    pub fn iter(&self) -> impl Iterator<Item = (Note, &'static str)> + '_ {
        self.names.iter().map(|(&note, &name)| (note, name))
    }
}

/// Builds a [`SolfegeMap`] for `root_note` covering `span` notes.
pub fn build_solfege_map(root_note: Note, span: usize) -> SolfegeMap {
    SolfegeMap::build(root_note, span)
}
