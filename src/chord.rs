//! Chord value types.

use std::fmt;

use serde::Serialize;

use crate::pitch::Note;
use crate::quality::Quality;

/// A chord symbol split into its parts, before quality validation.
///
/// The quality is the *normalized* token; it may still be unknown to the
/// registry, in which case building the chord fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedChord {
    pub root: Note,
    pub quality: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bass_note: Option<Note>,
}

impl ParsedChord {
    /// Reconstruct the chord symbol. The major quality renders as the bare
    /// root, so `parse(p.symbol())` reproduces `p` for every parseable input.
    pub fn symbol(&self) -> String {
        let mut symbol = String::from(self.root.as_str());
        if self.quality != Quality::Major.token() {
            symbol.push_str(&self.quality);
        }
        if let Some(bass) = self.bass_note {
            symbol.push('/');
            symbol.push_str(bass.as_str());
        }
        symbol
    }
}

impl fmt::Display for ParsedChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol())
    }
}

/// A fully expanded chord.
///
/// `notes` is generated from `intervals` applied to the root's pitch class
/// and respelled with the sharp preference. When a bass note is present it
/// always sits at index 0, whether or not it is chordal; otherwise the
/// root's spelling leads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chord {
    pub root: Note,
    pub quality: Quality,
    pub intervals: Vec<u8>,
    pub notes: Vec<Note>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bass_note: Option<Note>,
}

impl Chord {
    /// The rendered chord symbol, e.g. `"Faug7/B"`.
    pub fn symbol(&self) -> String {
        let mut symbol = String::from(self.root.as_str());
        symbol.push_str(self.quality.suffix());
        if let Some(bass) = self.bass_note {
            symbol.push('/');
            symbol.push_str(bass.as_str());
        }
        symbol
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol())
    }
}
