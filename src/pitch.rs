//! Note spellings and pitch-class arithmetic.
//!
//! The twelve pitch classes (C = 0 through B = 11) are the canonical identity
//! for equality and interval math. A [`Note`] is a *spelling*: a displayable
//! name bound to exactly one pitch class. Several spellings may share a pitch
//! class (enharmonic equivalents, e.g. `C#`/`Db`), and chord charts in the
//! wild use double accidentals (`C##`, `Fbb`) as first-class spellings, so
//! the whole set is table-driven here.
//!
//! The supported set is the 33 spellings found in real charts: all seven
//! naturals, single and double sharps and flats, except `E#` and `B#`,
//! which never occur in the supported notation and are rejected as invalid.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ChordError;

/// Semitones per octave.
pub const SEMITONES_PER_OCTAVE: u8 = 12;

/// Reference tuning: A4 = 440 Hz = MIDI note 69.
pub const A4_FREQUENCY_HZ: f64 = 440.0;
pub const A4_MIDI: i32 = 69;

/// A note spelling. One variant per supported spelling; each resolves to
/// exactly one pitch class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Note {
    C,
    CSharp,
    CDoubleSharp,
    CFlat,
    CDoubleFlat,
    D,
    DSharp,
    DDoubleSharp,
    DFlat,
    DDoubleFlat,
    E,
    EDoubleSharp,
    EFlat,
    EDoubleFlat,
    F,
    FSharp,
    FDoubleSharp,
    FFlat,
    FDoubleFlat,
    G,
    GSharp,
    GDoubleSharp,
    GFlat,
    GDoubleFlat,
    A,
    ASharp,
    ADoubleSharp,
    AFlat,
    ADoubleFlat,
    B,
    BDoubleSharp,
    BFlat,
    BDoubleFlat,
}

/// Canonical sharp-preferred spelling for each pitch class, indexed 0-11.
const SHARP_SPELLINGS: [Note; 12] = [
    Note::C,
    Note::CSharp,
    Note::D,
    Note::DSharp,
    Note::E,
    Note::F,
    Note::FSharp,
    Note::G,
    Note::GSharp,
    Note::A,
    Note::ASharp,
    Note::B,
];

impl Note {
    /// Every supported spelling.
    pub const ALL: [Note; 33] = [
        Note::C,
        Note::CSharp,
        Note::CDoubleSharp,
        Note::CFlat,
        Note::CDoubleFlat,
        Note::D,
        Note::DSharp,
        Note::DDoubleSharp,
        Note::DFlat,
        Note::DDoubleFlat,
        Note::E,
        Note::EDoubleSharp,
        Note::EFlat,
        Note::EDoubleFlat,
        Note::F,
        Note::FSharp,
        Note::FDoubleSharp,
        Note::FFlat,
        Note::FDoubleFlat,
        Note::G,
        Note::GSharp,
        Note::GDoubleSharp,
        Note::GFlat,
        Note::GDoubleFlat,
        Note::A,
        Note::ASharp,
        Note::ADoubleSharp,
        Note::AFlat,
        Note::ADoubleFlat,
        Note::B,
        Note::BDoubleSharp,
        Note::BFlat,
        Note::BDoubleFlat,
    ];

    /// Look up a spelling by name. Returns `None` for anything outside the
    /// supported set (including `E#` and `B#`).
    pub fn from_name(name: &str) -> Option<Note> {
        let note = match name {
            "C" => Note::C,
            "C#" => Note::CSharp,
            "C##" => Note::CDoubleSharp,
            "Cb" => Note::CFlat,
            "Cbb" => Note::CDoubleFlat,
            "D" => Note::D,
            "D#" => Note::DSharp,
            "D##" => Note::DDoubleSharp,
            "Db" => Note::DFlat,
            "Dbb" => Note::DDoubleFlat,
            "E" => Note::E,
            "E##" => Note::EDoubleSharp,
            "Eb" => Note::EFlat,
            "Ebb" => Note::EDoubleFlat,
            "F" => Note::F,
            "F#" => Note::FSharp,
            "F##" => Note::FDoubleSharp,
            "Fb" => Note::FFlat,
            "Fbb" => Note::FDoubleFlat,
            "G" => Note::G,
            "G#" => Note::GSharp,
            "G##" => Note::GDoubleSharp,
            "Gb" => Note::GFlat,
            "Gbb" => Note::GDoubleFlat,
            "A" => Note::A,
            "A#" => Note::ASharp,
            "A##" => Note::ADoubleSharp,
            "Ab" => Note::AFlat,
            "Abb" => Note::ADoubleFlat,
            "B" => Note::B,
            "B##" => Note::BDoubleSharp,
            "Bb" => Note::BFlat,
            "Bbb" => Note::BDoubleFlat,
            _ => return None,
        };
        Some(note)
    }

    /// The displayable name of this spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Note::C => "C",
            Note::CSharp => "C#",
            Note::CDoubleSharp => "C##",
            Note::CFlat => "Cb",
            Note::CDoubleFlat => "Cbb",
            Note::D => "D",
            Note::DSharp => "D#",
            Note::DDoubleSharp => "D##",
            Note::DFlat => "Db",
            Note::DDoubleFlat => "Dbb",
            Note::E => "E",
            Note::EDoubleSharp => "E##",
            Note::EFlat => "Eb",
            Note::EDoubleFlat => "Ebb",
            Note::F => "F",
            Note::FSharp => "F#",
            Note::FDoubleSharp => "F##",
            Note::FFlat => "Fb",
            Note::FDoubleFlat => "Fbb",
            Note::G => "G",
            Note::GSharp => "G#",
            Note::GDoubleSharp => "G##",
            Note::GFlat => "Gb",
            Note::GDoubleFlat => "Gbb",
            Note::A => "A",
            Note::ASharp => "A#",
            Note::ADoubleSharp => "A##",
            Note::AFlat => "Ab",
            Note::ADoubleFlat => "Abb",
            Note::B => "B",
            Note::BDoubleSharp => "B##",
            Note::BFlat => "Bb",
            Note::BDoubleFlat => "Bbb",
        }
    }

    /// Semitone offset from C, 0-11.
    pub fn pitch_class(&self) -> u8 {
        match self {
            Note::C => 0,
            Note::CSharp => 1,
            Note::CDoubleSharp => 2,
            Note::CFlat => 11,
            Note::CDoubleFlat => 10,
            Note::D => 2,
            Note::DSharp => 3,
            Note::DDoubleSharp => 4,
            Note::DFlat => 1,
            Note::DDoubleFlat => 0,
            Note::E => 4,
            Note::EDoubleSharp => 6,
            Note::EFlat => 3,
            Note::EDoubleFlat => 2,
            Note::F => 5,
            Note::FSharp => 6,
            Note::FDoubleSharp => 7,
            Note::FFlat => 4,
            Note::FDoubleFlat => 3,
            Note::G => 7,
            Note::GSharp => 8,
            Note::GDoubleSharp => 9,
            Note::GFlat => 6,
            Note::GDoubleFlat => 5,
            Note::A => 9,
            Note::ASharp => 10,
            Note::ADoubleSharp => 11,
            Note::AFlat => 8,
            Note::ADoubleFlat => 7,
            Note::B => 11,
            Note::BDoubleSharp => 1,
            Note::BFlat => 10,
            Note::BDoubleFlat => 9,
        }
    }

    /// The canonical sharp-preferred spelling for a pitch class.
    pub fn from_pitch_class(pitch_class: u8) -> Note {
        SHARP_SPELLINGS[(pitch_class % SEMITONES_PER_OCTAVE) as usize]
    }

    /// Respell to the canonical sharp-preferred spelling. No-op on spellings
    /// that are already canonical; always idempotent.
    pub fn normalized(&self) -> Note {
        Note::from_pitch_class(self.pitch_class())
    }

    /// Flat-notation display spelling: the five sharps become flats and the
    /// awkward flat survivors collapse to naturals. Spellings without a
    /// conventional flat form map to themselves.
    pub fn flat_spelling(&self) -> Note {
        match self {
            Note::CSharp => Note::DFlat,
            Note::DSharp => Note::EFlat,
            Note::FSharp => Note::GFlat,
            Note::GSharp => Note::AFlat,
            Note::ASharp => Note::BFlat,
            Note::CFlat => Note::B,
            Note::FFlat => Note::E,
            Note::EDoubleFlat => Note::D,
            Note::ADoubleFlat => Note::G,
            Note::BDoubleFlat => Note::A,
            other => *other,
        }
    }

    /// MIDI note number for this spelling in the given octave, where
    /// C4 = 60. Enharmonic equivalents map to the same number.
    pub fn midi(&self, octave: i32) -> i32 {
        60 + SEMITONES_PER_OCTAVE as i32 * (octave - 4) + self.pitch_class() as i32
    }

    /// Equal-temperament frequency of this spelling in the given octave.
    pub fn frequency(&self, octave: i32) -> f64 {
        midi_to_frequency(self.midi(octave))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Note {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Note, ChordError> {
        Note::from_name(s).ok_or_else(|| ChordError::InvalidRoot(s.to_string()))
    }
}

// (De)serialize as the spelling string, so note lists cross the boundary as
// `["C", "E", "G"]`.
impl Serialize for Note {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Note {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Note, D::Error> {
        let name = String::deserialize(deserializer)?;
        Note::from_name(&name)
            .ok_or_else(|| de::Error::custom(format!("unknown note spelling '{name}'")))
    }
}

/// Equal-temperament frequency for a MIDI note number: 440 * 2^((m-69)/12).
pub fn midi_to_frequency(midi: i32) -> f64 {
    A4_FREQUENCY_HZ * 2f64.powf((midi - A4_MIDI) as f64 / 12.0)
}
