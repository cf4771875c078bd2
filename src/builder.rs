//! Chord expansion: from a parsed symbol to concrete pitches.

use crate::chord::{Chord, ParsedChord};
use crate::error::ChordError;
use crate::pitch::{Note, SEMITONES_PER_OCTAVE};
use crate::registry::QualityRegistry;

/// Expand a parsed chord into its notes.
///
/// Each interval maps through `(root + interval) mod 12` and is respelled
/// with the canonical sharp preference. A bass note is removed from wherever
/// it falls in the sequence (compared by pitch class, so `Cb` matches `B`)
/// and reinserted at index 0 with the caller's spelling: slash notation
/// designates the bottom pitch whether or not it is chordal.
///
/// Fails with [`ChordError::InvalidChordQuality`] when the quality token is
/// not in the registry.
pub fn build(parsed: &ParsedChord, registry: &QualityRegistry) -> Result<Chord, ChordError> {
    let quality = registry
        .resolve(&parsed.quality)
        .ok_or_else(|| ChordError::InvalidChordQuality(parsed.quality.clone()))?;

    let intervals = quality.intervals();
    let root_pc = parsed.root.pitch_class();
    let mut notes: Vec<Note> = intervals
        .iter()
        .map(|&interval| Note::from_pitch_class((root_pc + interval) % SEMITONES_PER_OCTAVE))
        .collect();

    if let Some(bass) = parsed.bass_note {
        notes.retain(|note| note.pitch_class() != bass.pitch_class());
        notes.insert(0, bass);
    }

    Ok(Chord {
        root: parsed.root,
        quality,
        intervals: intervals.to_vec(),
        notes,
        bass_note: parsed.bass_note,
    })
}
