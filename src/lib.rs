//! # cadenza
//!
//! A chord symbol reasoning engine. Three operations, all pure and
//! synchronous:
//!
//! 1. **Parse** a textual symbol (`"Faug7/B"`, `"C7(b9,#11)"`) into a
//!    root / quality / bass triple.
//! 2. **Build** the triple into the exact ordered pitches the chord
//!    contains, with the bass first for slash chords.
//! 3. **Search** the other way: from an unordered pitch selection (plus an
//!    optional designated bass), enumerate and rank every chord symbol that
//!    could describe it.
//!
//! The spelling and quality tables are built once when a [`ChordEngine`] is
//! constructed and never mutated afterwards, so one engine can be shared
//! freely across threads.
//!
//! ## Example
//! ```
//! use cadenza::ChordEngine;
//!
//! let engine = ChordEngine::new().unwrap();
//!
//! let chord = engine.chord("Faug7/B").unwrap();
//! let names: Vec<_> = chord.notes.iter().map(|n| n.as_str()).collect();
//! assert_eq!(names, ["B", "F", "A", "C#", "D#"]);
//!
//! let notes = engine.chord("C").unwrap().notes;
//! let found = engine.find_chords(&notes, None);
//! assert_eq!(found.exact[0].name, "C");
//! ```

pub mod builder;
pub mod chord;
pub mod error;
pub mod parser;
pub mod pitch;
pub mod quality;
pub mod registry;
pub mod search;

pub use chord::{Chord, ParsedChord};
pub use error::ChordError;
pub use pitch::{midi_to_frequency, Note};
pub use quality::{Category, Quality};
pub use registry::QualityRegistry;
pub use search::{ChordSuggestion, ChordSuggestionResult, SearchConfig};

/// The engine: the one-time-built quality registry plus search tuning.
///
/// Construction is the only fallible, non-trivial step; every operation
/// afterwards is a pure function over the immutable tables.
pub struct ChordEngine {
    registry: QualityRegistry,
    config: SearchConfig,
}

impl ChordEngine {
    /// Build an engine with the default search tuning.
    pub fn new() -> Result<ChordEngine, ChordError> {
        ChordEngine::with_config(SearchConfig::default())
    }

    /// Build an engine with custom search tuning.
    pub fn with_config(config: SearchConfig) -> Result<ChordEngine, ChordError> {
        Ok(ChordEngine {
            registry: QualityRegistry::new()?,
            config,
        })
    }

    /// Parse a chord symbol into its parts without validating the quality.
    pub fn parse(&self, symbol: &str) -> Result<ParsedChord, ChordError> {
        parser::parse(symbol, &self.registry)
    }

    /// Expand a parsed chord into concrete pitches.
    pub fn build(&self, parsed: &ParsedChord) -> Result<Chord, ChordError> {
        builder::build(parsed, &self.registry)
    }

    /// Parse and build in one step.
    pub fn chord(&self, symbol: &str) -> Result<Chord, ChordError> {
        self.build(&self.parse(symbol)?)
    }

    /// Rank every chord symbol that could describe the selection.
    pub fn find_chords(
        &self,
        selected: &[Note],
        bass: Option<Note>,
    ) -> ChordSuggestionResult {
        search::search(selected, bass, &self.config)
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// Parse a single symbol with a throwaway engine.
pub fn parse_symbol(symbol: &str) -> Result<ParsedChord, ChordError> {
    ChordEngine::new()?.parse(symbol)
}

/// Parse and build a single symbol with a throwaway engine.
pub fn chord_from_symbol(symbol: &str) -> Result<Chord, ChordError> {
    ChordEngine::new()?.chord(symbol)
}
