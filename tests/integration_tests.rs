//! Integration tests for the chord engine.
//!
//! Exercises the full pipeline: symbol -> parse -> build -> notes, and the
//! reverse search from a pitch selection back to ranked symbols.

use pretty_assertions::assert_eq;

use cadenza::{chord_from_symbol, parse_symbol, ChordEngine, ChordError, Note, SearchConfig};

fn engine() -> ChordEngine {
    ChordEngine::new().expect("engine construction")
}

fn note_names(notes: &[Note]) -> Vec<&'static str> {
    notes.iter().map(|n| n.as_str()).collect()
}

#[test]
fn test_major_chord_end_to_end() {
    let engine = engine();
    let parsed = engine.parse("C").unwrap();
    assert_eq!(parsed.root, Note::C);
    assert_eq!(parsed.quality, "maj");
    assert_eq!(parsed.bass_note, None);

    let chord = engine.build(&parsed).unwrap();
    assert_eq!(note_names(&chord.notes), vec!["C", "E", "G"]);
}

#[test]
fn test_slash_chord_puts_the_bass_first() {
    let chord = engine().chord("C/G").unwrap();
    assert_eq!(note_names(&chord.notes), vec!["G", "C", "E"]);
    assert_eq!(chord.bass_note, Some(Note::G));
}

#[test]
fn test_augmented_seventh_slash_chord() {
    let chord = engine().chord("Faug7/B").unwrap();
    assert_eq!(note_names(&chord.notes), vec!["B", "F", "A", "C#", "D#"]);
}

#[test]
fn test_minor_major_thirteenth_with_bass() {
    let chord = engine().chord("AmM13/D").unwrap();
    assert_eq!(chord.notes.len(), 7);
    assert_eq!(chord.notes[0], Note::D);
    assert_eq!(chord.to_string(), "AmM13/D");
}

#[test]
fn test_parse_normalization_is_idempotent() {
    let engine = engine();
    for symbol in [
        "C", "c", "Am", "AM7", "C7+5", "Faug7/B", "C6/9", "Cmaj69", "C(b9)",
        "Dsus", "Ebo7", "F#-7", "Bbbaug/Cb", "AmM13/D", "C(9)", "Gno3",
    ] {
        let parsed = engine.parse(symbol).unwrap();
        let reparsed = engine.parse(&parsed.symbol()).unwrap();
        assert_eq!(parsed, reparsed, "normalizing {symbol} twice diverged");
    }
}

#[test]
fn test_built_notes_lead_with_the_root_pitch_class() {
    let engine = engine();
    for symbol in ["C", "Am", "F#7", "Bbm7b5", "Ebb", "G##dim", "Cmaj7(9,13)"] {
        let chord = engine.chord(symbol).unwrap();
        assert_eq!(
            chord.notes[0].pitch_class(),
            chord.root.pitch_class(),
            "{symbol}"
        );
    }
}

#[test]
fn test_chordal_bass_removes_its_duplicate() {
    let engine = engine();
    for (symbol, bass) in [("C/E", Note::E), ("G7/D", Note::D), ("Am/E", Note::E)] {
        let chord = engine.chord(symbol).unwrap();
        assert_eq!(chord.notes[0], bass);
        let duplicates = chord
            .notes
            .iter()
            .filter(|n| n.pitch_class() == bass.pitch_class())
            .count();
        assert_eq!(duplicates, 1, "{symbol} kept a duplicate bass");
    }
}

#[test]
fn test_search_finds_the_chord_it_was_built_from() {
    let engine = engine();
    for symbol in ["C", "Am", "G7", "Fmaj7", "Dm7b5", "Caug"] {
        let chord = engine.chord(symbol).unwrap();
        let result = engine.find_chords(&chord.notes, None);
        assert!(
            result.exact.iter().any(|s| s.name == symbol),
            "{symbol} missing from exact matches: {:?}",
            result.exact.iter().map(|s| &s.name).collect::<Vec<_>>()
        );
    }
}

#[test]
fn test_search_on_empty_selection_is_empty() {
    let result = engine().find_chords(&[], None);
    assert_eq!(result.exact, vec![]);
    assert_eq!(result.partial, vec![]);
}

#[test]
fn test_search_ranks_the_simple_reading_first() {
    let result = engine().find_chords(&[Note::C, Note::E, Note::G], None);
    assert_eq!(result.exact[0].name, "C");
    assert!(result.exact[0].exact_match);
}

#[test]
fn test_unselected_bass_rules_out_exact_matches() {
    let result = engine().find_chords(&[Note::C, Note::E, Note::G], Some(Note::F));
    assert!(result.exact.is_empty());
    assert!(!result.partial.is_empty());
}

#[test]
fn test_double_accidentals_are_consistent_everywhere() {
    assert_eq!(
        Note::CDoubleSharp.pitch_class(),
        Note::D.pitch_class()
    );
    assert_eq!(
        Note::FDoubleFlat.pitch_class(),
        Note::EFlat.pitch_class()
    );

    let engine = engine();
    let fbb = engine.chord("Fbb").unwrap();
    let eb = engine.chord("Eb").unwrap();
    let fbb_pcs: Vec<u8> = fbb.notes.iter().map(|n| n.pitch_class()).collect();
    let eb_pcs: Vec<u8> = eb.notes.iter().map(|n| n.pitch_class()).collect();
    assert_eq!(fbb_pcs, eb_pcs);
}

#[test]
fn test_search_over_enharmonic_spellings_still_matches() {
    let engine = engine();
    let notes = engine.chord("Fb").unwrap().notes;
    let result = engine.find_chords(&notes, None);
    assert!(!result.exact.is_empty() || !result.partial.is_empty());
}

#[test]
fn test_invalid_inputs_fail_fast() {
    let engine = engine();
    assert!(matches!(
        engine.chord("X"),
        Err(ChordError::InvalidRoot(_))
    ));
    assert!(matches!(
        engine.chord("C/H"),
        Err(ChordError::InvalidBassNote(_))
    ));
    assert!(matches!(
        engine.chord("Cxyz"),
        Err(ChordError::InvalidChordQuality(_))
    ));
}

#[test]
fn test_convenience_functions_match_the_engine() {
    let via_engine = engine().chord("G7").unwrap();
    let via_function = chord_from_symbol("G7").unwrap();
    assert_eq!(via_engine, via_function);

    let parsed = parse_symbol("G7").unwrap();
    assert_eq!(parsed, engine().parse("G7").unwrap());
}

#[test]
fn test_custom_tuning_changes_the_result_shape() {
    let tight = ChordEngine::with_config(SearchConfig {
        max_partial: 1,
        ..SearchConfig::default()
    })
    .unwrap();
    let result = tight.find_chords(&[Note::C, Note::E, Note::G], None);
    assert!(result.partial.len() <= 1);

    let strict = ChordEngine::with_config(SearchConfig {
        min_partial_score: 2.0,
        ..SearchConfig::default()
    })
    .unwrap();
    let result = strict.find_chords(&[Note::C, Note::E, Note::G], None);
    assert!(result.partial.is_empty());
}

#[test]
fn test_engine_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ChordEngine>();

    let engine = std::sync::Arc::new(engine());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            std::thread::spawn(move || engine.chord("C7").unwrap().notes.len())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 4);
    }
}
