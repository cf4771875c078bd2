//! Reverse lookup: from a pitch selection to ranked chord suggestions.
//!
//! Every selected pitch is tried as a candidate root against every quality in
//! the catalogue (minus a fixed exclusion set of redundant entries). Each
//! candidate is scored on **coverage** (how much of the formula the selection
//! supplies) and **precision** (how much of the selection the formula
//! consumes), then classified exact or partial under the bass rules below,
//! deduplicated, ranked, and capped.
//!
//! Bass handling:
//! - no bass given, all chord tones covered, exactly one selected pitch left
//!   over: the leftover is inferred as a slash bass and the candidate is an
//!   exact match with the leftover at position 0;
//! - bass given and chordal: an inversion; exact only when the selection
//!   equals the chord tones;
//! - bass given and non-chordal: a true slash chord; exact only when the
//!   selection contains the bass and the rest equals the chord tones.
//!
//! The thresholds, weights, penalties and caps are tuning constants, not
//! semantics; they live in [`SearchConfig`] and can be overridden wholesale.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::pitch::{Note, SEMITONES_PER_OCTAVE};
use crate::quality::{Category, Quality, QualityDef, QUALITIES};

/// Qualities skipped during candidate enumeration: formulas duplicated
/// elsewhere in the catalogue or too degenerate to suggest.
const EXCLUDED_QUALITIES: [Quality; 5] = [
    Quality::Maj7Sharp5,
    Quality::Omit3,
    Quality::Five,
    Quality::Omit5,
    Quality::Maj7Omit3,
];

/// Tuning constants for the search. All overridable; `Default` holds the
/// shipped values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SearchConfig {
    /// Weight of coverage vs precision in the match score.
    pub coverage_weight: f64,
    /// Minimum chord tones that must appear in the selection.
    pub min_overlap_notes: usize,
    /// ...or this fraction of the formula, whichever is larger.
    pub min_coverage: f64,
    /// Partial suggestions scoring below this are discarded.
    pub min_partial_score: f64,
    /// Simplicity penalty for inversions (chordal slash bass).
    pub inversion_penalty: f64,
    /// Simplicity penalty for true slash and inferred-bass forms.
    pub slash_penalty: f64,
    /// Simplicity penalty for Add-category qualities.
    pub add_penalty: f64,
    /// Simplicity penalty for Omit-category qualities.
    pub omit_penalty: f64,
    /// Simplicity for qualities outside the base table.
    pub complex_penalty: f64,
    /// Cap on the exact list.
    pub max_exact: usize,
    /// Cap on the partial list.
    pub max_partial: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            coverage_weight: 0.7,
            min_overlap_notes: 2,
            min_coverage: 0.5,
            min_partial_score: 0.4,
            inversion_penalty: 1.0,
            slash_penalty: 2.0,
            add_penalty: 0.5,
            omit_penalty: 0.5,
            complex_penalty: 9.0,
            max_exact: 5,
            max_partial: 8,
        }
    }
}

/// One ranked candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordSuggestion {
    pub name: String,
    pub root: Note,
    pub quality: Quality,
    pub notes: Vec<Note>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bass_note: Option<Note>,
    pub match_score: f64,
    pub exact_match: bool,
    pub simplicity_score: f64,
}

/// Exact and partial suggestion lists, each sorted and capped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChordSuggestionResult {
    pub exact: Vec<ChordSuggestion>,
    pub partial: Vec<ChordSuggestion>,
}

/// Enumerate and rank every chord symbol that could describe the selection.
///
/// An empty selection returns two empty lists; the search itself never
/// fails.
pub fn search(
    selected: &[Note],
    bass: Option<Note>,
    config: &SearchConfig,
) -> ChordSuggestionResult {
    if selected.is_empty() {
        return ChordSuggestionResult::default();
    }

    // Deduplicate by pitch class; the first spelling wins.
    let mut unique: Vec<Note> = Vec::new();
    let mut sel_mask = 0u16;
    for &note in selected {
        let bit = 1u16 << note.pitch_class();
        if sel_mask & bit == 0 {
            sel_mask |= bit;
            unique.push(note);
        }
    }

    let bass_pc = bass.map(|b| b.pitch_class());

    // Candidate roots: the bass first when given, then the other selections.
    let mut roots: Vec<Note> = Vec::new();
    if let Some(b) = bass {
        roots.push(b);
    }
    for &note in &unique {
        if Some(note.pitch_class()) != bass_pc {
            roots.push(note);
        }
    }

    let mut candidates: Vec<ChordSuggestion> = Vec::new();
    for &root in &roots {
        for def in QUALITIES {
            if EXCLUDED_QUALITIES.contains(&def.quality) {
                continue;
            }
            evaluate(root, def, &unique, sel_mask, bass, config, &mut candidates);
        }
    }

    candidates.sort_by(compare);

    // The same pitch set is often reachable from several roots; keep the
    // first occurrence of each (name, notes) pair.
    let mut seen: HashSet<(String, Vec<Note>)> = HashSet::new();
    let mut exact = Vec::new();
    let mut partial = Vec::new();
    for suggestion in candidates {
        if !seen.insert((suggestion.name.clone(), suggestion.notes.clone())) {
            continue;
        }
        if suggestion.exact_match {
            if exact.len() < config.max_exact {
                exact.push(suggestion);
            }
        } else if suggestion.match_score >= config.min_partial_score
            && partial.len() < config.max_partial
        {
            partial.push(suggestion);
        }
    }

    ChordSuggestionResult { exact, partial }
}

/// Score one (root, quality) candidate and push its suggestion(s).
fn evaluate(
    root: Note,
    def: &'static QualityDef,
    unique: &[Note],
    sel_mask: u16,
    bass: Option<Note>,
    config: &SearchConfig,
    out: &mut Vec<ChordSuggestion>,
) {
    let root_pc = root.pitch_class();
    let tones: Vec<Note> = def
        .intervals
        .iter()
        .map(|&i| Note::from_pitch_class((root_pc + i) % SEMITONES_PER_OCTAVE))
        .collect();
    let mut tone_mask = 0u16;
    for tone in &tones {
        tone_mask |= 1u16 << tone.pitch_class();
    }
    let tone_count = tone_mask.count_ones() as f64;

    let overlap = (sel_mask & tone_mask).count_ones() as f64;
    let required = (config.min_overlap_notes as f64).max(tone_count * config.min_coverage);
    if overlap < required {
        return;
    }

    let sel_count = sel_mask.count_ones() as f64;
    let coverage = overlap / tone_count;
    let base_simplicity = simplicity(def.quality, config);

    match bass {
        Some(b) => {
            let bass_bit = 1u16 << b.pitch_class();
            let bass_in_selection = sel_mask & bass_bit != 0;
            let bass_in_tones = tone_mask & bass_bit != 0;
            let stripped_sel = sel_mask & !bass_bit;

            // The slash designation consumes the bass when it was selected.
            let consumed = (stripped_sel & tone_mask).count_ones() as f64
                + if bass_in_selection { 1.0 } else { 0.0 };
            let precision = consumed / sel_count;
            let score = config.coverage_weight * coverage
                + (1.0 - config.coverage_weight) * precision;

            if bass_in_tones {
                let exact = sel_mask == tone_mask;
                if b.pitch_class() == root_pc {
                    out.push(ChordSuggestion {
                        name: plain_name(root, def.quality),
                        root,
                        quality: def.quality,
                        notes: tones,
                        bass_note: None,
                        match_score: score,
                        exact_match: exact,
                        simplicity_score: base_simplicity,
                    });
                } else {
                    let mut notes = vec![b];
                    notes.extend(
                        tones
                            .iter()
                            .copied()
                            .filter(|t| t.pitch_class() != b.pitch_class()),
                    );
                    out.push(ChordSuggestion {
                        name: slash_name(root, def.quality, b),
                        root,
                        quality: def.quality,
                        notes,
                        bass_note: Some(b),
                        match_score: score,
                        exact_match: exact,
                        simplicity_score: base_simplicity + config.inversion_penalty,
                    });
                }
            } else {
                // True slash chord: exact only when the bass was actually
                // selected and the rest matches the formula.
                let exact = bass_in_selection && stripped_sel == tone_mask;
                let mut notes = vec![b];
                notes.extend(tones.iter().copied());
                out.push(ChordSuggestion {
                    name: slash_name(root, def.quality, b),
                    root,
                    quality: def.quality,
                    notes,
                    bass_note: Some(b),
                    match_score: score,
                    exact_match: exact,
                    simplicity_score: base_simplicity + config.slash_penalty,
                });
            }
        }
        None => {
            let precision = overlap / sel_count;
            let score = config.coverage_weight * coverage
                + (1.0 - config.coverage_weight) * precision;
            let exact = sel_mask == tone_mask;

            out.push(ChordSuggestion {
                name: plain_name(root, def.quality),
                root,
                quality: def.quality,
                notes: tones.clone(),
                bass_note: None,
                match_score: score,
                exact_match: exact,
                simplicity_score: base_simplicity,
            });

            // All chord tones covered with exactly one selected pitch left
            // over: infer the leftover as a slash bass.
            let leftover_mask = sel_mask & !tone_mask;
            if sel_mask & tone_mask == tone_mask && leftover_mask.count_ones() == 1 {
                if let Some(&leftover) = unique
                    .iter()
                    .find(|n| 1u16 << n.pitch_class() == leftover_mask)
                {
                    let mut notes = vec![leftover];
                    notes.extend(tones.iter().copied());
                    out.push(ChordSuggestion {
                        name: slash_name(root, def.quality, leftover),
                        root,
                        quality: def.quality,
                        notes,
                        bass_note: Some(leftover),
                        match_score: 1.0,
                        exact_match: true,
                        simplicity_score: base_simplicity + config.slash_penalty,
                    });
                }
            }
        }
    }
}

fn plain_name(root: Note, quality: Quality) -> String {
    format!("{}{}", root.as_str(), quality.suffix())
}

fn slash_name(root: Note, quality: Quality, bass: Note) -> String {
    format!("{}{}/{}", root.as_str(), quality.suffix(), bass.as_str())
}

/// Lower is simpler. Triads and plain sevenths rank ahead of extended and
/// altered voicings; add/omit forms take a light extra penalty.
fn simplicity(quality: Quality, config: &SearchConfig) -> f64 {
    let base = match quality {
        Quality::Major => 0.0,
        Quality::Minor => 1.0,
        Quality::Seven => 2.0,
        Quality::Maj7 | Quality::Min7 => 3.0,
        Quality::Sus4 | Quality::Sus2 => 4.0,
        Quality::Dim | Quality::Aug | Quality::Six => 5.0,
        Quality::Min6 => 6.0,
        Quality::Nine | Quality::Add9 => 7.0,
        Quality::Min9 | Quality::Maj9 => 8.0,
        _ => config.complex_penalty,
    };
    let category = match quality.category() {
        Category::Add => config.add_penalty,
        Category::Omit => config.omit_penalty,
        _ => 0.0,
    };
    base + category
}

/// Exact before partial, then best score, then simplest, then shortest name.
fn compare(a: &ChordSuggestion, b: &ChordSuggestion) -> Ordering {
    b.exact_match
        .cmp(&a.exact_match)
        .then_with(|| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| {
            a.simplicity_score
                .partial_cmp(&b.simplicity_score)
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.name.len().cmp(&b.name.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notes(names: &[&str]) -> Vec<Note> {
        names.iter().map(|n| Note::from_name(n).unwrap()).collect()
    }

    fn find(selected: &[&str], bass: Option<&str>) -> ChordSuggestionResult {
        search(
            &notes(selected),
            bass.map(|b| Note::from_name(b).unwrap()),
            &SearchConfig::default(),
        )
    }

    fn names(list: &[ChordSuggestion]) -> Vec<&str> {
        list.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_empty_selection_returns_empty_lists() {
        let result = find(&[], None);
        assert!(result.exact.is_empty());
        assert!(result.partial.is_empty());
    }

    #[test]
    fn test_major_triad_is_found_and_ranked_first() {
        let result = find(&["C", "E", "G"], None);
        assert!(!result.exact.is_empty());
        assert_eq!(result.exact[0].name, "C");
        assert!(result.exact[0].exact_match);
        assert!((result.exact[0].match_score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_minor_triad_is_found() {
        let result = find(&["A", "C", "E"], None);
        assert!(names(&result.exact).contains(&"Am"));
    }

    #[test]
    fn test_selection_order_does_not_matter() {
        let a = find(&["C", "E", "G"], None);
        let b = find(&["G", "C", "E"], None);
        assert_eq!(names(&a.exact), names(&b.exact));
    }

    #[test]
    fn test_sevenths_are_exact_for_their_own_tones() {
        let result = find(&["G", "B", "D", "F"], None);
        assert!(names(&result.exact).contains(&"G7"));
    }

    #[test]
    fn test_enharmonic_selections_match() {
        // Db F Ab spelled with flats still finds the sharp-spelled candidates
        let result = find(&["Db", "F", "Ab"], None);
        assert!(names(&result.exact).contains(&"Db"));
    }

    #[test]
    fn test_augmented_triad_is_reachable_from_all_three_members() {
        let result = find(&["C", "E", "G#"], None);
        let exact = names(&result.exact);
        assert!(exact.contains(&"Caug"));
        assert!(exact.contains(&"Eaug"));
        assert!(exact.contains(&"G#aug"));
    }

    #[test]
    fn test_excluded_qualities_never_appear() {
        let result = find(&["C", "G"], None);
        let all: Vec<&str> = result
            .exact
            .iter()
            .chain(result.partial.iter())
            .map(|s| s.name.as_str())
            .collect();
        assert!(!all.contains(&"C5"));
        assert!(!all.contains(&"Comit3"));
    }

    #[test]
    fn test_leftover_pitch_becomes_an_inferred_bass() {
        let result = find(&["C", "E", "G", "C#"], None);
        let slash = result
            .exact
            .iter()
            .find(|s| s.name == "C/C#")
            .expect("inferred slash bass");
        assert_eq!(slash.bass_note, Some(Note::CSharp));
        assert_eq!(slash.notes[0], Note::CSharp);
        assert!(slash.exact_match);
    }

    #[test]
    fn test_specified_root_bass_keeps_the_plain_name() {
        let result = find(&["C", "E", "G"], Some("C"));
        assert!(!result.exact.is_empty());
        assert_eq!(result.exact[0].name, "C");
        for suggestion in &result.exact {
            assert!(
                suggestion
                    .notes
                    .iter()
                    .any(|n| n.pitch_class() == Note::C.pitch_class()),
                "{} is missing the bass",
                suggestion.name
            );
        }
    }

    #[test]
    fn test_unselected_bass_blocks_exact_matches() {
        let result = find(&["C", "E", "G"], Some("F"));
        assert!(result.exact.is_empty());
        assert!(!result.partial.is_empty());
    }

    #[test]
    fn test_chordal_bass_yields_slash_exact_matches() {
        let result = find(&["C", "E", "G", "A"], Some("A"));
        let exact = names(&result.exact);
        assert!(exact.contains(&"C6/A"));
        assert!(exact.contains(&"Am7"));
        for suggestion in &result.exact {
            assert!(suggestion
                .notes
                .iter()
                .any(|n| n.pitch_class() == Note::A.pitch_class()));
        }
    }

    #[test]
    fn test_inversion_puts_the_bass_first() {
        let result = find(&["C", "E", "G"], Some("E"));
        let inversion = result
            .exact
            .iter()
            .find(|s| s.name == "C/E")
            .expect("C/E inversion");
        assert_eq!(inversion.notes[0], Note::E);
        assert_eq!(inversion.bass_note, Some(Note::E));
    }

    #[test]
    fn test_true_slash_bass_with_selected_bass_is_exact() {
        // D F A C over a selected G bass: Dm7/G
        let result = find(&["G", "D", "F", "A", "C"], Some("G"));
        let slash = result
            .exact
            .iter()
            .find(|s| s.name == "Dm7/G")
            .expect("Dm7/G");
        assert_eq!(slash.notes[0], Note::G);
        assert!(slash.exact_match);
    }

    #[test]
    fn test_extra_pitches_force_partial() {
        let result = find(&["C", "E", "G", "F#", "A"], None);
        let c = result
            .partial
            .iter()
            .find(|s| s.name == "C")
            .expect("partial C");
        assert!(!c.exact_match);
        assert!(c.match_score < 1.0);
    }

    #[test]
    fn test_duplicate_selections_collapse() {
        let a = find(&["C", "E", "G"], None);
        let b = find(&["C", "C", "E", "E", "G"], None);
        assert_eq!(names(&a.exact), names(&b.exact));
    }

    #[test]
    fn test_enharmonic_duplicates_collapse() {
        let a = find(&["C", "E", "G"], None);
        let b = find(&["C", "Dbb", "E", "G"], None);
        assert_eq!(names(&a.exact), names(&b.exact));
    }

    #[test]
    fn test_results_respect_the_caps() {
        let config = SearchConfig::default();
        let result = find(&["C", "D", "E", "G", "A", "B"], None);
        assert!(result.exact.len() <= config.max_exact);
        assert!(result.partial.len() <= config.max_partial);
    }

    #[test]
    fn test_partial_scores_stay_above_the_floor() {
        let config = SearchConfig::default();
        let result = find(&["C", "E", "G", "B", "D", "F#"], None);
        for suggestion in &result.partial {
            assert!(suggestion.match_score >= config.min_partial_score);
        }
    }

    #[test]
    fn test_suggestions_are_deduplicated() {
        let result = find(&["C", "E", "G", "A"], None);
        let mut seen = HashSet::new();
        for suggestion in result.exact.iter().chain(result.partial.iter()) {
            assert!(
                seen.insert((suggestion.name.clone(), suggestion.notes.clone())),
                "duplicate suggestion {}",
                suggestion.name
            );
        }
    }

    #[test]
    fn test_custom_caps_are_honored() {
        let config = SearchConfig {
            max_partial: 2,
            ..SearchConfig::default()
        };
        let result = search(&notes(&["C", "E", "G"]), None, &config);
        assert!(result.partial.len() <= 2);
    }

    #[test]
    fn test_config_deserializes_from_partial_yaml() {
        let config: SearchConfig =
            serde_yaml::from_str("max-exact: 3\nmin-partial-score: 0.6\n").unwrap();
        assert_eq!(config.max_exact, 3);
        assert!((config.min_partial_score - 0.6).abs() < 1e-9);
        assert_eq!(config.max_partial, SearchConfig::default().max_partial);
    }
}
