//! Chord symbol parsing.
//!
//! Splits a textual symbol like `"Faug7/B"` or `"C7(b9,#11)"` into root,
//! quality token, and optional bass. The quality token is normalized through
//! the registry but deliberately *not* validated here; an unknown quality
//! is the builder's error, so parsing alone never needs the full catalogue.

use crate::chord::ParsedChord;
use crate::error::ChordError;
use crate::pitch::Note;
use crate::quality::Quality;
use crate::registry::QualityRegistry;

/// Parse a chord symbol.
///
/// Fails only on an unresolvable root or bass token.
///
/// # Example
/// ```
/// use cadenza::{ChordEngine, Note};
///
/// let engine = ChordEngine::new().unwrap();
/// let parsed = engine.parse("Faug7/B").unwrap();
/// assert_eq!(parsed.root, Note::F);
/// assert_eq!(parsed.quality, "aug7");
/// assert_eq!(parsed.bass_note, Some(Note::B));
/// ```
pub fn parse(input: &str, registry: &QualityRegistry) -> Result<ParsedChord, ChordError> {
    let symbol = capitalize_first(input.trim());

    let (body, bass_token) = split_bass(&symbol);

    let (root_token, quality_token) = split_root(body);
    let root = Note::from_name(root_token)
        .ok_or_else(|| ChordError::InvalidRoot(root_token.to_string()))?;

    let bass_note = match bass_token {
        Some(token) => {
            let token = capitalize_first(token);
            let bass =
                Note::from_name(&token).ok_or(ChordError::InvalidBassNote(token))?;
            Some(bass)
        }
        None => None,
    };

    let raw_quality = if quality_token.is_empty() {
        Quality::Major.token()
    } else {
        quality_token
    };
    let quality = registry.normalize(raw_quality).to_string();

    Ok(ParsedChord {
        root,
        quality,
        bass_note,
    })
}

/// Uppercase the first character only; qualities like `m7` stay lowercase.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Split off a slash bass. A `/` inside `6/9` (or `maj6/9`) belongs to the
/// quality, not an inversion marker.
fn split_bass(symbol: &str) -> (&str, Option<&str>) {
    if symbol.contains("6/9") {
        return (symbol, None);
    }
    match symbol.find('/') {
        Some(idx) => (&symbol[..idx], Some(&symbol[idx + 1..])),
        None => (symbol, None),
    }
}

/// Extract the root token: prefer a 3-char double accidental (`##`/`bb`),
/// then a 2-char single accidental, then a bare letter. Works on char
/// boundaries since quality tokens may contain multibyte symbols (`△`, `ø`).
fn split_root(body: &str) -> (&str, &str) {
    let chars: Vec<(usize, char)> = body.char_indices().collect();
    let ch = |i: usize| chars.get(i).map(|&(_, c)| c);

    let root_len = if chars.is_empty() {
        0
    } else if (ch(1) == Some('#') && ch(2) == Some('#'))
        || (ch(1) == Some('b') && ch(2) == Some('b'))
    {
        3
    } else if ch(1) == Some('#') || ch(1) == Some('b') {
        2
    } else {
        1
    };

    let end = chars
        .get(root_len)
        .map(|&(offset, _)| offset)
        .unwrap_or(body.len());
    (&body[..end], &body[end..])
}
