//! Quality token normalization.
//!
//! Two tables, built once at engine construction and immutable afterwards:
//!
//! 1. An **alias table**: every canonical token maps to its quality, and
//!    every declared alias maps to the declaring quality. Aliasing must never
//!    be ambiguous; two qualities declaring the same alias is a construction
//!    error, not a tie silently broken.
//! 2. A **rewrite table** for the historical multi-token and
//!    parenthesis-normalized forms that cross quality boundaries (e.g.
//!    `"7#5"` resolves to `aug7`, a different quality than the `aug` that
//!    `"#5"` aliases). Rewrites take precedence over aliases for their
//!    specific keys.
//!
//! Normalizing twice is a no-op: canonical tokens always resolve to
//! themselves.

use std::collections::HashMap;

use crate::error::ChordError;
use crate::quality::{Quality, QUALITIES};

pub struct QualityRegistry {
    aliases: HashMap<&'static str, Quality>,
    rewrites: HashMap<&'static str, Quality>,
}

/// Rewrite rules applied with precedence over the alias table. Tokens on the
/// left are accepted input; the quality on the right is the resolution.
static REWRITE_RULES: &[(&str, Quality)] = &[
    ("(b9)", Quality::SevenFlat9),
    ("7(b9)", Quality::SevenFlat9),
    ("(#9)", Quality::SevenSharp9),
    ("7(#9)", Quality::SevenSharp9),
    ("(13)", Quality::Seven13),
    ("7(13)", Quality::Seven13),
    ("7+5", Quality::Aug7),
    ("7#5", Quality::Aug7),
    ("bbaug", Quality::Aug),
    ("baug", Quality::Aug),
    ("bbaugM7", Quality::Maj7Sharp5),
    ("baugM7", Quality::Maj7Sharp5),
    ("min", Quality::Minor),
];

impl QualityRegistry {
    /// Build the normalization tables. Fails with
    /// [`ChordError::DuplicateAlias`] if two qualities declare the same
    /// alias.
    pub fn new() -> Result<QualityRegistry, ChordError> {
        let mut aliases: HashMap<&'static str, Quality> = HashMap::new();

        for def in QUALITIES {
            for &token in std::iter::once(&def.token).chain(def.aliases) {
                if let Some(prev) = aliases.insert(token, def.quality) {
                    if prev != def.quality {
                        return Err(ChordError::DuplicateAlias {
                            alias: token.to_string(),
                            first: prev.token().to_string(),
                            second: def.quality.token().to_string(),
                        });
                    }
                }
            }
        }

        let rewrites = REWRITE_RULES.iter().copied().collect();

        Ok(QualityRegistry { aliases, rewrites })
    }

    /// Resolve a token to its quality, applying rewrites before aliases.
    /// `None` for tokens outside the catalogue.
    pub fn resolve(&self, token: &str) -> Option<Quality> {
        if let Some(&quality) = self.rewrites.get(token) {
            return Some(quality);
        }
        self.aliases.get(token).copied()
    }

    /// Normalize a token to its canonical form. Unknown tokens pass through
    /// unchanged; the builder rejects them later.
    pub fn normalize<'a>(&self, token: &'a str) -> &'a str {
        match self.resolve(token) {
            Some(quality) => quality.token(),
            None => token,
        }
    }
}
