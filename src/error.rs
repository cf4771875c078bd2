//! Error types for chord parsing, building, and registry construction.
//!
//! All errors are local validation failures raised synchronously at the point
//! of detection; nothing is retried or recovered internally. A malformed
//! symbol never produces a partial or best-guess chord.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChordError {
    /// The root token of a chord symbol does not resolve to a known spelling.
    ///
    /// # Example
    /// ```
    /// # use cadenza::ChordError;
    /// let err = ChordError::InvalidRoot("X".to_string());
    /// assert_eq!(err.to_string(), "Invalid root note: X");
    /// ```
    #[error("Invalid root note: {0}")]
    InvalidRoot(String),

    /// The bass token after the slash does not resolve to a known spelling.
    #[error("Invalid bass note: {0}")]
    InvalidBassNote(String),

    /// The normalized quality token is not present in the quality registry.
    ///
    /// Raised by the builder, not the parser: parsing only extracts and
    /// normalizes the token.
    ///
    /// # Example
    /// ```
    /// # use cadenza::ChordError;
    /// let err = ChordError::InvalidChordQuality("xyz".to_string());
    /// assert_eq!(err.to_string(), "Invalid chord quality: xyz");
    /// ```
    #[error("Invalid chord quality: {0}")]
    InvalidChordQuality(String),

    /// Two quality definitions declared the same alias.
    ///
    /// Registry construction fails rather than silently picking one.
    #[error("Alias '{alias}' is declared by both '{first}' and '{second}'")]
    DuplicateAlias {
        alias: String,
        first: String,
        second: String,
    },
}
