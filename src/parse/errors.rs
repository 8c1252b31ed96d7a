//! Error types for note-name parsing
//!
//! `parse` collapses all of these into a single "not a valid note" outcome;
//! `Note::try_parse` and `FromStr` keep the reason.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseNoteError {
    /// Nothing to parse (empty text, or a record with no note text)
    #[error("empty note name")]
    Empty,

    /// Text does not match `step accidental? octave?`
    #[error("malformed note name: {0:?}")]
    Malformed(String),

    /// Octave digits are well formed but too large to represent
    #[error("octave out of range in note name: {0:?}")]
    OctaveOutOfRange(String),
}
