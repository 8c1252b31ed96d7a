//! Shared accidental helpers
//!
//! Accidental strings reach these helpers already validated by the note
//! grammar: a run of `#`, a run of `b`, or a run of `x`.

/// Expand every `x` (double sharp) into two `#` characters
pub fn expand_double_sharps(accidentals: &str) -> String {
    accidentals.replace('x', "##")
}

/// Signed semitone offset of an expanded accidental string
///
/// Only the first character decides the sign: `#` counts up, anything else
/// counts down. Empty means natural.
pub fn alter_from_accidentals(accidentals: &str) -> i32 {
    let count = accidentals.chars().count() as i32;
    match accidentals.chars().next() {
        None => 0,
        Some('#') => count,
        Some(_) => -count,
    }
}
