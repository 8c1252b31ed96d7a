//! Note-name parser
//!
//! Accepts scientific pitch notation: a step letter (either case), an
//! optional accidental run (`#`x1-4, `b`x1-4 or `x`x1-2, never mixed) and
//! optional octave digits. The whole text must match.
//!
//! ```
//! use note_parser_wasm::{parse, Step};
//!
//! let n = parse("Gb5").unwrap();
//! assert_eq!(n.step(), Step::G);
//! assert_eq!(n.alter(), -1);
//! assert_eq!(n.pc(), 6);
//! assert!(parse("C#b").is_none());
//! ```

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::note::{Note, Step, DEFAULT_OCTAVE, MAX_DOUBLE_SHARPS, MAX_SHARPS_OR_FLATS};
use crate::parse::errors::ParseNoteError;
use crate::utils::pitch_utils::{alter_from_accidentals, expand_double_sharps};

/// Anchored grammar: step, accidental group (possibly empty), octave digits (possibly empty)
static NOTE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"^([a-gA-G])(#{{1,{n}}}|b{{1,{n}}}|x{{1,{x}}}|)([0-9]*)$",
        n = MAX_SHARPS_OR_FLATS,
        x = MAX_DOUBLE_SHARPS,
    );
    Regex::new(&pattern).expect("note grammar is a valid regex")
});

/// What `parse` accepts: raw text, a record parsed earlier, or nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteInput<'a> {
    Absent,
    Text(&'a str),
    /// Re-parsed from its stored `note` text; other fields are ignored
    Parsed(&'a Note),
}

impl<'a> From<&'a str> for NoteInput<'a> {
    fn from(text: &'a str) -> Self {
        NoteInput::Text(text)
    }
}

impl<'a> From<&'a String> for NoteInput<'a> {
    fn from(text: &'a String) -> Self {
        NoteInput::Text(text.as_str())
    }
}

impl<'a> From<&'a Note> for NoteInput<'a> {
    fn from(note: &'a Note) -> Self {
        NoteInput::Parsed(note)
    }
}

impl<'a, T> From<Option<T>> for NoteInput<'a>
where
    T: Into<NoteInput<'a>>,
{
    fn from(input: Option<T>) -> Self {
        input.map_or(NoteInput::Absent, Into::into)
    }
}

/// Parse a note name, returning `None` when it is not a valid note.
pub fn parse<'a>(input: impl Into<NoteInput<'a>>) -> Option<Note> {
    match input.into() {
        NoteInput::Absent => None,
        NoteInput::Text(text) => Note::try_parse(text).ok(),
        NoteInput::Parsed(previous) => parse(previous.note()),
    }
}

impl Note {
    /// Parse a note name, keeping the reason it was rejected
    pub fn try_parse(text: &str) -> Result<Note, ParseNoteError> {
        let result = parse_note_name(text);
        match &result {
            Ok(note) => log::debug!("parse('{}') -> {:?}", text, note),
            Err(e) => log::debug!("parse('{}') rejected: {}", text, e),
        }
        result
    }
}

impl FromStr for Note {
    type Err = ParseNoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Note::try_parse(s)
    }
}

fn parse_note_name(text: &str) -> Result<Note, ParseNoteError> {
    if text.is_empty() {
        return Err(ParseNoteError::Empty);
    }

    let malformed = || ParseNoteError::Malformed(text.to_string());
    let caps = NOTE_PATTERN.captures(text).ok_or_else(malformed)?;

    let step = caps[1]
        .chars()
        .next()
        .and_then(Step::from_letter)
        .ok_or_else(malformed)?;

    let acc = expand_double_sharps(&caps[2]);

    let digits = &caps[3];
    let oct = if digits.is_empty() {
        DEFAULT_OCTAVE
    } else {
        digits
            .parse::<i32>()
            .map_err(|_| ParseNoteError::OctaveOutOfRange(text.to_string()))?
    };

    let alter = alter_from_accidentals(&acc);

    Ok(Note {
        note: caps[0].to_string(),
        step,
        acc,
        oct,
        alter,
        pc: step.semitones() + alter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_natural_without_octave() {
        let n = parse("C").unwrap();
        assert_eq!(n.note(), "C");
        assert_eq!(n.step(), Step::C);
        assert_eq!(n.acc(), "");
        assert_eq!(n.oct(), 4);
        assert_eq!(n.alter(), 0);
        assert_eq!(n.pc(), 0);
    }

    #[test]
    fn test_parse_sharp_with_octave() {
        let n = parse("C#2").unwrap();
        assert_eq!(n.note(), "C#2");
        assert_eq!(n.acc(), "#");
        assert_eq!(n.oct(), 2);
        assert_eq!(n.alter(), 1);
        assert_eq!(n.pc(), 1);
    }

    #[test]
    fn test_lowercase_b_step_followed_by_flat() {
        let n = parse("bb3").unwrap();
        assert_eq!(n.note(), "bb3");
        assert_eq!(n.step(), Step::B);
        assert_eq!(n.acc(), "b");
        assert_eq!(n.oct(), 3);
        assert_eq!(n.alter(), -1);
        assert_eq!(n.pc(), 10);
    }

    #[test]
    fn test_double_sharp_shorthand() {
        let n = parse("Cx").unwrap();
        assert_eq!(n.note(), "Cx");
        assert_eq!(n.acc(), "##");
        assert_eq!(n.alter(), 2);

        let n = parse("Cxx").unwrap();
        assert_eq!(n.acc(), "####");
        assert_eq!(n.alter(), 4);
        assert_eq!(n.pc(), 4);
    }

    #[test]
    fn test_multi_digit_and_zero_padded_octaves() {
        assert_eq!(parse("A10").unwrap().oct(), 10);
        assert_eq!(parse("A04").unwrap().oct(), 4);
        assert_eq!(parse("A0").unwrap().oct(), 0);
    }

    #[test]
    fn test_accidental_run_limits() {
        assert!(parse("C####").is_some());
        assert!(parse("C#####").is_none());
        assert!(parse("Cbbbb").is_some());
        assert!(parse("Cbbbbb").is_none());
        assert!(parse("Cxx").is_some());
        assert!(parse("Cxxx").is_none());
    }

    #[test]
    fn test_rejects_mixed_or_misplaced_marks() {
        for text in ["C#b", "Cbx", "Cx#", "C4#", "C-1", " C4", "C4 ", "C4a", "H4", "#C"] {
            assert!(parse(text).is_none(), "{:?} should be rejected", text);
        }
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        assert!(parse("C٤").is_none());
    }

    #[test]
    fn test_absent_and_empty_input() {
        assert!(parse("").is_none());
        assert!(parse(None::<&str>).is_none());
        assert!(parse(NoteInput::Absent).is_none());
    }

    #[test]
    fn test_option_input_dispatches_to_inner_value() {
        assert_eq!(parse(Some("D")), parse("D"));
    }

    #[test]
    fn test_reparse_ignores_stored_fields() {
        let tampered = Note {
            note: "Eb".to_string(),
            step: Step::A,
            acc: "####".to_string(),
            oct: 99,
            alter: 4,
            pc: 13,
        };
        let n = parse(&tampered).unwrap();
        assert_eq!(n.step(), Step::E);
        assert_eq!(n.acc(), "b");
        assert_eq!(n.oct(), 4);
        assert_eq!(n.pc(), 3);
    }

    #[test]
    fn test_reparse_of_record_without_text_is_none() {
        let hollow = Note {
            note: String::new(),
            step: Step::C,
            acc: String::new(),
            oct: 4,
            alter: 0,
            pc: 0,
        };
        assert!(parse(&hollow).is_none());
    }

    #[test]
    fn test_try_parse_reports_reason() {
        assert_eq!(Note::try_parse(""), Err(ParseNoteError::Empty));
        assert_eq!(
            Note::try_parse("H4"),
            Err(ParseNoteError::Malformed("H4".to_string()))
        );
        assert_eq!(
            Note::try_parse("C99999999999"),
            Err(ParseNoteError::OctaveOutOfRange("C99999999999".to_string()))
        );
    }

    #[test]
    fn test_from_str() {
        let n: Note = "F#3".parse().unwrap();
        assert_eq!(n.pc(), 6);
        assert!("F#3x".parse::<Note>().is_err());
    }
}
