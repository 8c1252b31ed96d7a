//! Note record produced by the note-name parser
//!
//! A `Note` is the structured form of a scientific pitch notation name such
//! as "C#4", "Bbb2" or "Gx". Records are immutable: the parser is the only
//! place that builds them, and callers read them through accessors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Octave assumed when a note name carries no octave digits
pub const DEFAULT_OCTAVE: i32 = 4;

/// Longest run of `#` or `b` accepted in a note name
pub const MAX_SHARPS_OR_FLATS: usize = 4;

/// Longest run of `x` (double-sharp) accepted in a note name
pub const MAX_DOUBLE_SHARPS: usize = 2;

/// Diatonic letter name of a note
///
/// Serialized as the uppercase letter ("C", "D", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Step {
    /// All steps in ascending pitch order starting from C
    pub const ALL: [Step; 7] = [
        Step::C,
        Step::D,
        Step::E,
        Step::F,
        Step::G,
        Step::A,
        Step::B,
    ];

    /// Look up a step from its letter, ignoring case
    pub fn from_letter(letter: char) -> Option<Step> {
        match letter.to_ascii_uppercase() {
            'C' => Some(Step::C),
            'D' => Some(Step::D),
            'E' => Some(Step::E),
            'F' => Some(Step::F),
            'G' => Some(Step::G),
            'A' => Some(Step::A),
            'B' => Some(Step::B),
            _ => None,
        }
    }

    /// Uppercase letter for this step
    pub const fn letter(self) -> char {
        match self {
            Step::C => 'C',
            Step::D => 'D',
            Step::E => 'E',
            Step::F => 'F',
            Step::G => 'G',
            Step::A => 'A',
            Step::B => 'B',
        }
    }

    /// Semitones above C of the natural step (C=0 ... B=11)
    pub const fn semitones(self) -> i32 {
        match self {
            Step::C => 0,
            Step::D => 2,
            Step::E => 4,
            Step::F => 5,
            Step::G => 7,
            Step::A => 9,
            Step::B => 11,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A parsed note name
///
/// Field names match the JS record shape: `{ note, step, acc, oct, alter, pc }`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Note {
    pub(crate) note: String,
    pub(crate) step: Step,
    pub(crate) acc: String,
    pub(crate) oct: i32,
    pub(crate) alter: i32,
    pub(crate) pc: i32,
}

impl Note {
    /// The accepted input text, exactly as typed
    pub fn note(&self) -> &str {
        &self.note
    }

    /// Letter name (always uppercase)
    pub fn step(&self) -> Step {
        self.step
    }

    /// Accidental marks: repeated `#` or repeated `b`, empty when natural.
    /// Any `x` in the input is already expanded to `##` here.
    pub fn acc(&self) -> &str {
        &self.acc
    }

    pub fn oct(&self) -> i32 {
        self.oct
    }

    /// Signed semitone offset of the accidentals
    pub fn alter(&self) -> i32 {
        self.alter
    }

    /// Pitch class before reduction: step semitones + alter.
    ///
    /// May be negative ("Cb" → -1) or above 11 ("B#" → 12).
    pub fn pc(&self) -> i32 {
        self.pc
    }

    /// Pitch class reduced into 0..=11
    pub fn chroma(&self) -> i32 {
        self.pc.rem_euclid(12)
    }

    /// MIDI note number with C4 = 60
    ///
    /// Not clamped to 0..=127. Saturates at `i32::MAX` for huge octaves.
    pub fn midi(&self) -> i32 {
        self.oct
            .saturating_add(1)
            .saturating_mul(12)
            .saturating_add(self.pc)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.note)
    }
}
