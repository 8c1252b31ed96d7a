//! Models module for the note parser
//!
//! The note record and the step→semitone table.

pub mod note;

pub use note::*;
