//! Utility modules for the note parser

pub mod pitch_utils;

pub use pitch_utils::*;
