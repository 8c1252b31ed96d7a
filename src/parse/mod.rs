//! Parsing module for the note parser
//!
//! Converts scientific pitch notation text into `Note` records.

pub mod errors;
pub mod note;

pub use errors::*;
pub use note::*;
