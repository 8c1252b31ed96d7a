//! Note parser WASM API
//!
//! - `helpers`: serialization and JS property access
//! - `note`: `parseNote`, `noteChroma`, `noteMidi`

pub mod helpers;
pub mod note;

pub use note::{note_chroma, note_midi, parse_note};
