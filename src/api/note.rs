//! JavaScript-facing note parsing
//!
//! JS callers pass whatever they have: a note name, a record returned by an
//! earlier `parseNote` call, or nothing. Anything else (numbers, booleans,
//! objects without a truthy `note`) is not a valid note and yields `null`.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{note_property, serialize};
use crate::models::Note;
use crate::parse::parse;

/// Limit on `{ note: { note: ... } }` nesting, so a self-referencing object
/// resolves to `null` instead of looping forever
const MAX_NOTE_INDIRECTION: usize = 64;

/// Resolve a JS value to a parsed note
pub(crate) fn note_from_js(input: &JsValue) -> Option<Note> {
    let mut current = input.clone();

    for _ in 0..=MAX_NOTE_INDIRECTION {
        if current.is_falsy() {
            return None;
        }

        if let Some(text) = current.as_string() {
            return parse(text.as_str());
        }

        match note_property(&current) {
            Some(inner) if inner.is_truthy() => current = inner,
            _ => {
                log::debug!("parseNote: unsupported input {:?}", current);
                return None;
            }
        }
    }

    log::warn!("parseNote: gave up after {} nested note properties", MAX_NOTE_INDIRECTION);
    None
}

/// Parse a note name into `{ note, step, acc, oct, alter, pc }`, or `null`
#[wasm_bindgen(js_name = parseNote)]
pub fn parse_note(input: JsValue) -> JsValue {
    match note_from_js(&input) {
        Some(note) => serialize(&note, "parseNote").unwrap_or(JsValue::NULL),
        None => JsValue::NULL,
    }
}

/// Pitch class of a note reduced into 0..=11, or `undefined`
#[wasm_bindgen(js_name = noteChroma)]
pub fn note_chroma(input: JsValue) -> Option<i32> {
    note_from_js(&input).map(|note| note.chroma())
}

/// MIDI number of a note (C4 = 60), or `undefined`
#[wasm_bindgen(js_name = noteMidi)]
pub fn note_midi(input: JsValue) -> Option<i32> {
    note_from_js(&input).map(|note| note.midi())
}
