//! Note Parser WASM Module
//!
//! Parses note names in scientific pitch notation ("C#4", "Bbb2", "Gx") into
//! `{ note, step, acc, oct, alter, pc }` records, from Rust or JavaScript.

pub mod models;
pub mod parse;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use models::note::*;
pub use parse::{parse, NoteInput, ParseNoteError};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Err only when the host page already installed a logger
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Note parser WASM module initialized");
}
