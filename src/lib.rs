//! Chord Sheet Layout WASM Module
//!
//! This is the WASM module backing the chord sheet viewer. It analyzes a
//! song's structural content, selects a rendering configuration for a target
//! surface, and distributes content across display columns.

pub mod models;
pub mod parse;
pub mod analysis;
pub mod layout;
pub mod api;

// Re-export commonly used types
pub use models::content::*;
pub use models::metrics::*;
pub use layout::{LayoutConfig, LayoutEngine, LayoutPlan, Surface};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Chord sheet layout WASM module initialized");
}
