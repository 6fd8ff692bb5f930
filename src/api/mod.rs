//! Chord Sheet WASM API
//!
//! JavaScript-facing surface of the layout engine. `helpers` carries the
//! shared serialization and console-logging utilities; `core` holds the
//! exported functions (parsing, analysis, layout, and the WASM-side song
//! storage).

pub mod helpers;
pub mod core;

pub use core::*;
