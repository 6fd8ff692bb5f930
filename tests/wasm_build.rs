//! WASM build test
//!
//! Checks that the exported API surface works in a browser environment.

use chordsheet_wasm::api::*;
use chordsheet_wasm::layout::Surface;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const SHEET: &str = "[Verse 1]\nC       G\nla la la la\n";

#[wasm_bindgen_test]
fn test_parse_song_export() {
    let result = parse_song(SHEET);
    assert!(result.is_ok());
}

#[wasm_bindgen_test]
fn test_load_and_render() {
    load_song(SHEET).unwrap();

    let song = get_song().unwrap();
    assert!(!song.is_null());

    let plan = render_layout(Surface::Mobile);
    assert!(plan.is_ok());
    assert!(!plan.unwrap().is_null());
}

#[wasm_bindgen_test]
fn test_compute_layout_null_for_empty_song() {
    let song = parse_song("").unwrap();
    let plan = compute_layout(song, Surface::Desktop).unwrap();
    assert!(plan.is_null());
}

#[wasm_bindgen_test]
fn test_console_logging_at_every_level() {
    // All four levels route through web_sys::console
    chordsheet_wasm::api::helpers::log_debug("layout pass");
    chordsheet_wasm::api::helpers::log_info("song loaded");
    chordsheet_wasm::api::helpers::log_warn("no song loaded");
    chordsheet_wasm::api::helpers::log_error("bad input");
}

#[wasm_bindgen_test]
fn test_analyze_content_null_for_empty_items() {
    let empty = js_sys::Array::new();
    let result = analyze_content(empty.into()).unwrap();
    assert!(result.is_null());
}
