//! Core API functions for the chord sheet layout engine
//!
//! Exposes parsing, analysis, configuration selection, and full layout
//! computation to JavaScript. The canonical song lives WASM-side so the
//! frontend can re-render for a new surface without resending content.

use wasm_bindgen::prelude::*;

use crate::analysis;
use crate::api::helpers;
use crate::layout::{select_config, LayoutEngine, Surface};
use crate::models::{ContentItem, ContentMetrics, Song};
use crate::parse;
use crate::{wasm_error, wasm_info, wasm_log, wasm_warn};

use lazy_static::lazy_static;
use std::sync::Mutex;

// WASM-owned song storage (canonical source of truth)
lazy_static! {
    static ref SONG: Mutex<Option<Song>> = Mutex::new(None);
}

/// Parse chord sheet text into a Song
///
/// # Parameters
/// - `text`: Plain chord sheet text
///
/// # Returns
/// JavaScript Song object
#[wasm_bindgen(js_name = parseSong)]
pub fn parse_song(text: &str) -> Result<JsValue, JsValue> {
    wasm_info!("parseSong called: {} bytes", text.len());

    let song = parse::parse_song(text).map_err(|e| {
        wasm_error!("Parse error: {}", e);
        JsValue::from_str(&e.to_string())
    })?;

    wasm_log!("  parsed {} items", song.items.len());
    helpers::to_js(&song, "Song")
}

/// Parse chord sheet text and store it as the canonical song
#[wasm_bindgen(js_name = loadSong)]
pub fn load_song(text: &str) -> Result<(), JsValue> {
    wasm_info!("loadSong called: {} bytes", text.len());

    let song = parse::parse_song(text).map_err(|e| {
        wasm_error!("Parse error: {}", e);
        JsValue::from_str(&e.to_string())
    })?;

    let mut stored = lock_song()?;
    *stored = Some(song);
    Ok(())
}

/// Get the stored song, or null when none is loaded
#[wasm_bindgen(js_name = getSong)]
pub fn get_song() -> Result<JsValue, JsValue> {
    let stored = lock_song()?;
    match stored.as_ref() {
        Some(song) => helpers::to_js(song, "Song"),
        None => Ok(JsValue::NULL),
    }
}

/// Analyze content items into a metrics snapshot
///
/// # Parameters
/// - `items`: JavaScript array of ContentItem objects
///
/// # Returns
/// ContentMetrics object, or null when there is nothing to analyze
#[wasm_bindgen(js_name = analyzeContent)]
pub fn analyze_content(items: JsValue) -> Result<JsValue, JsValue> {
    let items: Vec<ContentItem> = helpers::from_js(items, "ContentItem array")?;
    wasm_log!("analyzeContent called: {} items", items.len());

    match analysis::analyze(&items) {
        Some(metrics) => helpers::to_js(&metrics, "ContentMetrics"),
        None => Ok(JsValue::NULL),
    }
}

/// Select a rendering configuration for metrics on a target surface
///
/// # Parameters
/// - `metrics`: ContentMetrics object from analyzeContent
/// - `surface`: Target surface
///
/// # Returns
/// LayoutConfig object
#[wasm_bindgen(js_name = selectLayout)]
pub fn select_layout(metrics: JsValue, surface: Surface) -> Result<JsValue, JsValue> {
    let metrics: ContentMetrics = helpers::from_js(metrics, "ContentMetrics")?;
    wasm_log!("selectLayout called: band {:?}, surface {:?}", metrics.band, surface);

    let config = select_config(metrics.band, surface);
    helpers::to_js(&config, "LayoutConfig")
}

/// Compute the complete layout plan for a song on a target surface
///
/// # Parameters
/// - `song`: JavaScript Song object
/// - `surface`: Target surface
///
/// # Returns
/// LayoutPlan object, or null when the song has no content
#[wasm_bindgen(js_name = computeLayout)]
pub fn compute_layout(song: JsValue, surface: Surface) -> Result<JsValue, JsValue> {
    let song: Song = helpers::from_js(song, "Song")?;
    wasm_info!(
        "computeLayout called: {} items, surface {:?}",
        song.items.len(),
        surface
    );

    match LayoutEngine::new().compute_layout(&song, surface) {
        Some(plan) => helpers::to_js(&plan, "LayoutPlan"),
        None => Ok(JsValue::NULL),
    }
}

/// Compute the layout plan for the stored song
///
/// # Returns
/// LayoutPlan object, or null when no song is loaded or it has no content
#[wasm_bindgen(js_name = renderLayout)]
pub fn render_layout(surface: Surface) -> Result<JsValue, JsValue> {
    let stored = lock_song()?;
    let song = match stored.as_ref() {
        Some(song) => song,
        None => {
            wasm_warn!("renderLayout called with no song loaded");
            return Ok(JsValue::NULL);
        }
    };

    wasm_info!("renderLayout called: surface {:?}", surface);
    match LayoutEngine::new().compute_layout(song, surface) {
        Some(plan) => helpers::to_js(&plan, "LayoutPlan"),
        None => Ok(JsValue::NULL),
    }
}

fn lock_song() -> Result<std::sync::MutexGuard<'static, Option<Song>>, JsValue> {
    SONG.lock().map_err(|_| {
        wasm_error!("Song storage lock poisoned");
        JsValue::from_str("Song storage lock poisoned")
    })
}
