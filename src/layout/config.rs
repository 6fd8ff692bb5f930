//! Rendering configuration selection
//!
//! A pure lookup: (target surface, density band) → font size, line height,
//! column count, column gap. The table is built once and is total over its
//! key space. Within a surface, font size shrinks and column count never
//! decreases as the band rises.

use crate::models::DensityBand;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::collections::HashMap;
use wasm_bindgen::prelude::*;

/// Target rendering surface
#[wasm_bindgen]
#[repr(u8)]
#[derive(Serialize_repr, Deserialize_repr, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    Mobile = 0,
    Tablet = 1,
    Desktop = 2,
    Print = 3,
}

impl Surface {
    /// All surfaces
    pub const ALL: [Surface; 4] = [
        Surface::Mobile,
        Surface::Tablet,
        Surface::Desktop,
        Surface::Print,
    ];
}

/// Configuration for rendering a chord sheet on one surface
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Font size in pixels (points for print)
    pub font_size: f32,

    /// Line height as a factor of font size
    pub line_height: f32,

    /// Number of display columns
    pub columns: usize,

    /// Gap between columns in pixels
    pub column_gap: f32,
}

impl LayoutConfig {
    fn new(font_size: f32, line_height: f32, columns: usize, column_gap: f32) -> Self {
        Self {
            font_size,
            line_height,
            columns,
            column_gap,
        }
    }

    /// Safe single-column fallback for a key missing from the table
    fn fallback() -> Self {
        Self::new(16.0, 1.5, 1, 0.0)
    }
}

/// Complete (surface, band) → configuration table, built once
static CONFIG_TABLE: Lazy<HashMap<(Surface, DensityBand), LayoutConfig>> =
    Lazy::new(build_config_table);

/// Select the rendering configuration for a band and surface.
///
/// Stateless and deterministic: the same inputs always return the same
/// configuration.
pub fn select_config(band: DensityBand, surface: Surface) -> LayoutConfig {
    CONFIG_TABLE
        .get(&(surface, band))
        .cloned()
        .unwrap_or_else(LayoutConfig::fallback)
}

/// Build the full lookup table.
///
/// Per-surface rows run VeryLow → VeryHigh.
fn build_config_table() -> HashMap<(Surface, DensityBand), LayoutConfig> {
    let mut table = HashMap::new();

    // Mobile: always one column, font shrinks with density
    add_surface(
        &mut table,
        Surface::Mobile,
        [
            LayoutConfig::new(18.0, 1.6, 1, 0.0),
            LayoutConfig::new(17.0, 1.5, 1, 0.0),
            LayoutConfig::new(16.0, 1.5, 1, 0.0),
            LayoutConfig::new(15.0, 1.4, 1, 0.0),
            LayoutConfig::new(14.0, 1.35, 1, 0.0),
        ],
    );

    // Tablet: up to two columns
    add_surface(
        &mut table,
        Surface::Tablet,
        [
            LayoutConfig::new(19.0, 1.6, 1, 0.0),
            LayoutConfig::new(18.0, 1.5, 1, 0.0),
            LayoutConfig::new(17.0, 1.5, 2, 32.0),
            LayoutConfig::new(16.0, 1.4, 2, 28.0),
            LayoutConfig::new(15.0, 1.4, 2, 24.0),
        ],
    );

    // Desktop: up to three columns
    add_surface(
        &mut table,
        Surface::Desktop,
        [
            LayoutConfig::new(20.0, 1.6, 1, 0.0),
            LayoutConfig::new(19.0, 1.5, 2, 48.0),
            LayoutConfig::new(18.0, 1.5, 2, 40.0),
            LayoutConfig::new(17.0, 1.4, 3, 36.0),
            LayoutConfig::new(16.0, 1.35, 3, 32.0),
        ],
    );

    // Print: smallest fonts, always multi-column to fill the page
    add_surface(
        &mut table,
        Surface::Print,
        [
            LayoutConfig::new(13.0, 1.4, 2, 28.0),
            LayoutConfig::new(12.5, 1.35, 2, 24.0),
            LayoutConfig::new(12.0, 1.3, 2, 24.0),
            LayoutConfig::new(11.0, 1.3, 3, 20.0),
            LayoutConfig::new(10.5, 1.25, 3, 18.0),
        ],
    );

    table
}

fn add_surface(
    table: &mut HashMap<(Surface, DensityBand), LayoutConfig>,
    surface: Surface,
    configs: [LayoutConfig; 5],
) {
    for (band, config) in DensityBand::ALL.into_iter().zip(configs) {
        table.insert((surface, band), config);
    }
}
