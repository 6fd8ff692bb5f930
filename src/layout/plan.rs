//! Layout plan computation
//!
//! The `LayoutEngine` ties the pipeline together: analyze the song, select
//! a configuration for the target surface, balance columns, and return a
//! `LayoutPlan`, a display-list style value JavaScript renders directly.

use crate::analysis::analyze;
use crate::models::{ContentMetrics, Song};
use serde::{Deserialize, Serialize};

use super::columns::{balance_columns, ColumnPlan};
use super::config::{select_config, LayoutConfig, Surface};

/// Song header information for the rendered sheet
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SongHeader {
    /// Song title
    pub title: Option<String>,

    /// Artist / composer name
    pub artist: Option<String>,
}

/// Complete layout for one song on one surface
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LayoutPlan {
    /// Optional header block (present when the song carries any metadata)
    pub header: Option<SongHeader>,

    /// Selected rendering configuration
    pub config: LayoutConfig,

    /// Metrics the configuration was selected from
    pub metrics: ContentMetrics,

    /// Balanced display columns
    pub columns: Vec<ColumnPlan>,
}

/// Main layout engine for computing layout plans
pub struct LayoutEngine;

impl LayoutEngine {
    /// Create a new layout engine
    pub fn new() -> Self {
        Self
    }

    /// Compute the complete layout for a song on a target surface.
    ///
    /// Returns `None` when the song has no content to analyze.
    pub fn compute_layout(&self, song: &Song, surface: Surface) -> Option<LayoutPlan> {
        let metrics = analyze(&song.items)?;
        let config = select_config(metrics.band, surface);
        let columns = balance_columns(&song.items, config.columns);

        let header = if song.title.is_some() || song.artist.is_some() {
            Some(SongHeader {
                title: song.title.clone(),
                artist: song.artist.clone(),
            })
        } else {
            None
        };

        Some(LayoutPlan {
            header,
            config,
            metrics,
            columns,
        })
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}
