//! Core data structures for song content
//!
//! A song is a flat, ordered sequence of typed items. Sections and voices
//! are marker items: the lines belonging to them are the items that follow,
//! up to the next marker. This keeps the document tree two levels deep
//! while the storage stays a plain `Vec`.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use wasm_bindgen::prelude::*;

/// Enumeration of all content item types in a chord sheet
#[wasm_bindgen]
#[repr(u8)]
#[derive(Serialize_repr, Deserialize_repr, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Section marker (e.g., "Verse 1", "Chorus")
    Section = 0,

    /// Voice marker within a section (e.g., "Tenor")
    Voice = 1,

    /// A line of chord symbols with no lyric beneath it
    Chord = 2,

    /// A lyric line with no chords above it
    Lyric = 3,

    /// Free text outside any section (intro notes, credits)
    Text = 4,

    /// Horizontal divider between parts of the song
    Divider = 5,

    /// A lyric line with chord symbols positioned above it
    Combined = 6,
}

/// A chord symbol anchored to a column of the line it annotates
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChordSpan {
    /// The chord symbol text (e.g., "Am7", "F#m/C#")
    pub symbol: String,

    /// Character column (0-based) where the symbol starts
    pub col: usize,
}

/// One typed item in a song's content sequence
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ContentItem {
    /// Type of content this item represents
    pub kind: ItemKind,

    /// Raw text of the item (lyric text, chord line text, empty for dividers)
    pub text: String,

    /// Chord symbols positioned over this item (Chord and Combined items)
    #[serde(default)]
    pub chords: Vec<ChordSpan>,

    /// Marker label (Section and Voice items)
    #[serde(default)]
    pub label: Option<String>,
}

impl ContentItem {
    /// Create a new item with no chords or label
    pub fn new(kind: ItemKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            chords: Vec::new(),
            label: None,
        }
    }

    /// Create a section marker
    pub fn section(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            kind: ItemKind::Section,
            text: label.clone(),
            chords: Vec::new(),
            label: Some(label),
        }
    }

    /// Create a voice marker
    pub fn voice(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            kind: ItemKind::Voice,
            text: label.clone(),
            chords: Vec::new(),
            label: Some(label),
        }
    }

    /// Create a divider
    pub fn divider() -> Self {
        Self::new(ItemKind::Divider, "")
    }

    /// Create a standalone chord line
    pub fn chord_line(text: impl Into<String>, chords: Vec<ChordSpan>) -> Self {
        Self {
            kind: ItemKind::Chord,
            text: text.into(),
            chords,
            label: None,
        }
    }

    /// Create a combined chord-over-lyric line
    pub fn combined(text: impl Into<String>, chords: Vec<ChordSpan>) -> Self {
        Self {
            kind: ItemKind::Combined,
            text: text.into(),
            chords,
            label: None,
        }
    }

    /// Number of display lines this item occupies when rendered.
    ///
    /// Combined items render as two rows (chord row above the lyric row);
    /// dividers take no text line of their own.
    pub fn render_lines(&self) -> usize {
        match self.kind {
            ItemKind::Combined => 2,
            ItemKind::Divider => 0,
            _ => 1,
        }
    }

    /// Character length of the widest row this item renders.
    ///
    /// For chord-bearing items the chord row can extend past the lyric text,
    /// so the rightmost chord end is considered too.
    pub fn line_len(&self) -> usize {
        let text_len = self.text.chars().count();
        let chord_end = self
            .chords
            .iter()
            .map(|span| span.col + span.symbol.chars().count())
            .max()
            .unwrap_or(0);
        text_len.max(chord_end)
    }
}

/// A complete song: optional header metadata plus the content sequence
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Song {
    /// Song title
    pub title: Option<String>,

    /// Artist / composer name
    pub artist: Option<String>,

    /// Ordered content items; rendering order is item order
    pub items: Vec<ContentItem>,
}

impl Song {
    /// Create a new empty song
    pub fn new() -> Self {
        Self::default()
    }
}
