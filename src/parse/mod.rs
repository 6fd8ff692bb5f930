//! Chord sheet text parsing
//!
//! Turns plain chord sheet text into a `Song` of typed content items:
//! - `[Verse 1]` style bracket lines become section markers
//! - `(Tenor)` style parenthesized lines become voice markers
//! - runs of `-` or `=` become dividers
//! - lines that are mostly chord symbols become chord lines
//! - a chord line directly above a lyric line folds into one combined item
//! - anything else is a lyric line (inside a section) or free text (before
//!   the first section)

pub mod chords;

pub use chords::is_chord_symbol;

use crate::models::{ChordSpan, ContentItem, ItemKind, Song};
use thiserror::Error;

/// Errors for structurally invalid chord sheet text
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    /// A section header opened with `[` but never closed
    #[error("unclosed section header at line {line}: {text:?}")]
    UnclosedSection { line: usize, text: String },
}

/// Longest line a parenthesized marker may span and still read as a voice name
const MAX_VOICE_LABEL_LEN: usize = 24;

/// Parse chord sheet text into a song.
///
/// Empty input parses to an empty song; only structural problems (an
/// unclosed `[` header) are errors.
pub fn parse_song(text: &str) -> Result<Song, ParseError> {
    let mut song = Song::new();
    let mut in_section = false;

    // A chord line held back until we know whether a lyric line follows it
    let mut pending: Option<(String, Vec<ChordSpan>)> = None;

    for (idx, raw_line) in text.lines().enumerate() {
        let line_num = idx + 1;
        let trimmed = raw_line.trim();

        // Blank lines delimit: a held chord line stays standalone
        if trimmed.is_empty() {
            flush_pending(&mut pending, &mut song.items);
            continue;
        }

        // Header metadata, only before any content
        if song.items.is_empty() && pending.is_none() {
            if let Some(value) = meta_value(trimmed, "title:") {
                song.title = Some(value.to_string());
                continue;
            }
            if let Some(value) = meta_value(trimmed, "artist:") {
                song.artist = Some(value.to_string());
                continue;
            }
        }

        // Section header
        if trimmed.starts_with('[') {
            if !trimmed.contains(']') {
                return Err(ParseError::UnclosedSection {
                    line: line_num,
                    text: trimmed.to_string(),
                });
            }
            if trimmed.ends_with(']') {
                flush_pending(&mut pending, &mut song.items);
                let label = trimmed[1..trimmed.len() - 1].trim();
                song.items.push(ContentItem::section(label));
                in_section = true;
                continue;
            }
            // `]` mid-line: not a header, falls through as a plain line
        }

        // Divider
        if is_divider(trimmed) {
            flush_pending(&mut pending, &mut song.items);
            song.items.push(ContentItem::divider());
            continue;
        }

        // Chord line: at least one chord and chords are at least half the tokens
        let tokens = tokenize_columns(raw_line);
        let chord_count = tokens
            .iter()
            .filter(|(token, _)| is_chord_symbol(token))
            .count();
        if chord_count >= 1 && chord_count * 2 >= tokens.len() {
            flush_pending(&mut pending, &mut song.items);
            let spans = tokens
                .into_iter()
                .map(|(symbol, col)| ChordSpan { symbol, col })
                .collect();
            pending = Some((raw_line.trim_end().to_string(), spans));
            continue;
        }

        // Voice marker
        if let Some(label) = voice_label(trimmed) {
            flush_pending(&mut pending, &mut song.items);
            song.items.push(ContentItem::voice(label));
            continue;
        }

        // Plain line: folds with a held chord line, otherwise lyric/text.
        // Leading whitespace is kept so chord columns stay aligned.
        let text_line = raw_line.trim_end();
        if let Some((_, spans)) = pending.take() {
            song.items.push(ContentItem::combined(text_line, spans));
        } else if in_section {
            song.items.push(ContentItem::new(ItemKind::Lyric, text_line));
        } else {
            song.items.push(ContentItem::new(ItemKind::Text, text_line));
        }
    }

    flush_pending(&mut pending, &mut song.items);
    Ok(song)
}

/// Emit a held chord line as a standalone Chord item
fn flush_pending(pending: &mut Option<(String, Vec<ChordSpan>)>, items: &mut Vec<ContentItem>) {
    if let Some((text, spans)) = pending.take() {
        items.push(ContentItem::chord_line(text, spans));
    }
}

/// Case-insensitive `key` prefix match returning the trimmed remainder
fn meta_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let head = line.get(..key.len())?;
    if head.eq_ignore_ascii_case(key) {
        Some(line[key.len()..].trim())
    } else {
        None
    }
}

/// A run of 3+ `-` or 3+ `=` characters
fn is_divider(line: &str) -> bool {
    line.chars().count() >= 3
        && (line.chars().all(|c| c == '-') || line.chars().all(|c| c == '='))
}

/// `(Name)` lines read as voice markers when the inner text is a short
/// non-chord label
fn voice_label(line: &str) -> Option<&str> {
    let inner = line.strip_prefix('(')?.strip_suffix(')')?.trim();
    if inner.is_empty() || inner.chars().count() > MAX_VOICE_LABEL_LEN {
        return None;
    }
    if inner.split_whitespace().any(is_chord_symbol) {
        return None;
    }
    Some(inner)
}

/// Split a line into whitespace-separated tokens with their character columns
fn tokenize_columns(line: &str) -> Vec<(String, usize)> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut start = 0;

    for (col, ch) in line.chars().enumerate() {
        if ch.is_whitespace() {
            if !current.is_empty() {
                tokens.push((std::mem::take(&mut current), start));
            }
        } else {
            if current.is_empty() {
                start = col;
            }
            current.push(ch);
        }
    }
    if !current.is_empty() {
        tokens.push((current, start));
    }

    tokens
}
