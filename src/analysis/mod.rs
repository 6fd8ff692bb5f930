//! Content analysis: metrics collection and density banding
//!
//! Single forward pass over a song's items producing an immutable
//! `ContentMetrics` snapshot. The snapshot feeds configuration selection and
//! is recomputed on every call; nothing is cached or persisted.

use crate::models::{ContentItem, ContentMetrics, DensityBand, ItemKind};

/// Score weight for each rendered display line
const LINE_WEIGHT: f32 = 1.0;

/// Extra weight per chord-bearing line (chord rows cost vertical space)
const CHORD_LINE_WEIGHT: f32 = 0.5;

/// Weight per section marker (headers carry surrounding whitespace)
const SECTION_WEIGHT: f32 = 2.0;

/// Weight per voice marker (multi-voice parts render with extra framing)
const VOICE_WEIGHT: f32 = 3.0;

/// Line length beyond which wide lines start penalizing the score
const LONG_LINE_THRESHOLD: usize = 40;

/// Penalty per character past the long-line threshold
const LONG_LINE_WEIGHT: f32 = 0.1;

/// Analyze a song's content items.
///
/// Returns `None` when there is nothing to analyze (empty item list);
/// callers surface that as `null` to JavaScript.
pub fn analyze(items: &[ContentItem]) -> Option<ContentMetrics> {
    if items.is_empty() {
        return None;
    }

    let mut sections = 0;
    let mut voices = 0;
    let mut chord_lines = 0;
    let mut lyric_lines = 0;
    let mut text_lines = 0;
    let mut combined_lines = 0;
    let mut dividers = 0;
    let mut total_lines = 0;
    let mut max_line_len = 0;

    for item in items {
        match item.kind {
            ItemKind::Section => sections += 1,
            ItemKind::Voice => voices += 1,
            ItemKind::Chord => chord_lines += 1,
            ItemKind::Lyric => lyric_lines += 1,
            ItemKind::Text => text_lines += 1,
            ItemKind::Divider => dividers += 1,
            ItemKind::Combined => combined_lines += 1,
        }
        total_lines += item.render_lines();
        max_line_len = max_line_len.max(item.line_len());
    }

    let chord_bearing = chord_lines + combined_lines;
    let long_line_penalty =
        max_line_len.saturating_sub(LONG_LINE_THRESHOLD) as f32 * LONG_LINE_WEIGHT;

    let score = total_lines as f32 * LINE_WEIGHT
        + chord_bearing as f32 * CHORD_LINE_WEIGHT
        + sections as f32 * SECTION_WEIGHT
        + voices as f32 * VOICE_WEIGHT
        + long_line_penalty;

    let band = DensityBand::from_score(score);

    log::debug!(
        "analyzed {} items: {} lines, max len {}, score {:.1}, band {:?}",
        items.len(),
        total_lines,
        max_line_len,
        score,
        band
    );

    Some(ContentMetrics {
        sections,
        voices,
        chord_lines,
        lyric_lines,
        text_lines,
        combined_lines,
        dividers,
        total_items: items.len(),
        total_lines,
        max_line_len,
        has_voices: voices > 0,
        score,
        band,
    })
}
