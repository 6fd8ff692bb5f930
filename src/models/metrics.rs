//! Derived content metrics and density banding
//!
//! `ContentMetrics` is an immutable snapshot computed from scratch on every
//! analysis call. Nothing here is persisted; the snapshot lives for one
//! render pass and is discarded.

use serde::{Deserialize, Serialize};

/// Discrete complexity tier derived from the content score.
///
/// Bands are ordered: a higher band always means denser content and selects
/// smaller fonts / more columns in the layout tables.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "kebab-case")]
pub enum DensityBand {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl DensityBand {
    /// All bands in ascending order
    pub const ALL: [DensityBand; 5] = [
        DensityBand::VeryLow,
        DensityBand::Low,
        DensityBand::Medium,
        DensityBand::High,
        DensityBand::VeryHigh,
    ];

    /// Map a complexity score to its band.
    ///
    /// Thresholds are tuned so a typical two-verse sheet with chords lands
    /// in the Medium band.
    pub fn from_score(score: f32) -> Self {
        if score < 16.0 {
            DensityBand::VeryLow
        } else if score < 36.0 {
            DensityBand::Low
        } else if score < 64.0 {
            DensityBand::Medium
        } else if score < 100.0 {
            DensityBand::High
        } else {
            DensityBand::VeryHigh
        }
    }
}

/// Structural metrics for a song's content
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ContentMetrics {
    /// Number of section markers
    pub sections: usize,

    /// Number of voice markers
    pub voices: usize,

    /// Standalone chord lines
    pub chord_lines: usize,

    /// Lyric lines without chords
    pub lyric_lines: usize,

    /// Free text lines outside sections
    pub text_lines: usize,

    /// Combined chord-over-lyric lines
    pub combined_lines: usize,

    /// Divider items
    pub dividers: usize,

    /// Total number of content items
    pub total_items: usize,

    /// Total display lines the content renders to
    pub total_lines: usize,

    /// Character length of the widest rendered line
    pub max_line_len: usize,

    /// Whether the song has multi-voice parts
    pub has_voices: bool,

    /// Weighted complexity score the band was cut from
    pub score: f32,

    /// Density band for configuration selection
    pub band: DensityBand,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(DensityBand::from_score(0.0), DensityBand::VeryLow);
        assert_eq!(DensityBand::from_score(15.9), DensityBand::VeryLow);
        assert_eq!(DensityBand::from_score(16.0), DensityBand::Low);
        assert_eq!(DensityBand::from_score(36.0), DensityBand::Medium);
        assert_eq!(DensityBand::from_score(64.0), DensityBand::High);
        assert_eq!(DensityBand::from_score(100.0), DensityBand::VeryHigh);
        assert_eq!(DensityBand::from_score(500.0), DensityBand::VeryHigh);
    }

    #[test]
    fn test_band_ordering() {
        assert!(DensityBand::VeryLow < DensityBand::Low);
        assert!(DensityBand::High < DensityBand::VeryHigh);

        // ALL is ascending
        for pair in DensityBand::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
