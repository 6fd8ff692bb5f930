//! End-to-end pipeline tests: parse → analyze → layout

use chordsheet_wasm::analysis::analyze;
use chordsheet_wasm::layout::{LayoutEngine, Surface};
use chordsheet_wasm::models::{DensityBand, ItemKind};
use chordsheet_wasm::parse::parse_song;

const BLACKBIRD: &str = "\
Title: Blackbird
Artist: The Beatles

[Verse 1]
G        Am7      G/B
Blackbird singing in the dead of night
C     C#o   D      D#o     Em    Eb
Take these broken wings and learn to fly
All your life
C      C#o  D          D#o  Em    Eb
You were only waiting for this moment to arise

[Chorus]
F  Em  Dm  C
Blackbird fly
F  Em  Dm  C
Blackbird fly
Bb          A7sus4
Into the light of a dark black night

[Verse 2]
G        Am7      G/B
Blackbird singing in the dead of night
C     C#o   D      D#o    Em    Eb
Take these sunken eyes and learn to see
All your life
C      C#o  D         D#o  Em   Eb
You were only waiting for this moment to be free
";

#[test]
fn test_parse_realistic_sheet() {
    let song = parse_song(BLACKBIRD).unwrap();

    assert_eq!(song.title.as_deref(), Some("Blackbird"));
    assert_eq!(song.artist.as_deref(), Some("The Beatles"));

    let sections: Vec<_> = song
        .items
        .iter()
        .filter(|i| i.kind == ItemKind::Section)
        .collect();
    assert_eq!(sections.len(), 3);
    assert_eq!(sections[0].label.as_deref(), Some("Verse 1"));
    assert_eq!(sections[1].label.as_deref(), Some("Chorus"));

    // Chord lines above lyrics fold into combined items
    let combined = song
        .items
        .iter()
        .filter(|i| i.kind == ItemKind::Combined)
        .count();
    assert_eq!(combined, 9);

    // "All your life" has no chord line above it
    let lyrics = song
        .items
        .iter()
        .filter(|i| i.kind == ItemKind::Lyric)
        .count();
    assert_eq!(lyrics, 2);
}

#[test]
fn test_chord_columns_match_source_text() {
    let song = parse_song(BLACKBIRD).unwrap();
    let first_combined = song
        .items
        .iter()
        .find(|i| i.kind == ItemKind::Combined)
        .unwrap();

    assert_eq!(first_combined.text, "Blackbird singing in the dead of night");
    assert_eq!(first_combined.chords[0].symbol, "G");
    assert_eq!(first_combined.chords[0].col, 0);
    assert_eq!(first_combined.chords[1].symbol, "Am7");
    assert_eq!(first_combined.chords[1].col, 9);
    assert_eq!(first_combined.chords[2].symbol, "G/B");
    assert_eq!(first_combined.chords[2].col, 18);
}

#[test]
fn test_analysis_of_realistic_sheet() {
    let song = parse_song(BLACKBIRD).unwrap();
    let metrics = analyze(&song.items).unwrap();

    assert_eq!(metrics.sections, 3);
    assert!(!metrics.has_voices);
    assert_eq!(metrics.combined_lines, 9);
    // 3 headers + 2 bare lyrics + 9 combined * 2
    assert_eq!(metrics.total_lines, 23);
    assert_eq!(metrics.band, DensityBand::Low);
}

#[test]
fn test_full_pipeline_on_all_surfaces() {
    let song = parse_song(BLACKBIRD).unwrap();
    let engine = LayoutEngine::new();

    for surface in Surface::ALL {
        let plan = engine.compute_layout(&song, surface).unwrap();

        assert_eq!(plan.columns.len(), plan.config.columns);
        assert!(plan.header.is_some());

        // Every item survives into exactly one column, in order
        let flattened: Vec<_> = plan
            .columns
            .iter()
            .flat_map(|c| c.items.iter())
            .collect();
        let expected: Vec<_> = song
            .items
            .iter()
            .filter(|i| i.kind != ItemKind::Divider)
            .collect();
        assert_eq!(flattened.len(), expected.len());
        for (got, want) in flattened.iter().zip(expected.iter()) {
            assert_eq!(got, want);
        }
    }
}

#[test]
fn test_mobile_plan_is_single_column() {
    let song = parse_song(BLACKBIRD).unwrap();
    let plan = LayoutEngine::new()
        .compute_layout(&song, Surface::Mobile)
        .unwrap();
    assert_eq!(plan.columns.len(), 1);
}

#[test]
fn test_empty_text_yields_no_plan() {
    let song = parse_song("").unwrap();
    assert!(LayoutEngine::new()
        .compute_layout(&song, Surface::Desktop)
        .is_none());
}
