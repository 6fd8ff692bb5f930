//! Wire-format tests: content items as JavaScript would send them
//!
//! Item kinds and surfaces cross the boundary as small integers; metrics
//! come back with kebab-case band names. These tests pin that contract.

use chordsheet_wasm::analysis::analyze;
use chordsheet_wasm::layout::balance_columns;
use chordsheet_wasm::models::{ContentItem, ItemKind};

#[test]
fn test_items_deserialize_from_numeric_kinds() {
    // kind 0 = section, 6 = combined, 3 = lyric
    let json = r#"[
        {"kind": 0, "text": "Verse 1", "label": "Verse 1"},
        {"kind": 6, "text": "Blackbird singing",
         "chords": [{"symbol": "G", "col": 0}, {"symbol": "Am7", "col": 10}]},
        {"kind": 3, "text": "All your life"}
    ]"#;

    let items: Vec<ContentItem> = serde_json::from_str(json).unwrap();
    assert_eq!(items[0].kind, ItemKind::Section);
    assert_eq!(items[1].kind, ItemKind::Combined);
    assert_eq!(items[1].chords.len(), 2);
    assert_eq!(items[2].kind, ItemKind::Lyric);
    assert!(items[2].chords.is_empty());
}

#[test]
fn test_metrics_serialize_band_as_kebab_case() {
    let items = vec![ContentItem::new(ItemKind::Lyric, "la")];
    let metrics = analyze(&items).unwrap();

    let json = serde_json::to_value(&metrics).unwrap();
    assert_eq!(json["band"], "very-low");
    assert_eq!(json["total_lines"], 1);
}

#[test]
fn test_column_plan_round_trips_through_json() {
    let items = vec![
        ContentItem::section("Verse 1"),
        ContentItem::new(ItemKind::Lyric, "one"),
        ContentItem::section("Verse 2"),
        ContentItem::new(ItemKind::Lyric, "two"),
    ];
    let plans = balance_columns(&items, 2);

    let json = serde_json::to_string(&plans).unwrap();
    let back: Vec<chordsheet_wasm::layout::ColumnPlan> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, plans);
    assert_eq!(back[0].items[0].label.as_deref(), Some("Verse 1"));
}
