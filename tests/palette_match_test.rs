//! Palette files loaded from disk and matched against source colors.

mod common;

use colorbook::error::AppError;
use colorbook::models::AppConfig;
use colorbook::services::{load_palette, PagePipeline};
use common::Workspace;
use lineart::{DistanceMetric, PaletteMatcher};
use pretty_assertions::assert_eq;

fn pipeline(ws: &Workspace, top_k: usize, metric: DistanceMetric) -> PagePipeline {
    let mut config = AppConfig::default();
    config.matching.top_k = top_k;
    config.matching.metric = metric;
    PagePipeline::new(config).with_palette(load_palette(&ws.palette()).unwrap())
}

#[test]
fn test_fixture_palette_loads_in_id_order() {
    let ws = Workspace::new();
    let palette = load_palette(&ws.palette()).unwrap();

    let ids: Vec<u32> = palette.entries().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 199, 321, 700, 797, 971]);
    assert_eq!(palette.position(797), Some(4));
}

#[test]
fn test_exact_colors_match_themselves() {
    let ws = Workspace::new();
    for metric in [DistanceMetric::DeltaE76, DistanceMetric::DeltaE2000] {
        let results = pipeline(&ws, 1, metric)
            .match_colors(&["#000000", "#FFFFFF", "#13477d"])
            .unwrap();

        let best: Vec<u32> = results.iter().map(|r| r.best().unwrap().entry.id).collect();
        assert_eq!(best, vec![199, 1, 797], "metric {metric:?}");
        for result in &results {
            assert!(result.best().unwrap().distance < 1e-6);
        }
    }
}

#[test]
fn test_results_keep_source_text_and_order() {
    let ws = Workspace::new();
    let results = pipeline(&ws, 3, DistanceMetric::DeltaE2000)
        .match_colors(&["#C82832", "13477D"])
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].source, "#C82832");
    assert_eq!(results[1].source, "13477D");
    assert_eq!(results[0].best().unwrap().entry.id, 321);
}

#[test]
fn test_top_k_is_clamped() {
    let ws = Workspace::new();
    let cases = [(0, 1), (1, 1), (3, 3), (5, 5), (9, 5)];
    for (requested, expected) in cases {
        let results = pipeline(&ws, requested, DistanceMetric::DeltaE2000)
            .match_colors(&["#336699"])
            .unwrap();
        assert_eq!(
            results[0].matches.len(),
            expected,
            "top_k {requested} should yield {expected} matches"
        );
    }
}

#[test]
fn test_matches_are_sorted_by_distance() {
    let ws = Workspace::new();
    for metric in [DistanceMetric::DeltaE76, DistanceMetric::DeltaE2000] {
        let results = pipeline(&ws, 5, metric)
            .match_colors(&["#808080", "#f0a030", "#2a6e3c"])
            .unwrap();
        for result in &results {
            let distances: Vec<f64> = result.matches.iter().map(|m| m.distance).collect();
            assert!(
                distances.windows(2).all(|w| w[0] <= w[1]),
                "{} not sorted under {metric:?}: {distances:?}",
                result.source
            );
        }
    }
}

#[test]
fn test_orange_prefers_pumpkin() {
    let ws = Workspace::new();
    let results = pipeline(&ws, 1, DistanceMetric::DeltaE2000)
        .match_colors(&["#f39530"])
        .unwrap();
    assert_eq!(results[0].best().unwrap().entry.name, "Pumpkin");
}

#[test]
fn test_malformed_hex_fails_whole_batch() {
    let ws = Workspace::new();
    let err = pipeline(&ws, 3, DistanceMetric::DeltaE2000)
        .match_colors(&["#000000", "#zzzzzz"])
        .unwrap_err();
    assert!(matches!(err, AppError::Core(_)), "got {err:?}");
}

#[test]
fn test_matcher_works_directly_on_loaded_palette() {
    let ws = Workspace::new();
    let palette = load_palette(&ws.palette()).unwrap();
    let matcher = PaletteMatcher::new(&palette).metric(DistanceMetric::DeltaE76);

    let result = matcher.match_color("#010101", 2).unwrap();
    assert_eq!(result.matches[0].entry.id, 199);
    assert_eq!(result.matches.len(), 2);
}

#[test]
fn test_match_result_json_shape() {
    let ws = Workspace::new();
    let results = pipeline(&ws, 1, DistanceMetric::DeltaE2000)
        .match_colors(&["#000000"])
        .unwrap();

    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(json[0]["source"], "#000000");
    assert_eq!(json[0]["matches"][0]["entry"]["id"], 199);
    assert_eq!(json[0]["matches"][0]["entry"]["name"], "Black");
    assert_eq!(json[0]["matches"][0]["entry"]["rgb"], serde_json::json!([0, 0, 0]));
    assert!(json[0]["matches"][0]["distance"].as_f64().unwrap() < 1e-6);
}

#[test]
fn test_unreadable_palette_is_reported() {
    let ws = Workspace::new();
    let bad = ws.write("bad.json", "[1, 2, 3]");

    let err = load_palette(&bad).unwrap_err();
    match err {
        AppError::PaletteLoad { path, .. } => assert_eq!(path, bad),
        other => panic!("Expected PaletteLoad, got {other:?}"),
    }
}
