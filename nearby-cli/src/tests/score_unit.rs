//! Focused unit tests covering score CLI configuration and payload handling.

use super::helpers::{PROVIDER_PAYLOAD, workspace, write_utf8};
use super::*;
use crate::score::{ScoreConfig, config_from_layers_for_test, execute_score, run_score_with};
use camino::Utf8PathBuf;
use nearby_core::LatLng;
use rstest::rstest;

fn config_for(places_path: Utf8PathBuf) -> ScoreConfig {
    ScoreConfig {
        places_path,
        location: LatLng::new(51.5074, -0.1278),
        category: "pharmacy".into(),
        min_rating: None,
        radius_m: Some(3000),
    }
}

#[rstest]
fn converting_without_places_errors() {
    let args = ScoreArgs {
        location: Some("51.5,-0.12".into()),
        ..ScoreArgs::default()
    };
    let err = ScoreConfig::try_from(args).expect_err("missing places should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_PLACES);
            assert_eq!(env, ENV_PLACES);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn converting_without_location_errors() {
    let args = ScoreArgs {
        places_path: Some(Utf8PathBuf::from("places.json")),
        ..ScoreArgs::default()
    };
    let err = ScoreConfig::try_from(args).expect_err("missing location should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_LOCATION);
            assert_eq!(env, ENV_LOCATION);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case("abc,def")]
#[case("51.5")]
#[case("95,0")]
fn converting_with_invalid_location_errors(#[case] location: &str) {
    let args = ScoreArgs {
        places_path: Some(Utf8PathBuf::from("places.json")),
        location: Some(location.into()),
        ..ScoreArgs::default()
    };
    let err = ScoreConfig::try_from(args).expect_err("invalid location should error");
    match err {
        CliError::InvalidLocation { value, .. } => assert_eq!(value, location),
        other => panic!("expected InvalidLocation, found {other:?}"),
    }
}

#[rstest]
fn category_defaults_to_store() {
    let args = ScoreArgs {
        places_path: Some(Utf8PathBuf::from("places.json")),
        location: Some("-33.86,151.20".into()),
        ..ScoreArgs::default()
    };
    let config = ScoreConfig::try_from(args).expect("config should build");
    assert_eq!(config.category, DEFAULT_CATEGORY);
    assert_eq!(config.location, LatLng::new(-33.86, 151.20));
}

#[rstest]
fn validate_sources_reports_missing_files() {
    let (_tmp, root) = workspace();
    let config = config_for(root.join("missing.json"));
    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_PLACES);
            assert_eq!(path, root.join("missing.json"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories() {
    let (_tmp, root) = workspace();
    let dir = root.join("payloads");
    std::fs::create_dir(dir.as_std_path()).expect("create payload dir");
    let err = config_for(dir)
        .validate_sources()
        .expect_err("expected directory rejection");
    match err {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_PLACES),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn provider_payload_is_scored_nearest_first() {
    let (_tmp, root) = workspace();
    let path = root.join("nearby.json");
    write_utf8(&path, PROVIDER_PAYLOAD.as_bytes());

    let report =
        execute_score(&config_for(path), &ConvenienceScorer::default()).expect("score payload");

    let ids: Vec<_> = report
        .places
        .iter()
        .filter_map(|ranked| ranked.place.place_id.as_deref())
        .collect();
    assert_eq!(ids, ["near", "far"]);
    assert_eq!(report.metadata.total_places, 2);
    assert_eq!(report.metadata.search_radius_m, Some(3000));
    assert!((0.0..=10.0).contains(&report.convenience_score));
}

#[rstest]
fn min_rating_filters_before_scoring() {
    let (_tmp, root) = workspace();
    let path = root.join("nearby.json");
    write_utf8(&path, PROVIDER_PAYLOAD.as_bytes());
    let config = ScoreConfig {
        min_rating: Some(4.0),
        ..config_for(path)
    };

    let report = execute_score(&config, &ConvenienceScorer::default()).expect("score payload");

    assert_eq!(report.metadata.total_places, 1);
    assert_eq!(report.metadata.average_rating, Some(4.6));
}

#[rstest]
fn bare_array_payload_is_accepted() {
    let (_tmp, root) = workspace();
    let path = root.join("bare.json");
    write_utf8(
        &path,
        br#"[{ "geometry": { "location": { "lat": 51.5074, "lng": -0.1278 } } }]"#,
    );

    let report =
        execute_score(&config_for(path), &ConvenienceScorer::default()).expect("score payload");

    assert_eq!(report.places.len(), 1);
    assert_eq!(report.breakdown.average_distance_score, 1.0);
}

#[rstest]
fn malformed_payload_maps_to_parse_error() {
    let (_tmp, root) = workspace();
    let path = root.join("broken.json");
    write_utf8(&path, b"{ not json");

    let err = execute_score(&config_for(path.clone()), &ConvenienceScorer::default())
        .expect_err("malformed payload should error");
    match err {
        CliError::ParsePlaces { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ParsePlaces, found {other:?}"),
    }
}

#[rstest]
fn place_without_location_maps_to_score_error() {
    let (_tmp, root) = workspace();
    let path = root.join("no-location.json");
    write_utf8(&path, br#"{ "results": [{ "name": "Nowhere" }] }"#);

    let err = execute_score(&config_for(path), &ConvenienceScorer::default())
        .expect_err("missing location should error");
    match err {
        CliError::Score {
            source: nearby_scorer::ConvenienceError::MissingLocation { index, .. },
        } => assert_eq!(index, 0),
        other => panic!("expected Score error, found {other:?}"),
    }
}

#[rstest]
fn run_score_writes_json_report() {
    let (_tmp, root) = workspace();
    let path = root.join("nearby.json");
    write_utf8(&path, PROVIDER_PAYLOAD.as_bytes());
    let args = ScoreArgs {
        places_path: Some(path),
        location: Some("51.5074,-0.1278".into()),
        category: Some("pharmacy".into()),
        min_rating: None,
        radius_m: None,
    };

    let mut output = Vec::new();
    run_score_with(args, &ConvenienceScorer::default(), &mut output).expect("run score");

    let json: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON output");
    assert!(json.get("convenience_score").is_some_and(serde_json::Value::is_f64));
    assert_eq!(
        json.pointer("/metadata/category").and_then(serde_json::Value::as_str),
        Some("pharmacy")
    );
    assert_eq!(
        json.pointer("/places/0/estimated_cost")
            .and_then(serde_json::Value::as_str),
        Some("N/A")
    );
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "places_path": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "category": "hospital",
            "location": "0,0",
            "radius_m": 1000,
        }),
        None,
    );
    composer.push_environment(json!({
        "location": "48.8566,2.3522",
        "category": "school",
    }));
    composer.push_cli(json!({
        "places_path": "from-cli.json",
        "category": "atm",
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.places_path, Utf8PathBuf::from("from-cli.json"));
    assert_eq!(config.location, LatLng::new(48.8566, 2.3522));
    assert_eq!(config.category, "atm");
    assert_eq!(config.radius_m, Some(1000));
}

#[rstest]
fn profiles_listing_includes_default() {
    let mut output = Vec::new();
    write_profiles(&mut output, &ConvenienceScorer::default()).expect("write profiles");

    let json: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON output");
    let categories = json
        .get("categories")
        .and_then(serde_json::Value::as_object)
        .expect("categories object");
    assert_eq!(categories.len(), 6);
    assert_eq!(
        json.pointer("/categories/hospital/importance_weight")
            .and_then(serde_json::Value::as_f64),
        Some(10.0)
    );
    assert_eq!(
        json.pointer("/default/ideal_count").and_then(serde_json::Value::as_u64),
        Some(5)
    );
}
