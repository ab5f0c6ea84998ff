//! Behavior tests for grid generation and the write-once overlay cache.

use grid_overlay::{
    ensure_grid, generate_grid, global_grid_nodes, FsOverlayStore, GridFeatureCollection,
    OverlayError,
};
use test_utils::temp_test_dir;

#[test]
fn cell_count_is_pairs_times_pairs() {
    let (xs, ys) = global_grid_nodes(5.0);
    assert_eq!(xs.len(), 73);
    assert_eq!(ys.len(), 37);

    let fc = generate_grid(&xs, &ys).unwrap();
    assert_eq!(fc.len(), 72 * 36);
    assert_eq!(fc.len(), 2592);
}

#[test]
fn first_feature_matches_global_five_degree_scenario() {
    let (xs, ys) = global_grid_nodes(5.0);
    let fc = generate_grid(&xs, &ys).unwrap();

    let first = &fc.features[0];
    assert_eq!(first.id, 0);
    assert_eq!(
        first.geometry.coordinates,
        vec![vec![[-180, -90], [-175, -90], [-175, -85], [-180, -85]]]
    );
    // Reported center is corner + x-extent on both axes.
    assert_eq!(first.properties.lon_center, -175);
    assert_eq!(first.properties.lat_center, -85);
}

#[test]
fn x_pairs_iterate_in_the_outer_loop() {
    let fc = generate_grid(&[0.0, 10.0, 20.0], &[0.0, 5.0, 10.0]).unwrap();
    assert_eq!(fc.len(), 4);

    // id 0 and 1 share the first x-pair and walk the y-pairs.
    assert_eq!(fc.features[0].geometry.coordinates[0][0], [0, 0]);
    assert_eq!(fc.features[1].geometry.coordinates[0][0], [0, 5]);
    assert_eq!(fc.features[2].geometry.coordinates[0][0], [10, 0]);
}

#[test]
fn generation_is_deterministic_byte_for_byte() {
    let (xs, ys) = global_grid_nodes(5.0);

    let a = generate_grid(&xs, &ys).unwrap().to_json().unwrap();
    let b = generate_grid(&xs, &ys).unwrap().to_json().unwrap();
    assert_eq!(a, b);
}

#[test]
fn output_parses_as_a_feature_collection() {
    let fc = generate_grid(&[0.0, 5.0, 10.0], &[0.0, 5.0]).unwrap();
    let json = fc.to_json().unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["type"], "FeatureCollection");

    let features = value["features"].as_array().unwrap();
    assert_eq!(features.len(), 2);
    for feature in features {
        assert_eq!(feature["type"], "Feature");
        assert!(feature["id"].is_u64());
        assert!(feature["properties"]["name"].is_string());
        assert!(feature["properties"]["lon_center"].is_i64());
        assert!(feature["properties"]["lat_center"].is_i64());
        assert_eq!(feature["geometry"]["type"], "Polygon");
        assert_eq!(feature["geometry"]["coordinates"][0].as_array().unwrap().len(), 4);
    }

    let parsed: GridFeatureCollection = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, fc);
}

#[test]
fn fractional_nodes_truncate_before_corners_are_emitted() {
    let fc = generate_grid(&[-177.5, -172.5], &[2.5, 7.5]).unwrap();
    assert_eq!(
        fc.features[0].geometry.coordinates,
        vec![vec![[-177, 2], [-172, 2], [-172, 7], [-177, 7]]]
    );
}

#[test]
fn invalid_nodes_are_rejected() {
    assert!(matches!(
        generate_grid(&[0.0], &[0.0, 5.0]),
        Err(OverlayError::InvalidInput(_))
    ));
    assert!(matches!(
        generate_grid(&[5.0, 0.0], &[0.0, 5.0]),
        Err(OverlayError::InvalidInput(_))
    ));
}

#[test]
fn fs_store_writes_overlay_file_once() {
    let dir = temp_test_dir();
    let path = dir.path().join("grid.json");
    let mut store = FsOverlayStore::new(&path);

    assert!(ensure_grid(&mut store, &[0.0, 5.0, 10.0], &[0.0, 5.0]).unwrap());
    assert!(path.exists());
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with(r#"{"type":"FeatureCollection""#));

    // A second ensure sees the file and leaves it alone.
    assert!(!ensure_grid(&mut store, &[0.0, 5.0, 10.0], &[0.0, 5.0]).unwrap());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), written);
}

#[test]
fn fs_store_existing_file_is_never_overwritten() {
    let dir = temp_test_dir();
    let path = dir.path().join("grid.json");
    std::fs::write(&path, "sentinel").unwrap();

    let mut store = FsOverlayStore::new(&path);
    assert!(!ensure_grid(&mut store, &[0.0, 5.0], &[0.0, 5.0]).unwrap());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "sentinel");
}

#[test]
fn fs_store_unwritable_target_reports_io_error() {
    let dir = temp_test_dir();
    let path = dir.path().join("missing-subdir").join("grid.json");

    let mut store = FsOverlayStore::new(&path);
    let err = ensure_grid(&mut store, &[0.0, 5.0], &[0.0, 5.0]).unwrap_err();
    assert!(matches!(err, OverlayError::Io(_)));
}
