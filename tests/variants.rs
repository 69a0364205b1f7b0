use checkerbot::variants::{find_variant, load_variants, list_variants};
use checkerbot::{new_game, Side, VariantError};
use std::fs::{create_dir_all, write};

#[test]
fn custom_catalog_loads_and_starts_games() {
    let dir = std::path::Path::new("target/variants_test");
    create_dir_all(dir).unwrap();
    let path = dir.join("mini.json");
    write(&path, r#"[{"key":"mini","name":"Mini","description":"6x6 practice board","board_dimension":6,
        "initial_rows":2,"flying_kings":false,"mandatory_capture":true,"backward_capture":false}]"#).unwrap();
    let catalog = load_variants(&path).unwrap();
    let mini = find_variant(&catalog, "MINI").unwrap();
    let state = new_game(&mini);
    assert_eq!(state.board().dimension(), 6);
    assert_eq!(state.board().count(Side::Red), 6);
    assert_eq!(state.board().count(Side::Black), 6);
}

#[test]
fn invalid_catalogs_are_rejected() {
    let dir = std::path::Path::new("target/variants_test");
    create_dir_all(dir).unwrap();
    let path = dir.join("bad.json");
    write(&path, r#"[{"key":"bad","name":"Bad","description":"","board_dimension":6,
        "initial_rows":3,"flying_kings":false,"mandatory_capture":true,"backward_capture":false}]"#).unwrap();
    assert!(matches!(load_variants(&path), Err(VariantError::Invalid { .. })));

    write(&path, "{not json").unwrap();
    assert!(matches!(load_variants(&path), Err(VariantError::Json(_))));
    assert!(matches!(load_variants(dir.join("missing.json")), Err(VariantError::Io(_))));
}

#[test]
fn builtin_catalog_round_trips_through_json() {
    let json = serde_json::to_string(&list_variants()).unwrap();
    assert_eq!(checkerbot::variants::parse_variants(&json).unwrap(), list_variants());
}
