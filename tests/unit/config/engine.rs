use super::*;
use crate::foundation::core::Point;

#[test]
fn empty_object_uses_defaults() {
    let cfg = EngineConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg, EngineConfig::default());
    assert_eq!(cfg.reference_size, 950.0);
    assert_eq!(cfg.prop_type, PropType::Staff);
    assert_eq!(cfg.grid.center, Point::new(475.0, 475.0));
    cfg.validate().unwrap();
}

#[test]
fn partial_grid_keeps_other_defaults() {
    let cfg = EngineConfig::from_reader(
        r#"{ "prop_type": "club", "grid": { "hand_radius": 90.0 } }"#.as_bytes(),
    )
    .unwrap();
    assert_eq!(cfg.prop_type, PropType::Club);
    assert_eq!(cfg.grid.hand_radius, 90.0);
    assert_eq!(cfg.grid.center, Point::new(475.0, 475.0));
}

#[test]
fn bad_json_is_config_error() {
    let err = EngineConfig::from_reader(r#"{ "prop_type": "spoon" }"#.as_bytes()).unwrap_err();
    assert!(matches!(err, TkaError::Config(_)), "{err}");
}

#[test]
fn validate_rejects_degenerate_sizes() {
    let mut cfg = EngineConfig {
        reference_size: 0.0,
        ..EngineConfig::default()
    };
    assert!(cfg.validate().is_err());
    cfg.reference_size = f64::NAN;
    assert!(cfg.validate().is_err());
    cfg.reference_size = 950.0;
    cfg.grid.hand_radius = -1.0;
    assert!(cfg.validate().is_err());
    cfg.grid.hand_radius = 150.0;
    cfg.threads = Some(0);
    assert!(cfg.validate().is_err());
    cfg.threads = Some(2);
    cfg.validate().unwrap();
}

#[test]
fn relative_overrides_resolve_next_to_config() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("target/engine_config_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("engine.json");
    std::fs::write(&path, r#"{ "overrides": "placements.json" }"#).unwrap();

    let cfg = EngineConfig::from_path(&path).unwrap();
    assert_eq!(cfg.overrides, Some(dir.join("placements.json")));
}

#[test]
fn missing_file_is_config_error() {
    let err = EngineConfig::from_path("target/definitely_missing_engine.json").unwrap_err();
    assert!(matches!(err, TkaError::Config(_)));
}
