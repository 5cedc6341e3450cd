use super::*;
use crate::{
    beta::separation::SeparationSource,
    motion::model::{MotionType, RotationDirection, Turns},
    placement::overrides::StaticSource,
};

fn pro(start_loc: Location, end_loc: Location, turns: f64) -> MotionData {
    MotionData {
        motion_type: MotionType::Pro,
        rotation_direction: RotationDirection::Clockwise,
        start_loc,
        end_loc,
        turns: Turns::from_f64(turns).unwrap(),
        start_ori: Orientation::In,
        end_ori: Orientation::In,
    }
}

fn positioner(json: &str) -> Positioner {
    let store = OverrideStore::new(StaticSource::from_json_str(json).unwrap());
    Positioner::new(EngineConfig::default(), Arc::new(store))
}

fn scenario_a() -> PictographData {
    PictographData::new(
        "A",
        Some(pro(Location::S, Location::W, 0.0)),
        Some(pro(Location::N, Location::E, 0.0)),
    )
}

#[test]
fn scenario_a_places_both_arrows() {
    let out = positioner("{}").position_all(&scenario_a()).unwrap();
    assert_eq!(out.letter_type, LetterType::Type1);
    assert_eq!(out.grid_mode, GridMode::Diamond);
    assert_eq!(out.turns.unwrap().to_string(), "(0, 0)");
    assert_eq!(out.mirrored_turns, None);

    let blue = out.blue.unwrap();
    assert_eq!(blue.location, Location::W);
    assert_eq!(blue.point, Point::new(325.0, 475.0));
    assert_eq!(blue.rotation, RotationAngle::DEG_0);
    assert_eq!(blue.offset, Vec2::ZERO);
    assert_eq!(blue.offset_source, AdjustmentSource::Zero);

    let red = out.arrow(Color::Red).unwrap();
    assert_eq!(red.location, Location::E);
    assert_eq!(red.rotation, RotationAngle::DEG_180);

    assert!(out.separation.is_none());
    assert!(out.diagnostics.is_empty());
}

#[test]
fn missing_motion_skips_its_arrow() {
    let p = PictographData::new("A", Some(pro(Location::S, Location::W, 0.0)), None);
    let out = positioner("{}").position_all(&p).unwrap();
    assert!(out.blue.is_some());
    assert!(out.red.is_none());
    assert!(out.turns.is_none());
    assert_eq!(
        out.diagnostics,
        vec![PlacementDiagnostic::MissingMotion { color: Color::Red }]
    );
}

#[test]
fn unknown_letter_is_an_error() {
    let mut p = scenario_a();
    p.letter = "?".into();
    let err = positioner("{}").position_all(&p).unwrap_err();
    assert!(matches!(err, TkaError::UnknownLetter(_)));
}

#[test]
fn red_arrow_reads_the_mirrored_tuple() {
    let pos = positioner(
        r#"{ "A_pro_pro": { "arrow_adjustments": {
            "(0, 1)": [1.0, 0.0],
            "(1, 0)": [0.0, 2.0]
        } } }"#,
    );
    let p = PictographData::new(
        "A",
        Some(pro(Location::S, Location::W, 0.0)),
        Some(pro(Location::N, Location::E, 1.0)),
    );
    let out = pos.position_all(&p).unwrap();
    assert_eq!(out.turns.unwrap().to_string(), "(0, 1)");
    assert_eq!(out.mirrored_turns.unwrap().to_string(), "(1, 0)");
    assert_eq!(out.blue.unwrap().offset, Vec2::new(1.0, 0.0));
    assert_eq!(out.red.unwrap().offset, Vec2::new(0.0, 2.0));
    assert_eq!(out.red.unwrap().offset_source, AdjustmentSource::Override);
}

#[test]
fn defaults_fill_in_behind_overrides() {
    let tuple = TurnsTuple::parse("(0, 0)").unwrap();
    let defaults = HashMap::from([(tuple, Vec2::new(5.0, 5.0))]);
    let pos = positioner("{}").with_default_adjustments(defaults);
    let out = pos.position_all(&scenario_a()).unwrap();
    assert_eq!(out.blue.unwrap().offset, Vec2::new(5.0, 5.0));
    assert_eq!(out.blue.unwrap().offset_source, AdjustmentSource::Default);
}

#[test]
fn malformed_override_reported_once() {
    let out = positioner(r#"{ "A_pro_pro": { "arrow_adjustments": 5 } }"#)
        .position_all(&scenario_a())
        .unwrap();
    assert_eq!(out.blue.unwrap().offset, Vec2::ZERO);
    let malformed = out
        .diagnostics
        .iter()
        .filter(|d| {
            matches!(d, PlacementDiagnostic::MalformedOverride { key, .. } if key == "A_pro_pro")
        })
        .count();
    assert_eq!(malformed, 1);
}

#[test]
fn off_grid_end_location_is_neutral() {
    let mut p = PictographData::new(
        "A",
        Some(pro(Location::N, Location::NE, 0.0)),
        Some(pro(Location::S, Location::E, 0.0)),
    );
    p.grid_mode = GridMode::Diamond;
    let out = positioner("{}").position_all(&p).unwrap();
    assert_eq!(out.blue.unwrap().rotation, RotationAngle::DEG_0);
    assert!(out.diagnostics.contains(&PlacementDiagnostic::DegenerateGeometry {
        color: Color::Blue,
        location: Location::NE,
        orientation: Orientation::In,
        grid: GridMode::Diamond,
    }));
}

#[test]
fn beta_letters_get_separation() {
    let p = PictographData::new(
        "G",
        Some(pro(Location::W, Location::E, 0.0)),
        Some(pro(Location::W, Location::E, 0.0)),
    );
    let out = positioner("{}").position_all(&p).unwrap();
    let sep = out.separation.unwrap();
    assert_eq!(sep.source, SeparationSource::Algorithmic);
    assert_ne!(sep.blue.direction, sep.red.direction);
}

#[test]
fn sequence_keeps_order_and_fails_on_unknown_letter() {
    let pos = Positioner::from_config(EngineConfig {
        threads: Some(2),
        ..EngineConfig::default()
    })
    .unwrap();
    let mut beats = vec![scenario_a(); 6];
    beats[3].letter = "G".into();
    let out = pos.position_sequence(&beats).unwrap();
    assert_eq!(out.len(), 6);
    assert_eq!(out[3].letter, "G");
    assert_eq!(out[4].letter, "A");

    beats[5].letter = "nope".into();
    assert!(pos.position_sequence(&beats).is_err());
}

#[test]
fn positioned_json_uses_snake_case_tokens() {
    let out = positioner("{}").position_all(&scenario_a()).unwrap();
    let v = serde_json::to_value(&out).unwrap();
    assert_eq!(v["letter_type"], "Type1");
    assert_eq!(v["blue"]["location"], "w");
    assert_eq!(v["turns"], "(0, 0)");
    assert!(v.get("diagnostics").is_none());
}
