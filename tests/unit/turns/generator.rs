use super::*;
use crate::motion::model::{Location, Orientation, RotationDirection, Turns};

fn motion(
    motion_type: MotionType,
    dir: RotationDirection,
    start: Location,
    end: Location,
    turns: f64,
) -> MotionData {
    MotionData {
        motion_type,
        rotation_direction: dir,
        start_loc: start,
        end_loc: end,
        turns: Turns::from_f64(turns).unwrap(),
        start_ori: Orientation::In,
        end_ori: Orientation::In,
    }
}

fn picto(letter: &str, blue: MotionData, red: MotionData) -> PictographData {
    PictographData::new(letter, Some(blue), Some(red))
}

use Location::*;
use MotionType::*;
use RotationDirection::*;

#[test]
fn same_type_dual_shift_is_blue_then_red() {
    let p = picto(
        "A",
        motion(Pro, Clockwise, S, W, 0.0),
        motion(Pro, Clockwise, N, E, 0.0),
    );
    assert_eq!(generate(&p).unwrap().to_string(), "(0, 0)");

    let p = picto(
        "B",
        motion(Anti, Clockwise, S, W, 1.0),
        motion(Anti, CounterClockwise, N, E, 2.5),
    );
    assert_eq!(generate(&p).unwrap().to_string(), "(1, 2.5)");
}

#[test]
fn hybrid_dual_shift_puts_pro_first() {
    let p = picto(
        "C",
        motion(Anti, Clockwise, S, W, 2.0),
        motion(Pro, Clockwise, N, E, 1.0),
    );
    assert_eq!(generate(&p).unwrap().to_string(), "(1, 2)");
}

#[test]
fn float_with_shift_is_three_fields() {
    let p = picto(
        "A",
        motion(Float, NoRotation, S, W, 0.0),
        motion(Pro, CounterClockwise, N, E, 1.0),
    );
    assert_eq!(generate(&p).unwrap().to_string(), "(fl, 1, ccw)");
}

#[test]
fn shift_static_gains_token_when_static_turns() {
    let p = picto(
        "W",
        motion(Static, Clockwise, E, E, 0.0),
        motion(Pro, Clockwise, N, E, 1.0),
    );
    assert_eq!(generate(&p).unwrap().to_string(), "(1, 0)");

    let p = picto(
        "W",
        motion(Static, CounterClockwise, E, E, 1.0),
        motion(Pro, Clockwise, N, E, 1.0),
    );
    assert_eq!(generate(&p).unwrap().to_string(), "(o, 1, 1)");

    let p = picto(
        "W",
        motion(Static, CounterClockwise, E, E, 0.5),
        motion(Pro, Clockwise, N, E, 0.0),
    );
    assert_eq!(generate(&p).unwrap().to_string(), "(ccw, 0, 0.5)");
}

#[test]
fn cross_shift_uses_relation_only_when_both_turn() {
    let p = picto(
        "W-",
        motion(Dash, Clockwise, W, E, 1.0),
        motion(Anti, Clockwise, N, E, 2.0),
    );
    assert_eq!(generate(&p).unwrap().to_string(), "(s, 2, 1)");

    let p = picto(
        "W-",
        motion(Dash, Clockwise, W, E, 0.0),
        motion(Anti, Clockwise, N, E, 2.0),
    );
    assert_eq!(generate(&p).unwrap().to_string(), "(2, 0)");
}

#[test]
fn dash_static_puts_dash_first() {
    let p = picto(
        "Φ",
        motion(Static, Clockwise, N, N, 0.0),
        motion(Dash, CounterClockwise, S, N, 1.0),
    );
    assert_eq!(generate(&p).unwrap().to_string(), "(ccw, 1, 0)");
}

#[test]
fn dual_dash_and_static_layouts() {
    let p = picto(
        "Φ-",
        motion(Dash, Clockwise, E, W, 1.0),
        motion(Dash, Clockwise, W, E, 0.5),
    );
    assert_eq!(generate(&p).unwrap().to_string(), "(s, 1, 0.5)");

    let p = picto(
        "α",
        motion(Static, Clockwise, E, E, 0.0),
        motion(Static, Clockwise, W, W, 0.0),
    );
    assert_eq!(generate(&p).unwrap().to_string(), "(0, 0)");
}

#[test]
fn lambda_dash_has_five_fields() {
    let p = picto(
        "Λ-",
        motion(Dash, Clockwise, E, W, 0.0),
        motion(Dash, CounterClockwise, N, S, 1.0),
    );
    assert_eq!(generate(&p).unwrap().to_string(), "(ccw, 0, 1, w, s)");

    let p = picto(
        "Λ-",
        motion(Dash, Clockwise, E, W, 0.0),
        motion(Dash, CounterClockwise, N, S, 0.0),
    );
    assert_eq!(generate(&p).unwrap().to_string(), "(no_rot, 0, 0, w, s)");
}

#[test]
fn generation_is_deterministic() {
    let p = picto(
        "Ψ-",
        motion(Dash, Clockwise, E, W, 1.5),
        motion(Dash, CounterClockwise, W, E, 3.0),
    );
    assert_eq!(generate(&p).unwrap(), generate(&p).unwrap());
}

#[test]
fn missing_motion_or_unknown_letter_fails() {
    let m = motion(Pro, Clockwise, S, W, 0.0);
    let p = PictographData::new("A", Some(m), None);
    assert!(matches!(generate(&p), Err(TkaError::Validation(_))));
    let p = picto("?", m, m);
    assert!(matches!(generate(&p), Err(TkaError::UnknownLetter(_))));
}
