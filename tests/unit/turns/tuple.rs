use super::*;

fn turns(v: f64) -> TurnsField {
    TurnsField::Turns(Turns::from_f64(v).unwrap())
}

#[test]
fn formats_legacy_text() {
    let t = TurnsTuple::Tuple2([turns(0.0), turns(1.5)]);
    assert_eq!(t.to_string(), "(0, 1.5)");
    let t = TurnsTuple::Tuple3([
        TurnsField::Token(RotationToken::Ccw),
        turns(2.0),
        turns(0.0),
    ]);
    assert_eq!(t.to_string(), "(ccw, 2, 0)");
    let t = TurnsTuple::Tuple3([
        TurnsField::Float,
        turns(1.0),
        TurnsField::Token(RotationToken::Cw),
    ]);
    assert_eq!(t.to_string(), "(fl, 1, cw)");
}

#[test]
fn parses_every_layout() {
    assert_eq!(
        TurnsTuple::parse("(0, 1)").unwrap(),
        TurnsTuple::Tuple2([turns(0.0), turns(1.0)])
    );
    assert_eq!(
        TurnsTuple::parse(" (s, 0.5, 3) ").unwrap(),
        TurnsTuple::Tuple3([
            TurnsField::Token(RotationToken::Same),
            turns(0.5),
            turns(3.0),
        ])
    );
    assert_eq!(
        TurnsTuple::parse("(o, 1, 2, s, n)").unwrap(),
        TurnsTuple::Tuple5([
            TurnsField::Token(RotationToken::Opposite),
            turns(1.0),
            turns(2.0),
            TurnsField::Location(Location::S),
            TurnsField::Location(Location::N),
        ])
    );
}

#[test]
fn rejects_malformed_text() {
    assert!(TurnsTuple::parse("0, 1").is_err());
    assert!(TurnsTuple::parse("(0)").is_err());
    assert!(TurnsTuple::parse("(0, 1, 2, 3)").is_err());
    assert!(TurnsTuple::parse("(0, 7)").is_err());
    assert!(TurnsTuple::parse("(cw, 1, 0, x, n)").is_err());
}

#[test]
fn token_helpers() {
    let t = TurnsTuple::parse("(cw, 1, 0)").unwrap();
    assert_eq!(t.token(), Some(RotationToken::Cw));
    assert_eq!(t.with_token(RotationToken::Ccw).to_string(), "(ccw, 1, 0)");
    assert_eq!(TurnsTuple::parse("(1, 0)").unwrap().token(), None);
    assert_eq!(RotationToken::Same.toggled(), None);
    assert_eq!(RotationToken::Ccw.toggled(), Some(RotationToken::Cw));
}

#[test]
fn serializes_as_text() {
    let t = TurnsTuple::parse("(s, 1, 2)").unwrap();
    assert_eq!(serde_json::to_string(&t).unwrap(), "\"(s, 1, 2)\"");
    let de: TurnsTuple = serde_json::from_str("\"(1, 0.5)\"").unwrap();
    assert_eq!(de.to_string(), "(1, 0.5)");
}
