use crate::{
    foundation::error::{TkaError, TkaResult},
    letter::classify::{LetterType, classify},
    motion::model::{MotionData, MotionType, PictographData},
    turns::tuple::{RotationToken, TurnsField, TurnsTuple},
};

/// Letter whose fingerprint also carries both end locations.
pub const LAMBDA_DASH: &str = "Λ-";

/// Build the canonical turns tuple for a pictograph.
///
/// Requires both motions. The layout depends on the letter type:
///
/// | family | layout |
/// |---|---|
/// | Type1 | `(a, b)`; hybrids put pro first; `(blue, red, token)` when a float meets a shift |
/// | Type2 | `(shift, static)`, or `(token, shift, static)` once the static prop turns |
/// | Type3 | `(shift, dash)`, or `(s/o, shift, dash)` when both turn |
/// | Type4 | `(dash, static)` or `(token, dash, static)` |
/// | Type5/6 | `(blue, red)` or `(token, blue, red)`; `Λ-` adds both end locations |
pub fn generate(pictograph: &PictographData) -> TkaResult<TurnsTuple> {
    let letter_type = classify(&pictograph.letter)?;
    let (blue, red) = pictograph.pair().ok_or_else(|| {
        TkaError::validation(format!(
            "turns tuple for '{}' needs both motions",
            pictograph.letter
        ))
    })?;

    if pictograph.letter.trim() == LAMBDA_DASH {
        return Ok(lambda_dash(blue, red));
    }

    let tuple = match letter_type {
        LetterType::Type1 => dual_shift(blue, red),
        LetterType::Type2 => {
            let (shift, other) = split(blue, red, |m| m.motion_type.is_shift());
            shift_static(shift, other)
        }
        LetterType::Type3 => {
            let (shift, dash) = split(blue, red, |m| m.motion_type.is_shift());
            shift_dash(shift, dash)
        }
        LetterType::Type4 => {
            let (dash, other) = split(blue, red, |m| m.motion_type == MotionType::Dash);
            rotating_pair(dash, other)
        }
        LetterType::Type5 | LetterType::Type6 => rotating_pair(blue, red),
    };
    tracing::trace!(letter = %pictograph.letter, %tuple, "generated turns tuple");
    Ok(tuple)
}

pub(crate) fn field(motion: &MotionData) -> TurnsField {
    if motion.motion_type == MotionType::Float {
        TurnsField::Float
    } else {
        TurnsField::Turns(motion.turns)
    }
}

fn rotates(motion: &MotionData) -> bool {
    field(motion).is_rotating()
}

// (matching, other); falls back to (blue, red) when neither matches.
fn split<'a>(
    blue: &'a MotionData,
    red: &'a MotionData,
    pred: impl Fn(&MotionData) -> bool,
) -> (&'a MotionData, &'a MotionData) {
    if !pred(blue) && pred(red) {
        (red, blue)
    } else {
        (blue, red)
    }
}

fn dual_shift(blue: &MotionData, red: &MotionData) -> TurnsTuple {
    use MotionType::{Anti, Float, Pro};
    match (blue.motion_type, red.motion_type) {
        (Float, Float) => TurnsTuple::Tuple2([field(blue), field(red)]),
        (Float, _) | (_, Float) => {
            let shift = if blue.motion_type == Float { red } else { blue };
            TurnsTuple::Tuple3([
                field(blue),
                field(red),
                TurnsField::Token(RotationToken::from_direction(shift.rotation_direction)),
            ])
        }
        (Anti, Pro) => TurnsTuple::Tuple2([field(red), field(blue)]),
        _ => TurnsTuple::Tuple2([field(blue), field(red)]),
    }
}

fn shift_static(shift: &MotionData, stat: &MotionData) -> TurnsTuple {
    if !rotates(stat) {
        return TurnsTuple::Tuple2([field(shift), field(stat)]);
    }
    let token = if rotates(shift) {
        RotationToken::relation(shift.rotation_direction, stat.rotation_direction)
    } else {
        RotationToken::from_direction(stat.rotation_direction)
    };
    TurnsTuple::Tuple3([TurnsField::Token(token), field(shift), field(stat)])
}

fn shift_dash(shift: &MotionData, dash: &MotionData) -> TurnsTuple {
    if rotates(shift) && rotates(dash) {
        let token = RotationToken::relation(shift.rotation_direction, dash.rotation_direction);
        TurnsTuple::Tuple3([TurnsField::Token(token), field(shift), field(dash)])
    } else {
        TurnsTuple::Tuple2([field(shift), field(dash)])
    }
}

fn pair_token(a: &MotionData, b: &MotionData) -> Option<RotationToken> {
    match (rotates(a), rotates(b)) {
        (true, true) => Some(RotationToken::relation(
            a.rotation_direction,
            b.rotation_direction,
        )),
        (true, false) => Some(RotationToken::from_direction(a.rotation_direction)),
        (false, true) => Some(RotationToken::from_direction(b.rotation_direction)),
        (false, false) => None,
    }
}

fn rotating_pair(a: &MotionData, b: &MotionData) -> TurnsTuple {
    match pair_token(a, b) {
        Some(token) => TurnsTuple::Tuple3([TurnsField::Token(token), field(a), field(b)]),
        None => TurnsTuple::Tuple2([field(a), field(b)]),
    }
}

fn lambda_dash(blue: &MotionData, red: &MotionData) -> TurnsTuple {
    let token = pair_token(blue, red).unwrap_or(RotationToken::NoRotation);
    TurnsTuple::Tuple5([
        TurnsField::Token(token),
        field(blue),
        field(red),
        TurnsField::Location(blue.end_loc),
        TurnsField::Location(red.end_loc),
    ])
}

#[cfg(test)]
#[path = "../../tests/unit/turns/generator.rs"]
mod tests;
