use crate::{
    foundation::error::TkaResult,
    letter::classify::{LetterType, classify},
    motion::model::{MotionData, MotionType, PictographData},
    turns::{
        generator::{LAMBDA_DASH, generate},
        tuple::{TurnsField, TurnsTuple},
    },
};

/// Turns tuple as read from the other prop's side of the same rule table.
///
/// `primary` is the motion whose arrow is being placed; the other motion of `pictograph` is
/// its partner. Returns `Ok(None)` when the letter family has no mirrored form for this
/// tuple. Errors only come from [`generate`] (unknown letter, missing motion).
pub fn generate_mirrored(
    primary: &MotionData,
    pictograph: &PictographData,
) -> TkaResult<Option<TurnsTuple>> {
    let tuple = generate(pictograph)?;
    let letter_type = classify(&pictograph.letter)?;
    let other = match (pictograph.blue.as_ref(), pictograph.red.as_ref()) {
        (Some(blue), Some(red)) if blue == primary => red,
        (Some(blue), _) => blue,
        (None, Some(red)) => red,
        (None, None) => primary,
    };
    let mirrored = mirror(letter_type, pictograph.letter.trim(), primary, other, tuple);
    tracing::trace!(
        letter = %pictograph.letter,
        %tuple,
        mirrored = ?mirrored.map(|t| t.to_string()),
        "mirrored turns tuple"
    );
    Ok(mirrored)
}

/// Pure transform of a canonical tuple; total over every letter type.
pub fn mirror(
    letter_type: LetterType,
    letter: &str,
    primary: &MotionData,
    other: &MotionData,
    tuple: TurnsTuple,
) -> Option<TurnsTuple> {
    if matches!(letter, "S" | "T") {
        return Some(tuple);
    }
    if letter == LAMBDA_DASH {
        return Some(lambda_dash(tuple));
    }
    match letter_type {
        LetterType::Type1 => {
            let same_type = primary.motion_type == other.motion_type;
            let float_cross = (primary.motion_type == MotionType::Float)
                != (other.motion_type == MotionType::Float);
            if same_type || float_cross {
                Some(swap_leading(tuple))
            } else {
                Some(tuple)
            }
        }
        LetterType::Type2 | LetterType::Type3 => Some(tuple),
        LetterType::Type4 => toggle_token(tuple),
        LetterType::Type5 | LetterType::Type6 => dual(tuple),
    }
}

fn swap_leading(tuple: TurnsTuple) -> TurnsTuple {
    match tuple {
        TurnsTuple::Tuple2([a, b]) => TurnsTuple::Tuple2([b, a]),
        TurnsTuple::Tuple3([a, b, c]) => TurnsTuple::Tuple3([b, a, c]),
        TurnsTuple::Tuple5([a, b, c, d, e]) => TurnsTuple::Tuple5([b, a, c, d, e]),
    }
}

fn toggle_token(tuple: TurnsTuple) -> Option<TurnsTuple> {
    let toggled = tuple.token()?.toggled()?;
    Some(tuple.with_token(toggled))
}

fn dual(tuple: TurnsTuple) -> Option<TurnsTuple> {
    let TurnsTuple::Tuple3([token, a, b]) = tuple else {
        return None;
    };
    match (a.is_rotating(), b.is_rotating()) {
        (true, true) => Some(TurnsTuple::Tuple3([token, b, a])),
        (true, false) | (false, true) => toggle_token(tuple),
        (false, false) => None,
    }
}

// Color swap: turns and end locations trade places, a single spinning prop's direction flips.
fn lambda_dash(tuple: TurnsTuple) -> TurnsTuple {
    let TurnsTuple::Tuple5([token, blue, red, blue_end, red_end]) = tuple else {
        return tuple;
    };
    let token = match (blue.is_rotating(), red.is_rotating()) {
        (true, true) => token,
        (true, false) | (false, true) => match token {
            TurnsField::Token(t) => t.toggled().map_or(token, TurnsField::Token),
            other => other,
        },
        (false, false) => return tuple,
    };
    TurnsTuple::Tuple5([token, red, blue, red_end, blue_end])
}

#[cfg(test)]
#[path = "../../tests/unit/turns/mirrored.rs"]
mod tests;
