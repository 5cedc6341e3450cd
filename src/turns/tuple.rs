use std::str::FromStr;

use crate::{
    foundation::error::{TkaError, TkaResult},
    motion::model::{Location, RotationDirection, Turns},
};

/// Rotation token carried inside a turns tuple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationToken {
    /// `cw`: the single rotating prop spins clockwise.
    Cw,
    /// `ccw`: the single rotating prop spins counter-clockwise.
    Ccw,
    /// `s`: both props spin the same way.
    Same,
    /// `o`: the props spin opposite ways.
    Opposite,
    /// `no_rot`: nothing spins.
    NoRotation,
}

impl RotationToken {
    /// Token for one prop's spin direction.
    pub fn from_direction(dir: RotationDirection) -> Self {
        match dir {
            RotationDirection::Clockwise => Self::Cw,
            RotationDirection::CounterClockwise => Self::Ccw,
            RotationDirection::NoRotation => Self::NoRotation,
        }
    }

    /// `s` when both directions match, `o` otherwise.
    pub fn relation(a: RotationDirection, b: RotationDirection) -> Self {
        if a == b { Self::Same } else { Self::Opposite }
    }

    /// `cw`↔`ccw`; `None` for relation and no-rotation tokens.
    pub fn toggled(self) -> Option<Self> {
        match self {
            Self::Cw => Some(Self::Ccw),
            Self::Ccw => Some(Self::Cw),
            Self::Same | Self::Opposite | Self::NoRotation => None,
        }
    }

    /// Text form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cw => "cw",
            Self::Ccw => "ccw",
            Self::Same => "s",
            Self::Opposite => "o",
            Self::NoRotation => "no_rot",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "cw" => Some(Self::Cw),
            "ccw" => Some(Self::Ccw),
            "s" => Some(Self::Same),
            "o" => Some(Self::Opposite),
            "no_rot" => Some(Self::NoRotation),
            _ => None,
        }
    }
}

/// One typed slot of a turns tuple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TurnsField {
    /// A prop's turn count.
    Turns(Turns),
    /// A float motion's turns (`fl`).
    Float,
    /// A rotation token.
    Token(RotationToken),
    /// An end location (5-field layout only).
    Location(Location),
}

impl TurnsField {
    /// True for a nonzero turn count.
    pub fn is_rotating(self) -> bool {
        matches!(self, Self::Turns(t) if !t.is_zero())
    }

    fn parse(s: &str, location_slot: bool) -> TkaResult<Self> {
        if location_slot {
            return s.parse::<Location>().map(Self::Location);
        }
        if s == "fl" {
            return Ok(Self::Float);
        }
        if let Some(token) = RotationToken::parse(s) {
            return Ok(Self::Token(token));
        }
        s.parse::<Turns>().map(Self::Turns)
    }
}

impl std::fmt::Display for TurnsField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Turns(t) => write!(f, "{t}"),
            Self::Float => f.write_str("fl"),
            Self::Token(t) => f.write_str(t.as_str()),
            Self::Location(l) => f.write_str(l.as_str()),
        }
    }
}

/// Canonical turns fingerprint of a pictograph, used as a rule-table key.
///
/// Layouts:
/// - `Tuple2`: `(a, b)` turn counts.
/// - `Tuple3`: `(token, a, b)`, or `(a, b, token)` for a float paired with a shift.
/// - `Tuple5`: `(token, blue, red, blue_end, red_end)` for the `Λ-` family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TurnsTuple {
    /// Two fields.
    Tuple2([TurnsField; 2]),
    /// Three fields.
    Tuple3([TurnsField; 3]),
    /// Five fields.
    Tuple5([TurnsField; 5]),
}

impl TurnsTuple {
    /// Fields in order.
    pub fn fields(&self) -> &[TurnsField] {
        match self {
            Self::Tuple2(f) => f,
            Self::Tuple3(f) => f,
            Self::Tuple5(f) => f,
        }
    }

    /// First rotation token, if any.
    pub fn token(&self) -> Option<RotationToken> {
        self.fields().iter().find_map(|f| match f {
            TurnsField::Token(t) => Some(*t),
            _ => None,
        })
    }

    /// Replace every rotation token with `token`.
    pub fn with_token(mut self, token: RotationToken) -> Self {
        let fields: &mut [TurnsField] = match &mut self {
            Self::Tuple2(f) => f,
            Self::Tuple3(f) => f,
            Self::Tuple5(f) => f,
        };
        for f in fields.iter_mut() {
            if matches!(f, TurnsField::Token(_)) {
                *f = TurnsField::Token(token);
            }
        }
        self
    }

    /// Parse the legacy `"(a, b)"` text form.
    pub fn parse(s: &str) -> TkaResult<Self> {
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|r| r.strip_suffix(')'))
            .ok_or_else(|| TkaError::parse(format!("turns tuple '{s}' must be parenthesized")))?;
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        let field = |i: usize| TurnsField::parse(parts[i], parts.len() == 5 && i >= 3);
        match parts.len() {
            2 => Ok(Self::Tuple2([field(0)?, field(1)?])),
            3 => Ok(Self::Tuple3([field(0)?, field(1)?, field(2)?])),
            5 => Ok(Self::Tuple5([
                field(0)?,
                field(1)?,
                field(2)?,
                field(3)?,
                field(4)?,
            ])),
            n => Err(TkaError::parse(format!(
                "turns tuple '{s}' has {n} fields (expected 2, 3 or 5)"
            ))),
        }
    }
}

impl std::fmt::Display for TurnsTuple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("(")?;
        for (i, field) in self.fields().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}")?;
        }
        f.write_str(")")
    }
}

impl FromStr for TurnsTuple {
    type Err = TkaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<TurnsTuple> for String {
    fn from(value: TurnsTuple) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for TurnsTuple {
    type Error = TkaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/turns/tuple.rs"]
mod tests;
