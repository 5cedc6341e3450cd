use std::f64::consts::FRAC_1_SQRT_2;

use crate::{
    foundation::core::Vec2,
    motion::model::{Color, GridMode, Location, OrientationClass},
    motion::prop::PropType,
};

/// Screen direction a prop is nudged in to avoid its partner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum SeparationDirection {
    Left,
    Right,
    Up,
    Down,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl SeparationDirection {
    /// All eight directions.
    pub const ALL: [SeparationDirection; 8] = [
        Self::Left,
        Self::Right,
        Self::Up,
        Self::Down,
        Self::UpLeft,
        Self::UpRight,
        Self::DownLeft,
        Self::DownRight,
    ];

    /// Geometric opposite.
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::UpLeft => Self::DownRight,
            Self::UpRight => Self::DownLeft,
            Self::DownLeft => Self::UpRight,
            Self::DownRight => Self::UpLeft,
        }
    }

    /// Unit vector in screen coordinates (+y down).
    pub fn unit(self) -> Vec2 {
        let d = FRAC_1_SQRT_2;
        match self {
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.0),
            Self::Up => Vec2::new(0.0, -1.0),
            Self::Down => Vec2::new(0.0, 1.0),
            Self::UpLeft => Vec2::new(-d, -d),
            Self::UpRight => Vec2::new(d, -d),
            Self::DownLeft => Vec2::new(-d, d),
            Self::DownRight => Vec2::new(d, d),
        }
    }
}

type DirectionTable = [((Location, Color), SeparationDirection); 8];

use Color::{Blue, Red};
use Location::{E, N, NE, NW, S, SE, SW, W};
use SeparationDirection::{Down, DownLeft, DownRight, Left, Right, Up, UpLeft, UpRight};

// Every table pairs the two colors at one point with opposite directions. When both props
// share an end point, the letter-I coupling therefore agrees with the plain lookup; it only
// changes the answer for props at different points.

// Radial props lie along the radius, so they part sideways to it.
const DIAMOND_RADIAL: DirectionTable = [
    ((N, Red), Right),
    ((N, Blue), Left),
    ((E, Red), Down),
    ((E, Blue), Up),
    ((S, Red), Left),
    ((S, Blue), Right),
    ((W, Red), Up),
    ((W, Blue), Down),
];

// Nonradial props lie across the radius, so they part along it.
const DIAMOND_NONRADIAL: DirectionTable = [
    ((N, Red), Up),
    ((N, Blue), Down),
    ((E, Red), Right),
    ((E, Blue), Left),
    ((S, Red), Down),
    ((S, Blue), Up),
    ((W, Red), Left),
    ((W, Blue), Right),
];

const BOX_RADIAL: DirectionTable = [
    ((NE, Red), DownRight),
    ((NE, Blue), UpLeft),
    ((SE, Red), DownLeft),
    ((SE, Blue), UpRight),
    ((SW, Red), UpLeft),
    ((SW, Blue), DownRight),
    ((NW, Red), UpRight),
    ((NW, Blue), DownLeft),
];

const BOX_NONRADIAL: DirectionTable = [
    ((NE, Red), UpRight),
    ((NE, Blue), DownLeft),
    ((SE, Red), DownRight),
    ((SE, Blue), UpLeft),
    ((SW, Red), DownLeft),
    ((SW, Blue), UpRight),
    ((NW, Red), UpLeft),
    ((NW, Blue), DownRight),
];

fn table(grid: GridMode, class: OrientationClass) -> &'static DirectionTable {
    match (grid, class) {
        (GridMode::Diamond, OrientationClass::Radial) => &DIAMOND_RADIAL,
        (GridMode::Diamond, OrientationClass::Nonradial) => &DIAMOND_NONRADIAL,
        (GridMode::Box, OrientationClass::Radial) => &BOX_RADIAL,
        (GridMode::Box, OrientationClass::Nonradial) => &BOX_NONRADIAL,
    }
}

/// Static separation direction for a prop of `color` ending at `location`.
///
/// `None` when the location is not a point of `grid`.
pub fn table_direction(
    grid: GridMode,
    class: OrientationClass,
    location: Location,
    color: Color,
) -> Option<SeparationDirection> {
    table(grid, class)
        .iter()
        .find(|((l, c), _)| *l == location && *c == color)
        .map(|(_, d)| *d)
}

/// Pixel offset for nudging a `prop_type` prop in `direction`.
///
/// `base = reference_size / divisor(prop_type)`; diagonals split `base` evenly over both axes.
pub fn separation_offset(
    direction: SeparationDirection,
    prop_type: PropType,
    reference_size: f64,
) -> Vec2 {
    let base = reference_size / prop_type.size_class().divisor();
    direction.unit() * base
}

#[cfg(test)]
#[path = "../../tests/unit/beta/directions.rs"]
mod tests;
