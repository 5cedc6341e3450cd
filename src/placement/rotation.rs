use crate::{
    foundation::core::RotationAngle,
    motion::model::{GridMode, Location, MotionData, MotionType, Orientation},
};

type AngleRow = [(Location, RotationAngle); 4];

struct AngleTable {
    inward: AngleRow,
    outward: AngleRow,
}

const DIAMOND: AngleTable = AngleTable {
    inward: [
        (Location::N, RotationAngle::DEG_90),
        (Location::E, RotationAngle::DEG_180),
        (Location::S, RotationAngle::DEG_270),
        (Location::W, RotationAngle::DEG_0),
    ],
    outward: [
        (Location::N, RotationAngle::DEG_270),
        (Location::E, RotationAngle::DEG_0),
        (Location::S, RotationAngle::DEG_90),
        (Location::W, RotationAngle::DEG_180),
    ],
};

// Box angles are in the box grid's own frame, which the renderer turns 45° clockwise.
const BOX: AngleTable = AngleTable {
    inward: [
        (Location::NE, RotationAngle::DEG_90),
        (Location::SE, RotationAngle::DEG_180),
        (Location::SW, RotationAngle::DEG_270),
        (Location::NW, RotationAngle::DEG_0),
    ],
    outward: [
        (Location::NE, RotationAngle::DEG_270),
        (Location::SE, RotationAngle::DEG_0),
        (Location::SW, RotationAngle::DEG_90),
        (Location::NW, RotationAngle::DEG_180),
    ],
};

fn row_lookup(row: &AngleRow, location: Location) -> Option<RotationAngle> {
    row.iter().find(|(l, _)| *l == location).map(|(_, a)| *a)
}

/// Rotation for a prop ending at `location` with `orientation` on `grid`.
///
/// `None` when `location` is not a point of `grid`. Nonradial orientations are the inward
/// angle turned a quarter clockwise (`clock`) or counter-clockwise (`counter`).
pub fn rotation_lookup(
    orientation: Orientation,
    location: Location,
    grid: GridMode,
) -> Option<RotationAngle> {
    let table = match grid {
        GridMode::Diamond => &DIAMOND,
        GridMode::Box => &BOX,
    };
    match orientation {
        Orientation::In => row_lookup(&table.inward, location),
        Orientation::Out => row_lookup(&table.outward, location),
        Orientation::Clock => row_lookup(&table.inward, location).map(|a| a.turned(1)),
        Orientation::Counter => row_lookup(&table.inward, location).map(|a| a.turned(-1)),
    }
}

/// Prop rotation for `motion` on `grid`; `0°` when the end location is off-grid.
pub fn compute_rotation(motion: &MotionData, grid: GridMode) -> RotationAngle {
    rotation_lookup(motion.end_ori, motion.end_loc, grid).unwrap_or_else(|| {
        tracing::warn!(
            end_loc = %motion.end_loc,
            end_ori = %motion.end_ori,
            %grid,
            "no rotation entry, using 0°"
        );
        RotationAngle::DEG_0
    })
}

/// End orientation reached from `start` after the motion's turns.
///
/// Pro and static keep the orientation on an even whole-turn count and flip it on odd;
/// anti and dash do the reverse. Half turns do not affect parity. Floats keep `start`.
pub fn compute_end_orientation(motion: &MotionData, start: Orientation) -> Orientation {
    let odd = motion.turns.whole() % 2 == 1;
    let flip = match motion.motion_type {
        MotionType::Pro | MotionType::Static => odd,
        MotionType::Anti | MotionType::Dash => !odd,
        MotionType::Float => false,
    };
    if flip { start.flipped() } else { start }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/rotation.rs"]
mod tests;
