use std::sync::Arc;

use crate::{
    beta::directions::{SeparationDirection, separation_offset, table_direction},
    foundation::core::Vec2,
    motion::model::{Color, GridMode, MotionData, MotionType, PictographData},
    motion::prop::PropType,
    placement::overrides::{OverrideEntry, OverrideStore, PlacementOverride, override_key},
};

/// Letters whose props finish together at one hand point.
pub const BETA_ENDING_LETTERS: [&str; 13] = [
    "G", "H", "I", "J", "K", "L", "Y", "Z", "Y-", "Z-", "Ψ", "Ψ-", "β",
];

/// Letter whose anti prop always moves opposite its pro prop.
const COUPLED_LETTER: &str = "I";

/// True for letters that need beta positioning.
pub fn should_apply(letter: &str) -> bool {
    let letter = letter.trim();
    BETA_ENDING_LETTERS.iter().any(|l| *l == letter)
}

/// True when both props end at the same location in the same orientation class.
pub fn detect_overlap(pictograph: &PictographData) -> bool {
    pictograph.pair().is_some_and(|(blue, red)| {
        blue.end_loc == red.end_loc && blue.end_ori.class() == red.end_ori.class()
    })
}

/// Table direction for one prop on `grid`; `None` when its end location is off-grid.
pub fn separation_direction(
    motion: &MotionData,
    color: Color,
    grid: GridMode,
) -> Option<SeparationDirection> {
    table_direction(grid, motion.end_ori.class(), motion.end_loc, color)
}

/// Directions for both props, `(blue, red)`.
///
/// For `I` the pro prop takes its table direction and the anti prop goes the opposite way,
/// whatever its own table entry says. The tables already pair colors opposite each other at
/// a shared point, so [`BetaPositioner::separate`] gives the same directions with or without
/// the coupling; the difference shows only when the props end at different points.
pub fn separation_directions(
    blue: &MotionData,
    red: &MotionData,
    letter: &str,
    grid: GridMode,
) -> (Option<SeparationDirection>, Option<SeparationDirection>) {
    if letter.trim() == COUPLED_LETTER {
        match (blue.motion_type, red.motion_type) {
            (MotionType::Pro, MotionType::Anti) => {
                let pro = separation_direction(blue, Color::Blue, grid);
                tracing::debug!(?pro, "letter I: red anti opposes blue pro");
                return (pro, pro.map(SeparationDirection::opposite));
            }
            (MotionType::Anti, MotionType::Pro) => {
                let pro = separation_direction(red, Color::Red, grid);
                tracing::debug!(?pro, "letter I: blue anti opposes red pro");
                return (pro.map(SeparationDirection::opposite), pro);
            }
            _ => {}
        }
    }
    (
        separation_direction(blue, Color::Blue, grid),
        separation_direction(red, Color::Red, grid),
    )
}

/// Where a separation came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeparationSource {
    /// Special-placement override.
    Override,
    /// Direction tables and size tiers.
    Algorithmic,
}

/// Nudge applied to one prop.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PropShift {
    /// Direction, when one is known.
    pub direction: Option<SeparationDirection>,
    /// Pixel offset.
    pub offset: Vec2,
}

impl PropShift {
    /// No movement.
    pub const NONE: Self = Self {
        direction: None,
        offset: Vec2::ZERO,
    };
}

/// Beta positioning result for both props.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PropSeparation {
    /// Blue prop nudge.
    pub blue: PropShift,
    /// Red prop nudge.
    pub red: PropShift,
    /// Origin of the result.
    pub source: SeparationSource,
    /// Set when an override entry existed but could not be read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub malformed_override: Option<String>,
}

impl PropSeparation {
    /// Nudge for `color`.
    pub fn shift(&self, color: Color) -> PropShift {
        match color {
            Color::Blue => self.blue,
            Color::Red => self.red,
        }
    }
}

/// Prop separation service ("beta positioning").
#[derive(Clone, Debug)]
pub struct BetaPositioner {
    store: Arc<OverrideStore>,
    prop_type: PropType,
    reference_size: f64,
}

impl BetaPositioner {
    /// Service sizing offsets for `prop_type` against `reference_size` pixels.
    pub fn new(store: Arc<OverrideStore>, prop_type: PropType, reference_size: f64) -> Self {
        Self {
            store,
            prop_type,
            reference_size,
        }
    }

    /// Offset for `direction` with this service's prop and reference size.
    pub fn offset(&self, direction: SeparationDirection) -> Vec2 {
        separation_offset(direction, self.prop_type, self.reference_size)
    }

    /// Separate the props of `pictograph`, or `None` when the letter is not beta-ending
    /// or the props do not overlap.
    pub fn separate(&self, pictograph: &PictographData) -> Option<PropSeparation> {
        if !should_apply(&pictograph.letter) || !detect_overlap(pictograph) {
            return None;
        }
        let (blue, red) = pictograph.pair()?;

        let key = override_key(&pictograph.letter, blue.motion_type, red.motion_type);
        let malformed_override = match self.store.entry(&key) {
            OverrideEntry::Present(o) if o.has_separation() => {
                tracing::debug!(%key, "beta override");
                return Some(self.from_override(&o));
            }
            OverrideEntry::Present(_) | OverrideEntry::Absent => None,
            OverrideEntry::Malformed { reason } => Some(reason),
        };

        let (blue_dir, red_dir) =
            separation_directions(blue, red, &pictograph.letter, pictograph.grid_mode);
        if blue_dir.is_none() || red_dir.is_none() {
            tracing::warn!(
                letter = %pictograph.letter,
                grid = %pictograph.grid_mode,
                end_loc = %blue.end_loc,
                "no separation entry for off-grid location"
            );
        }
        let shift = |dir: Option<SeparationDirection>| PropShift {
            direction: dir,
            offset: dir.map_or(Vec2::ZERO, |d| self.offset(d)),
        };
        tracing::debug!(letter = %pictograph.letter, ?blue_dir, ?red_dir, "beta separation");
        Some(PropSeparation {
            blue: shift(blue_dir),
            red: shift(red_dir),
            source: SeparationSource::Algorithmic,
            malformed_override,
        })
    }

    fn from_override(&self, o: &PlacementOverride) -> PropSeparation {
        let shift = |color: Color| match o.prop(color) {
            None => PropShift::NONE,
            Some(p) => PropShift {
                direction: p.direction,
                offset: match (p.offset, p.direction) {
                    (Some([x, y]), _) => Vec2::new(x, y),
                    (None, Some(d)) => self.offset(d),
                    (None, None) => Vec2::ZERO,
                },
            },
        };
        PropSeparation {
            blue: shift(Color::Blue),
            red: shift(Color::Red),
            source: SeparationSource::Override,
            malformed_override: None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/beta/separation.rs"]
mod tests;
