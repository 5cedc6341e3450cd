use std::f64::consts::FRAC_1_SQRT_2;

use crate::motion::model::Location;

pub use kurbo::{Point, Vec2};

/// Prop rotation angle, always one of 0°, 90°, 180° or 270°.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(into = "u16", try_from = "u16")]
pub struct RotationAngle(u8); // quarter turns, 0..4

impl RotationAngle {
    /// 0°, also the neutral value for degenerate lookups.
    pub const DEG_0: Self = Self(0);
    /// 90°.
    pub const DEG_90: Self = Self(1);
    /// 180°.
    pub const DEG_180: Self = Self(2);
    /// 270°.
    pub const DEG_270: Self = Self(3);

    /// Build from a (possibly negative or wrapping) number of quarter turns.
    pub fn from_quarter_turns(quarters: i32) -> Self {
        Self(quarters.rem_euclid(4) as u8)
    }

    /// Angle in whole degrees.
    pub fn degrees(self) -> u16 {
        u16::from(self.0) * 90
    }

    /// Angle in radians, for renderers building an affine transform.
    pub fn radians(self) -> f64 {
        f64::from(self.degrees()).to_radians()
    }

    /// Rotate by `quarters` quarter turns (positive = clockwise on screen).
    pub fn turned(self, quarters: i32) -> Self {
        Self::from_quarter_turns(i32::from(self.0) + quarters)
    }
}

impl From<RotationAngle> for u16 {
    fn from(value: RotationAngle) -> Self {
        value.degrees()
    }
}

impl TryFrom<u16> for RotationAngle {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::DEG_0),
            90 => Ok(Self::DEG_90),
            180 => Ok(Self::DEG_180),
            270 => Ok(Self::DEG_270),
            other => Err(format!("rotation angle must be 0, 90, 180 or 270 (got {other})")),
        }
    }
}

impl std::fmt::Display for RotationAngle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Pixel geometry of the compass grid a pictograph is drawn on.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridGeometry {
    /// Grid center in scene pixels.
    #[serde(default = "default_grid_center")]
    pub center: Point,
    /// Distance from the center to each hand point.
    #[serde(default = "default_hand_radius")]
    pub hand_radius: f64,
}

fn default_grid_center() -> Point {
    Point::new(475.0, 475.0)
}

fn default_hand_radius() -> f64 {
    150.0
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            center: default_grid_center(),
            hand_radius: default_hand_radius(),
        }
    }
}

impl GridGeometry {
    /// Hand point for `location`. Screen coordinates: +x right, +y down.
    pub fn point_for(self, location: Location) -> Point {
        let r = self.hand_radius;
        let d = r * FRAC_1_SQRT_2;
        let delta = match location {
            Location::N => Vec2::new(0.0, -r),
            Location::E => Vec2::new(r, 0.0),
            Location::S => Vec2::new(0.0, r),
            Location::W => Vec2::new(-r, 0.0),
            Location::NE => Vec2::new(d, -d),
            Location::SE => Vec2::new(d, d),
            Location::SW => Vec2::new(-d, d),
            Location::NW => Vec2::new(-d, -d),
        };
        self.center + delta
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
