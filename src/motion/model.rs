use std::str::FromStr;

use crate::foundation::error::{TkaError, TkaResult};

macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $token:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[derive(serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical lowercase token used in JSON and override keys.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = TkaError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($token => Ok($name::$variant),)+
                    other => Err(TkaError::parse(format!(
                        concat!("unknown ", stringify!($name), " '{}'"),
                        other
                    ))),
                }
            }
        }
    };
}

token_enum! {
    /// Kinematic category of a prop's movement.
    MotionType {
        /// Prop rotates with the handpath.
        Pro => "pro",
        /// Prop rotates against the handpath.
        Anti => "anti",
        /// Hand stays put.
        Static => "static",
        /// Hand crosses through the center.
        Dash => "dash",
        /// Prop travels without rotating relative to the handpath.
        Float => "float",
    }
}

token_enum! {
    /// Direction the prop spins in.
    RotationDirection {
        /// Clockwise.
        Clockwise => "cw",
        /// Counter-clockwise.
        CounterClockwise => "ccw",
        /// No spin.
        NoRotation => "no_rot",
    }
}

token_enum! {
    /// 8-point compass location on the grid.
    Location {
        /// North.
        N => "n",
        /// East.
        E => "e",
        /// South.
        S => "s",
        /// West.
        W => "w",
        /// North-east.
        NE => "ne",
        /// South-east.
        SE => "se",
        /// South-west.
        SW => "sw",
        /// North-west.
        NW => "nw",
    }
}

token_enum! {
    /// Which way the prop's head points relative to the grid center.
    Orientation {
        /// Head toward the center (radial).
        In => "in",
        /// Head away from the center (radial).
        Out => "out",
        /// Head turned clockwise (nonradial).
        Clock => "clock",
        /// Head turned counter-clockwise (nonradial).
        Counter => "counter",
    }
}

token_enum! {
    /// Diamond uses the cardinal hand points, Box the diagonal ones.
    GridMode {
        /// Cardinal points.
        Diamond => "diamond",
        /// Diagonal points.
        Box => "box",
    }
}

token_enum! {
    /// Identity tag of a tracked prop.
    Color {
        /// Primary prop.
        Blue => "blue",
        /// Secondary prop.
        Red => "red",
    }
}

/// Radial (`in`/`out`) versus nonradial (`clock`/`counter`) orientation class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrientationClass {
    /// `in` / `out`.
    Radial,
    /// `clock` / `counter`.
    Nonradial,
}

impl MotionType {
    /// Pro, anti and float motions travel around the grid (shifts).
    pub fn is_shift(self) -> bool {
        matches!(self, Self::Pro | Self::Anti | Self::Float)
    }
}

impl Location {
    /// True for N/E/S/W.
    pub fn is_cardinal(self) -> bool {
        matches!(self, Self::N | Self::E | Self::S | Self::W)
    }
}

impl Orientation {
    /// Radial/nonradial class.
    pub fn class(self) -> OrientationClass {
        match self {
            Self::In | Self::Out => OrientationClass::Radial,
            Self::Clock | Self::Counter => OrientationClass::Nonradial,
        }
    }

    /// `in`↔`out`, `clock`↔`counter`.
    pub fn flipped(self) -> Self {
        match self {
            Self::In => Self::Out,
            Self::Out => Self::In,
            Self::Clock => Self::Counter,
            Self::Counter => Self::Clock,
        }
    }
}

impl GridMode {
    /// Grid mode implied by a location.
    pub fn of(location: Location) -> Self {
        if location.is_cardinal() {
            Self::Diamond
        } else {
            Self::Box
        }
    }
}

impl Color {
    /// The other prop.
    pub fn other(self) -> Self {
        match self {
            Self::Blue => Self::Red,
            Self::Red => Self::Blue,
        }
    }
}

/// Turn count, stored as half turns so only `0, 0.5, .., 3` are representable.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize,
    serde::Deserialize,
)]
#[serde(into = "f64", try_from = "f64")]
pub struct Turns(u8);

impl Turns {
    /// No turns.
    pub const ZERO: Self = Self(0);
    /// Largest supported value (3 turns).
    pub const MAX_HALF_TURNS: u8 = 6;

    /// Build from a number of half turns (`0..=6`).
    pub fn from_half_turns(half: u8) -> TkaResult<Self> {
        if half > Self::MAX_HALF_TURNS {
            return Err(TkaError::validation(format!(
                "turns must be within 0..=3 (got {} half turns)",
                half
            )));
        }
        Ok(Self(half))
    }

    /// Build from a decimal turn count; only multiples of 0.5 in `0..=3` are accepted.
    pub fn from_f64(turns: f64) -> TkaResult<Self> {
        let doubled = turns * 2.0;
        if !doubled.is_finite() || doubled.fract() != 0.0 || !(0.0..=6.0).contains(&doubled) {
            return Err(TkaError::validation(format!(
                "turns must be one of 0, 0.5, 1, 1.5, 2, 2.5, 3 (got {turns})"
            )));
        }
        Ok(Self(doubled as u8))
    }

    /// Half-turn count.
    pub fn half_turns(self) -> u8 {
        self.0
    }

    /// Decimal value.
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 2.0
    }

    /// Integer part; drives orientation parity.
    pub fn whole(self) -> u8 {
        self.0 / 2
    }

    /// True for `0`.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<Turns> for f64 {
    fn from(value: Turns) -> Self {
        value.as_f64()
    }
}

impl TryFrom<f64> for Turns {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value).map_err(|e| e.to_string())
    }
}

impl std::fmt::Display for Turns {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 % 2 == 0 {
            write!(f, "{}", self.0 / 2)
        } else {
            write!(f, "{}.5", self.0 / 2)
        }
    }
}

impl FromStr for Turns {
    type Err = TkaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let v: f64 = s
            .trim()
            .parse()
            .map_err(|_| TkaError::parse(format!("invalid turns '{s}'")))?;
        Self::from_f64(v).map_err(|e| TkaError::parse(e.to_string()))
    }
}

/// One prop's movement for a single beat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct MotionData {
    /// Kinematic category.
    pub motion_type: MotionType,
    /// Prop spin direction.
    #[serde(alias = "prop_rot_dir")]
    pub rotation_direction: RotationDirection,
    /// Start hand location.
    pub start_loc: Location,
    /// End hand location.
    pub end_loc: Location,
    /// Prop turns over the beat.
    #[serde(default)]
    pub turns: Turns,
    /// Start orientation.
    pub start_ori: Orientation,
    /// End orientation.
    pub end_ori: Orientation,
}

impl MotionData {
    /// Grid mode implied by the end location.
    pub fn grid_mode(&self) -> GridMode {
        GridMode::of(self.end_loc)
    }
}

/// One beat: a letter and the two tracked props' motions.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PictographData {
    /// Letter glyph, e.g. `"A"`, `"W-"`, `"Λ-"`.
    pub letter: String,
    /// Primary (blue) prop motion.
    #[serde(default)]
    pub blue: Option<MotionData>,
    /// Secondary (red) prop motion.
    #[serde(default)]
    pub red: Option<MotionData>,
    /// Grid the pictograph is drawn on.
    pub grid_mode: GridMode,
}

impl PictographData {
    /// Build a pictograph, deriving the grid mode from the first present motion.
    pub fn new(
        letter: impl Into<String>,
        blue: Option<MotionData>,
        red: Option<MotionData>,
    ) -> Self {
        let grid_mode = blue
            .or(red)
            .map(|m| m.grid_mode())
            .unwrap_or(GridMode::Diamond);
        Self {
            letter: letter.into(),
            blue,
            red,
            grid_mode,
        }
    }

    /// Motion for `color`, if present.
    pub fn motion(&self, color: Color) -> Option<&MotionData> {
        match color {
            Color::Blue => self.blue.as_ref(),
            Color::Red => self.red.as_ref(),
        }
    }

    /// Both motions, or `None` when either is absent.
    pub fn pair(&self) -> Option<(&MotionData, &MotionData)> {
        Some((self.blue.as_ref()?, self.red.as_ref()?))
    }

    /// Present motions with their colors, blue first.
    pub fn motions(&self) -> impl Iterator<Item = (Color, &MotionData)> {
        [(Color::Blue, self.blue.as_ref()), (Color::Red, self.red.as_ref())]
            .into_iter()
            .filter_map(|(c, m)| m.map(|m| (c, m)))
    }

    /// Check that the letter is non-empty and every present motion ends on this grid.
    pub fn validate(&self) -> TkaResult<()> {
        if self.letter.trim().is_empty() {
            return Err(TkaError::validation("pictograph letter must be non-empty"));
        }
        for (color, motion) in self.motions() {
            if motion.grid_mode() != self.grid_mode {
                return Err(TkaError::validation(format!(
                    "{color} motion ends at '{}' which is not on the {} grid",
                    motion.end_loc, self.grid_mode
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/model.rs"]
mod tests;
