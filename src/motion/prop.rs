/// Visual prop shape.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum PropType {
    #[default]
    Staff,
    Simplestaff,
    Bigstaff,
    Club,
    Buugeng,
    Bigbuugeng,
    Fractalgeng,
    Eightrings,
    Bigeightrings,
    Fan,
    Bigfan,
    Triad,
    Bigtriad,
    Minihoop,
    Bighoop,
    Doublestar,
    Bigdoublestar,
    Quiad,
    Sword,
    Guitar,
    Ukulele,
    Chicken,
    Triquetra,
    Hand,
}

/// Offset tier a prop shape belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropSizeClass {
    /// Divisor 60.
    Large,
    /// Divisor 50.
    Medium,
    /// Divisor 45.
    Small,
}

impl PropSizeClass {
    /// Reference size is divided by this to get the separation distance.
    pub fn divisor(self) -> f64 {
        match self {
            Self::Large => 60.0,
            Self::Medium => 50.0,
            Self::Small => 45.0,
        }
    }
}

impl PropType {
    /// Offset tier for this shape.
    pub fn size_class(self) -> PropSizeClass {
        use PropType::*;
        match self {
            Club | Eightrings | Bigeightrings | Fan | Bigfan | Minihoop | Triad | Bigtriad
            | Doublestar | Bigdoublestar | Quiad | Sword | Guitar | Ukulele | Chicken => {
                PropSizeClass::Large
            }
            Bighoop | Triquetra | Hand => PropSizeClass::Medium,
            Staff | Simplestaff | Bigstaff | Buugeng | Bigbuugeng | Fractalgeng => {
                PropSizeClass::Small
            }
        }
    }
}

impl std::str::FromStr for PropType {
    type Err = crate::foundation::error::TkaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let quoted = serde_json::Value::String(s.trim().to_ascii_lowercase());
        serde_json::from_value(quoted).map_err(|_| {
            crate::foundation::error::TkaError::parse(format!("unknown prop type '{s}'"))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/prop.rs"]
mod tests;
