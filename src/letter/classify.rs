use crate::foundation::error::{TkaError, TkaResult};

/// Static letter category; governs turns-tuple layout and mirroring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum LetterType {
    /// Dual-shift: both props travel (`A`..`V`).
    Type1,
    /// Shift: one prop travels, the other is static.
    Type2,
    /// Cross-shift: one prop travels, the other dashes.
    Type3,
    /// Dash: one prop dashes, the other is static.
    Type4,
    /// Dual-dash: both props dash.
    Type5,
    /// Static: both props stay put.
    Type6,
}

const TYPE1: &[&str] = &[
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V",
];
const TYPE2: &[&str] = &["W", "X", "Y", "Z", "Σ", "Δ", "θ", "Ω"];
const TYPE3: &[&str] = &["W-", "X-", "Y-", "Z-", "Σ-", "Δ-", "θ-", "Ω-"];
const TYPE4: &[&str] = &["Φ", "Ψ", "Λ"];
const TYPE5: &[&str] = &["Φ-", "Ψ-", "Λ-"];
const TYPE6: &[&str] = &["α", "β", "Γ"];

impl LetterType {
    /// Every letter type.
    pub const ALL: [LetterType; 6] = [
        Self::Type1,
        Self::Type2,
        Self::Type3,
        Self::Type4,
        Self::Type5,
        Self::Type6,
    ];

    /// Letters belonging to this type.
    pub fn letters(self) -> &'static [&'static str] {
        match self {
            Self::Type1 => TYPE1,
            Self::Type2 => TYPE2,
            Self::Type3 => TYPE3,
            Self::Type4 => TYPE4,
            Self::Type5 => TYPE5,
            Self::Type6 => TYPE6,
        }
    }

    /// Human-readable family name.
    pub fn description(self) -> &'static str {
        match self {
            Self::Type1 => "Dual-Shift",
            Self::Type2 => "Shift",
            Self::Type3 => "Cross-Shift",
            Self::Type4 => "Dash",
            Self::Type5 => "Dual-Dash",
            Self::Type6 => "Static",
        }
    }
}

impl std::fmt::Display for LetterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Classify a letter glyph. Surrounding whitespace is ignored; unknown glyphs fail.
pub fn classify(letter: &str) -> TkaResult<LetterType> {
    let letter = letter.trim();
    LetterType::ALL
        .into_iter()
        .find(|t| t.letters().iter().any(|l| *l == letter))
        .ok_or_else(|| TkaError::unknown_letter(letter))
}

#[cfg(test)]
#[path = "../../tests/unit/letter/classify.rs"]
mod tests;
