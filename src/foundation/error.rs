/// Convenience result type used across the engine.
pub type TkaResult<T> = Result<T, TkaError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum TkaError {
    /// Letter glyph is not part of the classification table.
    #[error("unknown letter: {0}")]
    UnknownLetter(String),

    /// Invalid caller-provided motion or pictograph data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed turns-tuple text or enum token.
    #[error("parse error: {0}")]
    Parse(String),

    /// Errors while loading engine configuration or override tables.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TkaError {
    /// Build a [`TkaError::UnknownLetter`] value.
    pub fn unknown_letter(letter: impl Into<String>) -> Self {
        Self::UnknownLetter(letter.into())
    }

    /// Build a [`TkaError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TkaError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`TkaError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
