use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use crate::{
    foundation::{
        core::GridGeometry,
        error::{TkaError, TkaResult},
    },
    motion::prop::PropType,
};

/// Engine settings loaded from JSON; every field has a default.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EngineConfig {
    /// Scene width in pixels that separation offsets scale with.
    #[serde(default = "default_reference_size")]
    pub reference_size: f64,
    /// Prop drawn for both colors.
    #[serde(default)]
    pub prop_type: PropType,
    /// Hand-point geometry.
    #[serde(default)]
    pub grid: GridGeometry,
    /// Special-placement JSON document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<PathBuf>,
    /// Worker threads for batch positioning; `None` uses rayon's default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,
}

fn default_reference_size() -> f64 {
    950.0
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reference_size: default_reference_size(),
            prop_type: PropType::default(),
            grid: GridGeometry::default(),
            overrides: None,
            threads: None,
        }
    }
}

impl EngineConfig {
    /// Parse engine settings from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> TkaResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| TkaError::config(format!("parse engine config JSON: {e}")))
    }

    /// Parse engine settings from a file. A relative `overrides` path is resolved against the
    /// file's directory.
    pub fn from_path(path: impl AsRef<Path>) -> TkaResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            TkaError::config(format!("open engine config '{}': {e}", path.display()))
        })?;
        let mut cfg = Self::from_reader(BufReader::new(f))?;
        if let (Some(overrides), Some(dir)) = (cfg.overrides.as_mut(), path.parent())
            && overrides.is_relative()
        {
            *overrides = dir.join(&*overrides);
        }
        Ok(cfg)
    }

    /// Reject sizes that cannot produce finite geometry.
    pub fn validate(&self) -> TkaResult<()> {
        if !self.reference_size.is_finite() || self.reference_size <= 0.0 {
            return Err(TkaError::validation(format!(
                "reference_size must be finite and > 0 (got {})",
                self.reference_size
            )));
        }
        if !self.grid.hand_radius.is_finite() || self.grid.hand_radius <= 0.0 {
            return Err(TkaError::validation(format!(
                "grid.hand_radius must be finite and > 0 (got {})",
                self.grid.hand_radius
            )));
        }
        if !self.grid.center.x.is_finite() || !self.grid.center.y.is_finite() {
            return Err(TkaError::validation("grid.center must be finite"));
        }
        if self.threads == Some(0) {
            return Err(TkaError::validation("threads must be >= 1 when set"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/engine.rs"]
mod tests;
