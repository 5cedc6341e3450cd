use std::{collections::HashMap, sync::Arc};

use crate::{
    foundation::core::Vec2,
    motion::model::MotionType,
    placement::overrides::{OverrideEntry, OverrideStore, override_key},
    turns::tuple::TurnsTuple,
};

/// Where an arrow offset came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentSource {
    /// Special-placement override.
    Override,
    /// Renderer-supplied default table.
    Default,
    /// Nothing matched.
    Zero,
}

/// Resolved arrow offset.
#[derive(Clone, Debug, PartialEq)]
pub struct Adjustment {
    /// Pixel offset.
    pub offset: Vec2,
    /// Origin of the offset.
    pub source: AdjustmentSource,
    /// Set when an override entry existed but could not be read.
    pub malformed: Option<String>,
}

/// Arrow offsets from special placements, with a default table behind them.
#[derive(Clone, Debug)]
pub struct AdjustmentLookup {
    store: Arc<OverrideStore>,
    defaults: HashMap<TurnsTuple, Vec2>,
}

impl AdjustmentLookup {
    /// Lookup over `store` with zero defaults.
    pub fn new(store: Arc<OverrideStore>) -> Self {
        Self {
            store,
            defaults: HashMap::new(),
        }
    }

    /// Use `defaults` when no override matches.
    pub fn with_defaults(mut self, defaults: HashMap<TurnsTuple, Vec2>) -> Self {
        self.defaults = defaults;
        self
    }

    /// Backing override store.
    pub fn store(&self) -> &Arc<OverrideStore> {
        &self.store
    }

    /// Offset for the arrow whose rule is keyed by `tuple`.
    pub fn resolve(
        &self,
        tuple: &TurnsTuple,
        letter: &str,
        pair: (MotionType, MotionType),
    ) -> Adjustment {
        let key = override_key(letter, pair.0, pair.1);
        let malformed = match self.store.entry(&key) {
            OverrideEntry::Present(o) => {
                if let Some(offset) = o.arrow_adjustment(tuple) {
                    tracing::debug!(%key, %tuple, ?offset, "arrow adjustment override");
                    return Adjustment {
                        offset,
                        source: AdjustmentSource::Override,
                        malformed: None,
                    };
                }
                None
            }
            OverrideEntry::Absent => None,
            OverrideEntry::Malformed { reason } => Some(reason),
        };
        match self.defaults.get(tuple) {
            Some(&offset) => Adjustment {
                offset,
                source: AdjustmentSource::Default,
                malformed,
            },
            None => Adjustment {
                offset: Vec2::ZERO,
                source: AdjustmentSource::Zero,
                malformed,
            },
        }
    }

    /// Offset only; never fails.
    pub fn lookup_offset(
        &self,
        tuple: &TurnsTuple,
        letter: &str,
        pair: (MotionType, MotionType),
    ) -> Vec2 {
        self.resolve(tuple, letter, pair).offset
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/adjustment.rs"]
mod tests;
