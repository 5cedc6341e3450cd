use std::{collections::HashMap, sync::Arc};

use rayon::prelude::*;

use crate::{
    beta::separation::{BetaPositioner, PropSeparation},
    config::engine::EngineConfig,
    foundation::{
        core::{Point, RotationAngle, Vec2},
        error::{TkaError, TkaResult},
    },
    letter::classify::{LetterType, classify},
    motion::model::{Color, GridMode, Location, MotionData, Orientation, PictographData},
    placement::{
        adjustment::{AdjustmentLookup, AdjustmentSource},
        overrides::{OverrideStore, override_key},
        rotation::{compute_rotation, rotation_lookup},
    },
    turns::{generator::generate, mirrored::generate_mirrored, tuple::TurnsTuple},
};

/// Something the orchestrator had to work around while placing a pictograph.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlacementDiagnostic {
    /// No motion for this prop; its arrow was skipped.
    MissingMotion {
        /// Prop without a motion.
        color: Color,
    },
    /// A special-placement entry exists but could not be read.
    MalformedOverride {
        /// Store key.
        key: String,
        /// Deserialization failure.
        reason: String,
    },
    /// The end location/orientation has no table entry; `0°` was used.
    DegenerateGeometry {
        /// Affected prop.
        color: Color,
        /// End location.
        location: Location,
        /// End orientation.
        orientation: Orientation,
        /// Grid the lookup used.
        grid: GridMode,
    },
    /// No turns tuple could be built, so arrow offsets are zero.
    TurnsUnavailable {
        /// Why.
        reason: String,
    },
}

/// Placement of one arrow.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PositionedArrow {
    /// End hand location.
    pub location: Location,
    /// Hand point in scene pixels.
    pub point: Point,
    /// Prop rotation.
    pub rotation: RotationAngle,
    /// Arrow nudge in pixels.
    pub offset: Vec2,
    /// Origin of `offset`.
    pub offset_source: AdjustmentSource,
}

/// Render-ready geometry for one beat.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PositionedPictograph {
    /// Letter glyph.
    pub letter: String,
    /// Letter family.
    pub letter_type: LetterType,
    /// Grid the beat is drawn on.
    pub grid_mode: GridMode,
    /// Rule key for the blue arrow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turns: Option<TurnsTuple>,
    /// Rule key for the red arrow when it differs from `turns`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirrored_turns: Option<TurnsTuple>,
    /// Blue arrow; absent when the blue motion is.
    pub blue: Option<PositionedArrow>,
    /// Red arrow; absent when the red motion is.
    pub red: Option<PositionedArrow>,
    /// Prop separation, for beta-ending letters whose props overlap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separation: Option<PropSeparation>,
    /// Degraded paths taken while placing.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<PlacementDiagnostic>,
}

impl PositionedPictograph {
    /// Arrow for `color`.
    pub fn arrow(&self, color: Color) -> Option<&PositionedArrow> {
        match color {
            Color::Blue => self.blue.as_ref(),
            Color::Red => self.red.as_ref(),
        }
    }
}

/// Positioning orchestrator: turns a pictograph into arrow and prop geometry.
///
/// Holds only immutable state plus the shared [`OverrideStore`], so one instance can serve
/// many threads.
#[derive(Clone, Debug)]
pub struct Positioner {
    config: EngineConfig,
    adjustments: AdjustmentLookup,
    beta: BetaPositioner,
}

impl Positioner {
    /// Positioner over `store` with `config`'s prop and geometry.
    pub fn new(config: EngineConfig, store: Arc<OverrideStore>) -> Self {
        let beta = BetaPositioner::new(store.clone(), config.prop_type, config.reference_size);
        Self {
            adjustments: AdjustmentLookup::new(store),
            beta,
            config,
        }
    }

    /// Positioner whose override store reads `config.overrides`, or an empty one.
    pub fn from_config(config: EngineConfig) -> TkaResult<Self> {
        config.validate()?;
        let store = match &config.overrides {
            Some(path) => OverrideStore::from_path(path),
            None => OverrideStore::empty(),
        };
        Ok(Self::new(config, Arc::new(store)))
    }

    /// Use `defaults` for arrow offsets that no override covers.
    pub fn with_default_adjustments(mut self, defaults: HashMap<TurnsTuple, Vec2>) -> Self {
        self.adjustments = self.adjustments.with_defaults(defaults);
        self
    }

    /// Engine settings.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Shared override store.
    pub fn store(&self) -> &Arc<OverrideStore> {
        self.adjustments.store()
    }

    /// Place both arrows of `pictograph` and, when needed, separate its props.
    ///
    /// Fails only for an unknown letter. Every other problem degrades to a neutral value
    /// and is listed in [`PositionedPictograph::diagnostics`].
    #[tracing::instrument(skip(self, pictograph), fields(letter = %pictograph.letter))]
    pub fn position_all(&self, pictograph: &PictographData) -> TkaResult<PositionedPictograph> {
        let letter_type = classify(&pictograph.letter)?;
        let mut diagnostics = Vec::new();

        let (turns, mirrored_turns) = match pictograph.pair() {
            Some((_, red)) => match tuples(pictograph, red) {
                Ok(t) => t,
                Err(e) => {
                    tracing::warn!(error = %e, "turns tuple unavailable");
                    diagnostics.push(PlacementDiagnostic::TurnsUnavailable {
                        reason: e.to_string(),
                    });
                    (None, None)
                }
            },
            None => (None, None),
        };

        let mut place = |color: Color, tuple: Option<&TurnsTuple>| {
            let Some(motion) = pictograph.motion(color) else {
                tracing::debug!(%color, "no motion, skipping arrow");
                diagnostics.push(PlacementDiagnostic::MissingMotion { color });
                return None;
            };
            Some(self.place_arrow(pictograph, color, motion, tuple, &mut diagnostics))
        };
        let blue = place(Color::Blue, turns.as_ref());
        let red = place(Color::Red, mirrored_turns.as_ref().or(turns.as_ref()));

        let separation = self.beta.separate(pictograph);
        if let Some(reason) = separation.as_ref().and_then(|s| s.malformed_override.clone())
            && let Some((b, r)) = pictograph.pair()
        {
            push_unique(
                &mut diagnostics,
                PlacementDiagnostic::MalformedOverride {
                    key: override_key(&pictograph.letter, b.motion_type, r.motion_type),
                    reason,
                },
            );
        }

        Ok(PositionedPictograph {
            letter: pictograph.letter.clone(),
            letter_type,
            grid_mode: pictograph.grid_mode,
            turns,
            mirrored_turns,
            blue,
            red,
            separation,
            diagnostics,
        })
    }

    /// [`Self::position_all`] over a whole sequence, beats in parallel, results in input order.
    #[tracing::instrument(skip(self, beats), fields(beats = beats.len()))]
    pub fn position_sequence(
        &self,
        beats: &[PictographData],
    ) -> TkaResult<Vec<PositionedPictograph>> {
        let pool = build_thread_pool(self.config.threads)?;
        pool.install(|| {
            beats
                .par_iter()
                .map(|p| self.position_all(p))
                .collect::<TkaResult<Vec<_>>>()
        })
    }

    fn place_arrow(
        &self,
        pictograph: &PictographData,
        color: Color,
        motion: &MotionData,
        tuple: Option<&TurnsTuple>,
        diagnostics: &mut Vec<PlacementDiagnostic>,
    ) -> PositionedArrow {
        let grid = pictograph.grid_mode;
        let rotation = match rotation_lookup(motion.end_ori, motion.end_loc, grid) {
            Some(angle) => angle,
            None => {
                diagnostics.push(PlacementDiagnostic::DegenerateGeometry {
                    color,
                    location: motion.end_loc,
                    orientation: motion.end_ori,
                    grid,
                });
                compute_rotation(motion, grid)
            }
        };

        let (offset, offset_source) = match (tuple, pictograph.pair()) {
            (Some(tuple), Some((b, r))) => {
                let adj = self.adjustments.resolve(
                    tuple,
                    &pictograph.letter,
                    (b.motion_type, r.motion_type),
                );
                if let Some(reason) = adj.malformed {
                    push_unique(
                        diagnostics,
                        PlacementDiagnostic::MalformedOverride {
                            key: override_key(&pictograph.letter, b.motion_type, r.motion_type),
                            reason,
                        },
                    );
                }
                (adj.offset, adj.source)
            }
            _ => (Vec2::ZERO, AdjustmentSource::Zero),
        };

        PositionedArrow {
            location: motion.end_loc,
            point: self.config.grid.point_for(motion.end_loc),
            rotation,
            offset,
            offset_source,
        }
    }
}

// Plain tuple plus the red arrow's mirrored tuple.
fn tuples(
    pictograph: &PictographData,
    red: &MotionData,
) -> TkaResult<(Option<TurnsTuple>, Option<TurnsTuple>)> {
    let plain = generate(pictograph)?;
    let mirrored = generate_mirrored(red, pictograph)?.filter(|m| *m != plain);
    Ok((Some(plain), mirrored))
}

fn push_unique(diagnostics: &mut Vec<PlacementDiagnostic>, d: PlacementDiagnostic) {
    if !diagnostics.contains(&d) {
        diagnostics.push(d);
    }
}

fn build_thread_pool(threads: Option<usize>) -> TkaResult<rayon::ThreadPool> {
    if threads == Some(0) {
        return Err(TkaError::validation("threads must be >= 1 when set"));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| TkaError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/placement/orchestrator.rs"]
mod tests;
