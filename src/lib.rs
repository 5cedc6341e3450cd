//! TKA pictograph positioning engine.
//!
//! A pictograph is one beat of a flow-arts sequence: a letter plus the motions of two props
//! (blue and red) on a compass grid. This crate turns that symbolic description into render
//! geometry: where each arrow sits, how it is rotated, how far it is nudged, and how two props
//! that finish on the same hand point are pushed apart.
//!
//! # Pipeline overview
//!
//! 1. **Classify**: `letter -> LetterType` (six closed families)
//! 2. **Key**: `PictographData -> TurnsTuple` plus its mirrored form for the other prop
//! 3. **Place**: rotation tables, hand points and arrow adjustments per prop
//! 4. **Separate**: beta positioning for overlapping props on beta-ending letters
//!
//! Every step is a pure function of its input and an immutable [`OverrideStore`] snapshot,
//! so a [`Positioner`] can be shared across threads. [`Positioner::position_sequence`]
//! places whole sequences in parallel.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No panics on data**: unknown letters are errors, everything else degrades to a neutral
//!   placement and is reported through [`PlacementDiagnostic`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod beta;
mod config;
mod foundation;
mod letter;
mod motion;
mod placement;
mod turns;

pub use beta::directions::{SeparationDirection, separation_offset, table_direction};
pub use beta::separation::{
    BETA_ENDING_LETTERS, BetaPositioner, PropSeparation, PropShift, SeparationSource,
    detect_overlap, separation_direction, separation_directions, should_apply,
};
pub use config::engine::EngineConfig;
pub use foundation::core::{GridGeometry, Point, RotationAngle, Vec2};
pub use foundation::error::{TkaError, TkaResult};
pub use letter::classify::{LetterType, classify};
pub use motion::model::{
    Color, GridMode, Location, MotionData, MotionType, Orientation, OrientationClass,
    PictographData, RotationDirection, Turns,
};
pub use motion::prop::{PropSizeClass, PropType};
pub use placement::adjustment::{Adjustment, AdjustmentLookup, AdjustmentSource};
pub use placement::orchestrator::{
    PlacementDiagnostic, PositionedArrow, PositionedPictograph, Positioner,
};
pub use placement::overrides::{
    EntryTable, JsonFileSource, OverrideEntry, OverrideSource, OverrideStore, OverrideTable,
    PlacementOverride, PropOverride, StaticSource, override_key,
};
pub use placement::rotation::{compute_end_orientation, compute_rotation, rotation_lookup};
pub use turns::generator::{LAMBDA_DASH, generate};
pub use turns::mirrored::{generate_mirrored, mirror};
pub use turns::tuple::{RotationToken, TurnsField, TurnsTuple};
