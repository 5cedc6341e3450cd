use std::{
    collections::BTreeMap,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    sync::{Arc, OnceLock},
};

use arc_swap::ArcSwap;
use serde::Deserialize as _;

use crate::{
    beta::directions::SeparationDirection,
    foundation::core::Vec2,
    foundation::error::{TkaError, TkaResult},
    motion::model::{Color, MotionType},
    turns::tuple::TurnsTuple,
};

/// Raw override payloads keyed by `"{letter}_{motionTypeA}_{motionTypeB}"`.
pub type OverrideTable = BTreeMap<String, serde_json::Value>;

/// Typed entries, resolved once per load. Holds only `Present` and `Malformed` values.
pub type EntryTable = BTreeMap<String, OverrideEntry>;

/// Key used by the special-placement table.
pub fn override_key(letter: &str, blue: MotionType, red: MotionType) -> String {
    format!("{}_{blue}_{red}", letter.trim())
}

/// External collaborator that owns the special-placement document.
pub trait OverrideSource: Send + Sync {
    /// Read the full table. Called once on first use and again on every reload.
    fn load(&self) -> TkaResult<OverrideTable>;

    /// Short label for logs.
    fn describe(&self) -> String;
}

/// Special placements stored in a JSON file.
#[derive(Clone, Debug)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Source backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OverrideSource for JsonFileSource {
    fn load(&self) -> TkaResult<OverrideTable> {
        let f = File::open(&self.path).map_err(|e| {
            TkaError::config(format!(
                "open special placements '{}': {e}",
                self.path.display()
            ))
        })?;
        serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            TkaError::config(format!(
                "parse special placements '{}': {e}",
                self.path.display()
            ))
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory special placements, for embedding and tests.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    table: OverrideTable,
}

impl StaticSource {
    /// Source serving `table`.
    pub fn new(table: OverrideTable) -> Self {
        Self { table }
    }

    /// Parse a JSON object document.
    pub fn from_json_str(json: &str) -> TkaResult<Self> {
        let table = serde_json::from_str(json)
            .map_err(|e| TkaError::config(format!("parse special placements: {e}")))?;
        Ok(Self { table })
    }
}

impl OverrideSource for StaticSource {
    fn load(&self) -> TkaResult<OverrideTable> {
        Ok(self.table.clone())
    }

    fn describe(&self) -> String {
        format!("static table ({} entries)", self.table.len())
    }
}

/// Manual placement for one prop.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PropOverride {
    /// Separation direction to report.
    #[serde(default)]
    pub direction: Option<SeparationDirection>,
    /// Exact pixel offset `[x, y]`.
    #[serde(default)]
    pub offset: Option<[f64; 2]>,
}

/// Typed view of one special-placement entry.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlacementOverride {
    /// Arrow offsets keyed by turns-tuple text, e.g. `"(0, 1)"`.
    #[serde(default)]
    pub arrow_adjustments: BTreeMap<String, [f64; 2]>,
    /// Blue prop separation override.
    #[serde(default)]
    pub blue: Option<PropOverride>,
    /// Red prop separation override.
    #[serde(default)]
    pub red: Option<PropOverride>,
}

impl PlacementOverride {
    /// Arrow offset stored for `tuple`. Keys are compared structurally, so spacing in the
    /// document does not matter; keys that do not parse are ignored.
    pub fn arrow_adjustment(&self, tuple: &TurnsTuple) -> Option<Vec2> {
        self.arrow_adjustments.iter().find_map(|(k, [x, y])| {
            match TurnsTuple::parse(k) {
                Ok(t) if t == *tuple => Some(Vec2::new(*x, *y)),
                Ok(_) => None,
                Err(e) => {
                    tracing::warn!(key = %k, error = %e, "ignoring malformed arrow adjustment key");
                    None
                }
            }
        })
    }

    /// Separation override for `color`.
    pub fn prop(&self, color: Color) -> Option<&PropOverride> {
        match color {
            Color::Blue => self.blue.as_ref(),
            Color::Red => self.red.as_ref(),
        }
    }

    /// True when the entry carries any prop separation data.
    pub fn has_separation(&self) -> bool {
        self.blue.is_some() || self.red.is_some()
    }
}

/// Result of resolving a key against the store.
#[derive(Clone, Debug, PartialEq)]
pub enum OverrideEntry {
    /// No entry for the key.
    Absent,
    /// A well-formed entry.
    Present(PlacementOverride),
    /// The entry exists but does not match the payload schema.
    Malformed {
        /// Deserialization failure.
        reason: String,
    },
}

/// Read-only special-placement lookup, loaded once and explicitly reloadable.
///
/// Entries are typed when a table is loaded and published through an [`ArcSwap`], so
/// lookups never take a lock and never re-parse. `reload` builds the new table off to the
/// side and swaps the pointer; readers see either the old table or the new one.
pub struct OverrideStore {
    source: Box<dyn OverrideSource>,
    table: OnceLock<ArcSwap<EntryTable>>,
}

impl std::fmt::Debug for OverrideStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverrideStore")
            .field("source", &self.source.describe())
            .field("loaded", &self.table.get().is_some())
            .finish()
    }
}

impl Default for OverrideStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl OverrideStore {
    /// Store reading from `source` on first use.
    pub fn new(source: impl OverrideSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            table: OnceLock::new(),
        }
    }

    /// Store with no overrides.
    pub fn empty() -> Self {
        Self::new(StaticSource::default())
    }

    /// Store backed by a JSON file.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::new(JsonFileSource::new(path))
    }

    /// Load eagerly, surfacing source errors. A no-op once the table is loaded.
    pub fn load(&self) -> TkaResult<()> {
        if self.table.get().is_some() {
            return Ok(());
        }
        let table = self.fetch()?;
        tracing::debug!(
            source = %self.source.describe(),
            entries = table.len(),
            "loaded special placements"
        );
        let _ = self.table.set(ArcSwap::new(table));
        Ok(())
    }

    /// Re-read the source and swap the table in. On failure the previous table stays.
    pub fn reload(&self) -> TkaResult<()> {
        let table = self.fetch()?;
        tracing::debug!(
            source = %self.source.describe(),
            entries = table.len(),
            "reloaded special placements"
        );
        self.table
            .get_or_init(|| ArcSwap::new(Arc::clone(&table)))
            .store(table);
        Ok(())
    }

    /// Current typed table, loading it on first access. A failed first load yields an
    /// empty table and a warning; lookups never fail.
    pub fn snapshot(&self) -> Arc<EntryTable> {
        self.published().load_full()
    }

    /// Resolve `key`, distinguishing absent from malformed entries.
    pub fn entry(&self, key: &str) -> OverrideEntry {
        self.published()
            .load()
            .get(key)
            .cloned()
            .unwrap_or(OverrideEntry::Absent)
    }

    /// Well-formed entry for `key`, if any.
    pub fn lookup(&self, key: &str) -> Option<PlacementOverride> {
        match self.published().load().get(key) {
            Some(OverrideEntry::Present(o)) => Some(o.clone()),
            _ => None,
        }
    }

    /// Number of entries, malformed ones included.
    pub fn len(&self) -> usize {
        self.published().load().len()
    }

    /// True when no entries are loaded.
    pub fn is_empty(&self) -> bool {
        self.published().load().is_empty()
    }

    fn published(&self) -> &ArcSwap<EntryTable> {
        self.table.get_or_init(|| {
            let table = self.fetch().unwrap_or_else(|e| {
                tracing::warn!(
                    source = %self.source.describe(),
                    error = %e,
                    "special placements unavailable"
                );
                Arc::default()
            });
            ArcSwap::new(table)
        })
    }

    fn fetch(&self) -> TkaResult<Arc<EntryTable>> {
        Ok(Arc::new(type_entries(self.source.load()?)))
    }
}

/// Deserialize every raw payload once. Malformed entries are kept, with their reason.
fn type_entries(raw: OverrideTable) -> EntryTable {
    raw.into_iter()
        .map(|(key, value)| {
            let entry = match PlacementOverride::deserialize(&value) {
                Ok(o) => OverrideEntry::Present(o),
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "malformed special placement entry");
                    OverrideEntry::Malformed {
                        reason: e.to_string(),
                    }
                }
            };
            (key, entry)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/placement/overrides.rs"]
mod tests;
