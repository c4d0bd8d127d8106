//! In-memory store for the static map and statistics files.
//!
//! Everything is read once, synchronously, before the HTTP layer starts. A
//! source that fails to load is logged and left empty; the store itself is
//! always constructed, and callers learn about the gap through
//! [`StoreError::NotLoaded`] when they ask for that dataset.
//!
//! The store is immutable after construction and is shared behind an `Arc`.

pub mod error;
pub mod skills;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info};

use crate::models::{FeatureCollection, Layer, StatRecord};

pub use error::{StoreError, StoreResult};
pub use skills::{parse_leading_int, parse_skills_table};

pub const DEFAULT_SKILLS_FILE: &str = "bihar_skills_data.csv";

/// Locations of the four static sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub districts: PathBuf,
    pub blocks: PathBuf,
    pub villages: PathBuf,
    pub skills: PathBuf,
}

impl DataPaths {
    /// Default file names resolved against `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            districts: dir.join(Layer::District.default_file_name()),
            blocks: dir.join(Layer::Block.default_file_name()),
            villages: dir.join(Layer::Village.default_file_name()),
            skills: dir.join(DEFAULT_SKILLS_FILE),
        }
    }

    pub fn layer(&self, layer: Layer) -> &Path {
        match layer {
            Layer::District => &self.districts,
            Layer::Block => &self.blocks,
            Layer::Village => &self.villages,
        }
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::in_dir("data")
    }
}

/// Read and decode one GeoJSON feature collection.
pub fn read_feature_collection(path: &Path) -> StoreResult<FeatureCollection> {
    let text = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| StoreError::json(path, e))
}

/// Read and parse the statistics table.
pub fn read_skills(path: &Path) -> StoreResult<Vec<StatRecord>> {
    let text = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    parse_skills_table(&text).map_err(|e| StoreError::csv(path, e))
}

/// The loaded datasets.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    districts: Option<FeatureCollection>,
    blocks: Option<FeatureCollection>,
    villages: Option<FeatureCollection>,
    skills: Option<Vec<StatRecord>>,
    loaded_at: DateTime<Utc>,
}

impl DataStore {
    /// Load every source from disk. Individual failures are logged and leave
    /// that dataset unset; this never fails as a whole.
    pub fn load(paths: &DataPaths) -> Self {
        let mut store = Self {
            loaded_at: Utc::now(),
            ..Default::default()
        };

        for layer in Layer::ALL {
            let path = paths.layer(layer);
            match read_feature_collection(path) {
                Ok(collection) => {
                    info!(dataset = %layer, features = collection.len(), path = %path.display(), "Loaded map data");
                    *store.slot_mut(layer) = Some(collection);
                }
                Err(e) => error!(dataset = %layer, error = %e, "Error loading map data"),
            }
        }

        match read_skills(&paths.skills) {
            Ok(records) => {
                info!(records = records.len(), path = %paths.skills.display(), "Loaded skills data");
                store.skills = Some(records);
            }
            Err(e) => error!(error = %e, "Error loading skills data"),
        }

        if store.is_complete() {
            info!("All data loaded successfully");
        }
        store
    }

    /// Assemble a store from already-decoded parts.
    pub fn from_parts(
        districts: Option<FeatureCollection>,
        blocks: Option<FeatureCollection>,
        villages: Option<FeatureCollection>,
        skills: Option<Vec<StatRecord>>,
    ) -> Self {
        Self {
            districts,
            blocks,
            villages,
            skills,
            loaded_at: Utc::now(),
        }
    }

    fn slot(&self, layer: Layer) -> &Option<FeatureCollection> {
        match layer {
            Layer::District => &self.districts,
            Layer::Block => &self.blocks,
            Layer::Village => &self.villages,
        }
    }

    fn slot_mut(&mut self, layer: Layer) -> &mut Option<FeatureCollection> {
        match layer {
            Layer::District => &mut self.districts,
            Layer::Block => &mut self.blocks,
            Layer::Village => &mut self.villages,
        }
    }

    pub fn collection(&self, layer: Layer) -> StoreResult<&FeatureCollection> {
        self.slot(layer)
            .as_ref()
            .ok_or(StoreError::NotLoaded(layer.as_str()))
    }

    pub fn skills(&self) -> StoreResult<&[StatRecord]> {
        self.skills
            .as_deref()
            .ok_or(StoreError::NotLoaded("skills"))
    }

    pub fn is_complete(&self) -> bool {
        Layer::ALL.iter().all(|l| self.slot(*l).is_some()) && self.skills.is_some()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Per-dataset load summary, used by the health endpoint.
    pub fn status(&self) -> Vec<DatasetStatus> {
        let mut out: Vec<DatasetStatus> = Layer::ALL
            .iter()
            .map(|layer| DatasetStatus {
                name: layer.as_str(),
                loaded: self.slot(*layer).is_some(),
                entries: self.slot(*layer).as_ref().map_or(0, FeatureCollection::len),
            })
            .collect();
        out.push(DatasetStatus {
            name: "skills",
            loaded: self.skills.is_some(),
            entries: self.skills.as_ref().map_or(0, Vec::len),
        });
        out
    }
}

/// Load state of one dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetStatus {
    pub name: &'static str,
    pub loaded: bool,
    /// Features for map layers, rows for the statistics table.
    pub entries: usize,
}
