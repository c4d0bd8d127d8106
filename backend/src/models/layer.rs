//! Per-dataset schema adapter.
//!
//! The three boundary files do not agree on how a feature names its parent
//! unit: districts carry an upper-case `DISTRICT`, blocks carry
//! `district_name`, villages carry `mandal_name`. All of that is resolved here.

use std::fmt;

/// One of the geographic boundary datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    District,
    Block,
    Village,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::District, Layer::Block, Layer::Village];

    /// Feature property holding the name that requests match against.
    pub fn name_property(self) -> &'static str {
        match self {
            Layer::District => "DISTRICT",
            Layer::Block => "district_name",
            Layer::Village => "mandal_name",
        }
    }

    pub fn default_file_name(self) -> &'static str {
        match self {
            Layer::District => "bihar_districts.geojson",
            Layer::Block => "bihar_blocks.geojson",
            Layer::Village => "bihar_villages.geojson",
        }
    }

    /// Error body returned when this dataset failed to load.
    pub fn unavailable_message(self) -> &'static str {
        match self {
            Layer::District => "District map data not available.",
            Layer::Block => "Blocks map data not available.",
            Layer::Village => "Villages map data not available.",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Layer::District => "districts",
            Layer::Block => "blocks",
            Layer::Village => "villages",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
