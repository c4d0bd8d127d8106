//! Error types for loading the static data files.

use std::path::PathBuf;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure reading one of the on-disk sources.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not a valid GeoJSON feature collection.
    #[error("failed to parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The statistics table could not be split into records.
    #[error("failed to parse {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A dataset was requested that did not load at startup.
    #[error("{0} data not loaded")]
    NotLoaded(&'static str),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_the_path() {
        let err = StoreError::io(
            "data/bihar_blocks.geojson",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("data/bihar_blocks.geojson"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_csv_error_names_the_path() {
        let source = csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "truncated table",
        ));
        let err = StoreError::csv("data/skills.csv", source);
        assert!(matches!(err, StoreError::Csv { .. }));
        assert!(err.to_string().contains("data/skills.csv"));
    }

    #[test]
    fn test_not_loaded_message() {
        assert_eq!(StoreError::NotLoaded("skills").to_string(), "skills data not loaded");
    }
}
