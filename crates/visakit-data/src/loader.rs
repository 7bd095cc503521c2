//! Shared JSON/YAML loading infrastructure.
//!
//! Dataset files may be authored in JSON or YAML; both deserialize into
//! the same typed structures. Loading delegates through these functions
//! so error reporting (path context, not-found vs IO discrimination) is
//! consistent everywhere.

use std::path::Path;

use crate::error::{DatasetError, DatasetResult};

/// Load a JSON file into a strongly-typed struct.
pub fn load_json_typed<T: serde::de::DeserializeOwned>(path: &Path) -> DatasetResult<T> {
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|e| DatasetError::JsonParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load a YAML file into a strongly-typed struct.
pub fn load_yaml_typed<T: serde::de::DeserializeOwned>(path: &Path) -> DatasetResult<T> {
    let content = read_file(path)?;
    serde_yaml::from_str(&content).map_err(|e| DatasetError::YamlParse {
        path: path.to_path_buf(),
        source: e,
    })
}

fn read_file(path: &Path) -> DatasetResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DatasetError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DatasetError::Io(e)
        }
    })
}
