//! YAML file loading and writing

use crate::error::{Error, Result};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Parse the YAML file at `path` into a document tree.
///
/// No schema is enforced; whatever the file contains comes back as a
/// generic [`Value`].
pub fn read_yaml_file(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(Error::NotFound { path: path.to_path_buf() });
    }

    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_yaml::from_str(&content).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize `data` as YAML, overwriting `path`.
pub fn write_yaml_file(path: &Path, data: &Value) -> Result<()> {
    let content = serde_yaml::to_string(data).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, content).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
