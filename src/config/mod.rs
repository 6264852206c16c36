//! Configuration loading and version templating
//!
//! `read_config` composes the loader, the env fallback chain, and
//! placeholder substitution into the single "load and stamp" operation.

use crate::env::read_env_file_in;
use crate::error::Result;
use serde_yaml::Value;
use std::path::Path;
use tracing::debug;

pub mod loader;
pub mod template;

pub use loader::{read_yaml_file, write_yaml_file};
pub use template::replace_placeholder_in_config;

/// The placeholder token `read_config` substitutes.
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// Load the YAML document at `yaml_path` and substitute
/// [`VERSION_PLACEHOLDER`] with the version resolved from the default
/// `.env` chain rooted at `dir`.
///
/// When no source yields a `version`, the document is returned
/// untouched — resolution is best-effort.
pub fn read_config_in(dir: &Path, yaml_path: &Path) -> Result<Value> {
    let config = read_yaml_file(yaml_path)?;
    let env_vars = read_env_file_in(dir, ".env");

    Ok(match env_vars.get("version") {
        Some(version) => {
            debug!("stamping version {version} into {}", yaml_path.display());
            replace_placeholder_in_config(config, VERSION_PLACEHOLDER, version)
        }
        None => config,
    })
}

/// [`read_config_in`] anchored at the current working directory.
pub fn read_config(yaml_path: &Path) -> Result<Value> {
    let dir = std::env::current_dir().map_err(|source| crate::error::Error::Io {
        path: yaml_path.to_path_buf(),
        source,
    })?;
    read_config_in(&dir, yaml_path)
}
