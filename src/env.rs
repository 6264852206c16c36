//! Flat `.env`-style file parsing and version fallback resolution
//!
//! `read_env_file` is best-effort: every missing source degrades to an
//! empty mapping instead of an error. `read_env_variable` is strict and
//! scans a single file only — it does not share the fixture/`config.yaml`
//! fallback chain.

use crate::config::read_yaml_file;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Parse flat `KEY=VALUE` text: one pair per non-blank line, first `=`
/// is the delimiter, no quoting or escaping. Lines without `=` are
/// skipped. Later duplicates win.
pub fn parse_env_content(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Resolve the environment mapping relative to `dir`.
///
/// Fallback chain: `dir/env_path`, then `dir/tests/fixtures/env_path`,
/// then an empty mapping. If the result has no `version` key, a
/// `version` scalar from `dir/config.yaml` is copied in when available.
pub fn read_env_file_in(dir: &Path, env_path: &str) -> HashMap<String, String> {
    let primary = dir.join(env_path);
    let fixture = dir.join("tests/fixtures").join(env_path);

    let mut env_vars = if primary.exists() {
        read_env_lines(&primary)
    } else if fixture.exists() {
        debug!("env file {} absent, using fixture {}", primary.display(), fixture.display());
        read_env_lines(&fixture)
    } else {
        debug!("no env file at {} or {}", primary.display(), fixture.display());
        HashMap::new()
    };

    if !env_vars.contains_key("version") {
        let yaml_fallback = dir.join("config.yaml");
        if yaml_fallback.exists() {
            match read_yaml_file(&yaml_fallback) {
                Ok(doc) => {
                    if let Some(version) = doc.get("version").and_then(scalar_to_string) {
                        debug!("version resolved from {}", yaml_fallback.display());
                        env_vars.insert("version".to_string(), version);
                    }
                }
                Err(e) => warn!("ignoring unreadable version fallback: {e}"),
            }
        }
    }

    env_vars
}

/// [`read_env_file_in`] anchored at the current working directory.
/// Never fails; if the working directory is unavailable the mapping is empty.
pub fn read_env_file(env_path: &str) -> HashMap<String, String> {
    match std::env::current_dir() {
        Ok(dir) => read_env_file_in(&dir, env_path),
        Err(e) => {
            warn!("cannot determine working directory: {e}");
            HashMap::new()
        }
    }
}

/// Read a single variable from a flat env file.
///
/// Returns the trimmed text after the first `=` of the first line
/// starting with `name=`. Falls back to `default` when given, and fails
/// with [`Error::VariableNotFound`] otherwise. Unlike [`read_env_file`],
/// no fixture or `config.yaml` fallback is consulted.
pub fn read_env_variable(
    file_path: &Path,
    name: &str,
    default: Option<&str>,
) -> Result<String> {
    if file_path.exists() {
        let content = fs::read_to_string(file_path).map_err(|source| Error::Io {
            path: file_path.to_path_buf(),
            source,
        })?;
        let prefix = format!("{name}=");
        for line in content.lines() {
            if let Some(rest) = line.strip_prefix(&prefix) {
                return Ok(rest.trim().to_string());
            }
        }
    }

    match default {
        Some(value) => Ok(value.to_string()),
        None => Err(Error::VariableNotFound {
            name: name.to_string(),
            path: file_path.to_path_buf(),
        }),
    }
}

fn read_env_lines(path: &Path) -> HashMap<String, String> {
    match fs::read_to_string(path) {
        Ok(content) => parse_env_content(&content),
        Err(e) => {
            warn!("failed reading env file {}: {e}", path.display());
            HashMap::new()
        }
    }
}

/// Natural string form of a scalar, for the string-to-string env mapping.
fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
