//! Command-line argument assembly and shell execution

use crate::error::{Error, Result};
use serde_yaml::{Mapping, Value};
use std::fmt::Write as _;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Key inside the `input` mapping that names a script path for the
/// caller's own use; it is never emitted as an argument.
pub const SCRIPT_KEY: &str = "script";

/// Render option mappings into a flat `--key value` argument string.
///
/// Sections are emitted in the fixed order `params`, `input`, `output`;
/// within each, entries follow the mapping's insertion order — nothing
/// is sorted. The `input` entry keyed [`SCRIPT_KEY`] is skipped. The
/// caller is responsible for shell quoting of embedded values.
pub fn prepare_cmd_args(
    params: Option<&Mapping>,
    input: Option<&Mapping>,
    output: Option<&Mapping>,
) -> String {
    let mut cmd_line = String::new();

    if let Some(params) = params {
        for (key, value) in params {
            push_arg(&mut cmd_line, key, value);
        }
    }

    if let Some(input) = input {
        for (key, value) in input {
            if key.as_str() == Some(SCRIPT_KEY) {
                continue;
            }
            push_arg(&mut cmd_line, key, value);
        }
    }

    if let Some(output) = output {
        for (key, value) in output {
            push_arg(&mut cmd_line, key, value);
        }
    }

    cmd_line.trim_end().to_string()
}

/// Run `cmd` through the platform shell, blocking until it exits.
///
/// No output capture, no timeout. A non-zero exit becomes
/// [`Error::CommandFailed`]; a spawn failure becomes [`Error::Io`].
pub fn run_cmd(cmd: &str) -> Result<()> {
    debug!("running shell command: {cmd}");

    let status = Command::new("sh")
        .arg("-c")
        .arg(cmd)
        .status()
        .map_err(|source| Error::Io { path: PathBuf::from("sh"), source })?;

    if !status.success() {
        return Err(Error::CommandFailed { cmd: cmd.to_string(), status });
    }

    Ok(())
}

fn push_arg(cmd_line: &mut String, key: &Value, value: &Value) {
    // Infallible: writing to a String cannot error.
    let _ = write!(cmd_line, "--{} {} ", render_scalar(key), render_scalar(value));
}

/// Natural string form of a node for argument rendering.
fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => serde_yaml::to_string(other).unwrap_or_default().trim_end().to_string(),
    }
}
