//! Error taxonomy for config loading, env resolution, and command execution

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A file that must exist (an explicit YAML path) is absent.
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// YAML content at `path` failed to parse.
    #[error("invalid YAML in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Reading or writing `path` failed below the parse layer, or a
    /// child process could not be spawned.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `read_env_variable` found no matching line and no default was supplied.
    #[error("variable {name} not found in {} and no default value provided", .path.display())]
    VariableNotFound { name: String, path: PathBuf },

    /// A shell command exited non-zero.
    #[error("command `{cmd}` failed: {status}")]
    CommandFailed { cmd: String, status: ExitStatus },
}
