//! pipeconf: stamp resolved versions into YAML pipeline configs
//!
//! Loads a YAML configuration, resolves a `version` string from a
//! `.env`-style file (with fixture and `config.yaml` fallbacks), and
//! substitutes the `{version}` placeholder throughout the document.
//! Also assembles `--key value` argument strings from ordered option
//! mappings and runs the resulting command lines through the shell.
//!
//! Everything is synchronous and stateless: files are read fresh on
//! every call and nothing is cached between invocations.

pub mod cmd;
pub mod config;
pub mod env;
pub mod error;

pub use cmd::{prepare_cmd_args, run_cmd};
pub use config::{
    read_config, read_config_in, read_yaml_file, replace_placeholder_in_config, write_yaml_file,
};
pub use env::{read_env_file, read_env_file_in, read_env_variable};
pub use error::{Error, Result};
