//! Configuration for the Aquarium client.
//!
//! Provides TOML-based configuration with:
//! - The server URL, login, and authentication key
//! - Config file layering (XDG user config + project-local overrides)
//! - `AQUARIUM_*` environment variable overrides

pub mod discovery;
pub mod error;
pub mod types;

pub use discovery::{
    ConfigSource, LoadedConfig, load_config, load_config_file, load_config_with_options,
    xdg_config_dir, xdg_config_path,
};
pub use error::{ConfigError, Result};
pub use types::*;
