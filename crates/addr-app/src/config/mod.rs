//! Configuration file parsing for the add-address view
//!
//! Supports:
//! - `<config_dir>/add-address/config.toml` - Global settings
//! - `--config <PATH>` - Explicit override

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings, resolve_config_path};
pub use types::*;
