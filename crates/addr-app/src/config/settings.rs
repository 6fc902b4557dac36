//! Settings loader for add-address/config.toml

use super::types::Settings;
use addr_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "add-address";

const DEFAULT_CONFIG: &str = r#"# Add Address Configuration

[api]
base_url = "http://localhost:3000/api"
create_address_path = "/customers/me/addresses"
access_token = ""            # Bearer token of the signed-in customer
profile_route = "/profile"   # Where the view goes after a successful submit

[location]
base_url = "https://vapi.vnappmob.com/api/province"

[validation]
address_delimiter = ", "     # Segments the full address must split into

[ui]
toast_duration_ms = 3000
"#;

/// `<config_dir>/add-address/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Explicit path first, then the platform default
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(default_config_path)
}

/// Load settings from `config_path`
///
/// Returns default settings if the file doesn't exist, can't be parsed, or
/// fails validation.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    let settings: Settings = match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                return Settings::default();
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            return Settings::default();
        }
    };

    if let Err(e) = settings.validate() {
        warn!("Ignoring {:?}: {}", config_path, e);
        return Settings::default();
    }

    debug!("Loaded settings from {:?}", config_path);
    settings
}

/// Write the commented default config file, leaving an existing one alone
///
/// Returns `true` if a file was written.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        info!("Config file already exists at {:?}", config_path);
        return Ok(false);
    }

    if let Some(dir) = config_path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", dir, e)))?;
    }

    let temp_path = config_path.with_extension("toml.tmp");

    // Atomic write: write to temp, then rename
    std::fs::write(&temp_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;

    std::fs::rename(&temp_path, config_path)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    info!("Created default config at {:?}", config_path);
    Ok(true)
}
