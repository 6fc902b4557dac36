//! Configuration types for the add-address view
//!
//! Defines `Settings` (the TOML file) and its sections.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use addr_core::prelude::*;
use addr_core::DEFAULT_ADDRESS_DELIMITER;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub location: LocationSettings,

    #[serde(default)]
    pub validation: ValidationSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Authenticated storefront API
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL, e.g. `http://localhost:3000/api`
    #[serde(default = "default_api_base_url")]
    pub base_url: String,

    /// Path of the customer address-creation endpoint, appended to `base_url`
    #[serde(default = "default_create_address_path")]
    pub create_address_path: String,

    /// Bearer token of the signed-in customer (empty = no Authorization header)
    #[serde(default)]
    pub access_token: String,

    /// Route the view navigates to after a successful submit or on back
    #[serde(default = "default_profile_route")]
    pub profile_route: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            create_address_path: default_create_address_path(),
            access_token: String::new(),
            profile_route: default_profile_route(),
        }
    }
}

fn default_api_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_create_address_path() -> String {
    "/customers/me/addresses".to_string()
}

fn default_profile_route() -> String {
    "/profile".to_string()
}

/// Public geography lookup service
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LocationSettings {
    /// Serves `/`, `/district/{province_id}` and `/ward/{district_id}`
    #[serde(default = "default_location_base_url")]
    pub base_url: String,
}

impl Default for LocationSettings {
    fn default() -> Self {
        Self {
            base_url: default_location_base_url(),
        }
    }
}

fn default_location_base_url() -> String {
    "https://vapi.vnappmob.com/api/province".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ValidationSettings {
    /// Delimiter the address-completeness rule splits the composite on
    #[serde(default = "default_address_delimiter")]
    pub address_delimiter: String,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            address_delimiter: default_address_delimiter(),
        }
    }
}

fn default_address_delimiter() -> String {
    DEFAULT_ADDRESS_DELIMITER.to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// How long a toast stays in the status bar
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

fn default_toast_duration_ms() -> u64 {
    3000
}

impl UiSettings {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

impl Settings {
    /// Reject settings the view cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(Error::config_invalid("api.base_url must not be empty"));
        }
        if self.location.base_url.trim().is_empty() {
            return Err(Error::config_invalid("location.base_url must not be empty"));
        }
        if self.validation.address_delimiter.is_empty() {
            return Err(Error::config_invalid(
                "validation.address_delimiter must not be empty",
            ));
        }
        Ok(())
    }

    /// Full URL of the address-creation endpoint
    pub fn create_address_url(&self) -> String {
        join_url(&self.api.base_url, &self.api.create_address_path)
    }
}

/// Join a base URL and a path without doubling or dropping the slash
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
