//! Configuration System
//!
//! Layered configuration: built-in defaults, then the user's global config
//! file (or an explicit `--config` file), then `ENDPOINTCTL_*` environment
//! variables. Tests included.

use crate::logging::LoggingConfig;
use crate::provider::MemoryEndpoint;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Device listing settings
    #[serde(default)]
    pub listing: ListingConfig,

    /// Which device provider backs the invocation
    #[serde(default)]
    pub provider: ProviderSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Template used when `-f` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// The host's audio subsystem
    #[default]
    System,
    /// The devices listed under `[[provider.devices]]`
    Simulated,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSettings {
    #[serde(default)]
    pub backend: Backend,

    /// End-points of the simulated backend
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub devices: Vec<MemoryEndpoint>,
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Listing(String),
    Provider(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Listing(msg) => write!(f, "Listing: {}", msg),
            ValidationError::Provider(msg) => write!(f, "Provider: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ControllerConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if matches!(self.listing.format.as_deref(), Some("")) {
            errors.push(ValidationError::Listing(
                "format cannot be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for device in &self.provider.devices {
            if device.identifier.trim().is_empty() {
                errors.push(ValidationError::Provider(
                    "simulated device id cannot be empty".to_string(),
                ));
            } else if !seen.insert(device.identifier.as_str()) {
                errors.push(ValidationError::Provider(format!(
                    "duplicate simulated device id '{}'",
                    device.identifier
                )));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
