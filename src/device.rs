//! Device model shared by providers, snapshots and presentation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One playback end-point as captured in a snapshot.
///
/// `identifier` is opaque: it is only ever handed back to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub identifier: String,
    pub friendly_name: Option<String>,
}

impl Device {
    pub fn new(identifier: impl Into<String>, friendly_name: Option<String>) -> Self {
        Self {
            identifier: identifier.into(),
            friendly_name,
        }
    }

    /// Friendly name, or an empty string when the lookup failed.
    pub fn display_name(&self) -> &str {
        self.friendly_name.as_deref().unwrap_or("")
    }
}

/// End-point state as reported by the audio subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceState {
    #[default]
    Active,
    Disabled,
    NotPresent,
    Unplugged,
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeviceState::Active => "active",
            DeviceState::Disabled => "disabled",
            DeviceState::NotPresent => "not_present",
            DeviceState::Unplugged => "unplugged",
        };
        f.write_str(s)
    }
}
