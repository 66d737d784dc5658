//! In-process provider over a fixed end-point list.
//!
//! Backs the `simulated` backend and serves as the provider double in tests.
//! Default changes are recorded in memory and last only as long as the value.

use crate::device::DeviceState;
use crate::error::ProviderError;
use crate::provider::DeviceProvider;
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};

/// HRESULT_FROM_WIN32(ERROR_NOT_FOUND)
pub const E_NOT_FOUND: i32 = 0x8007_0490_u32 as i32;

/// One simulated end-point. Deserializes from the `[[provider.devices]]`
/// config table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryEndpoint {
    #[serde(rename = "id")]
    pub identifier: String,

    /// `None` makes the friendly-name lookup fail for this end-point.
    #[serde(rename = "name", default, skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,

    #[serde(default)]
    pub state: DeviceState,
}

impl MemoryEndpoint {
    pub fn new(identifier: impl Into<String>, friendly_name: Option<&str>) -> Self {
        Self {
            identifier: identifier.into(),
            friendly_name: friendly_name.map(str::to_string),
            state: DeviceState::Active,
        }
    }

    pub fn with_state(mut self, state: DeviceState) -> Self {
        self.state = state;
        self
    }
}

#[derive(Debug, Default)]
pub struct MemoryProvider {
    endpoints: Vec<MemoryEndpoint>,
    enumeration_failure: Option<ProviderError>,
    set_default_failure: Option<ProviderError>,
    enumerations: Cell<usize>,
    default_requests: RefCell<Vec<String>>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_endpoints(endpoints: impl IntoIterator<Item = MemoryEndpoint>) -> Self {
        Self {
            endpoints: endpoints.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Add an active end-point with a friendly name.
    pub fn with_device(self, identifier: &str, friendly_name: &str) -> Self {
        self.with_endpoint(MemoryEndpoint::new(identifier, Some(friendly_name)))
    }

    pub fn with_endpoint(mut self, endpoint: MemoryEndpoint) -> Self {
        self.endpoints.push(endpoint);
        self
    }

    /// Make every enumeration fail with `error`.
    pub fn fail_enumeration(mut self, error: ProviderError) -> Self {
        self.enumeration_failure = Some(error);
        self
    }

    /// Make every default change fail with `error`.
    pub fn fail_set_default(mut self, error: ProviderError) -> Self {
        self.set_default_failure = Some(error);
        self
    }

    /// Identifiers passed to `set_default_endpoint`, in call order, including
    /// calls that failed.
    pub fn default_requests(&self) -> Vec<String> {
        self.default_requests.borrow().clone()
    }

    /// Identifier of the last successful default change.
    pub fn default_endpoint(&self) -> Option<String> {
        if self.set_default_failure.is_some() {
            return None;
        }
        self.default_requests.borrow().last().cloned()
    }

    /// Number of `render_endpoints` calls.
    pub fn enumeration_count(&self) -> usize {
        self.enumerations.get()
    }
}

impl DeviceProvider for MemoryProvider {
    type Endpoint = MemoryEndpoint;

    fn render_endpoints(&self, state: DeviceState) -> Result<Vec<MemoryEndpoint>, ProviderError> {
        self.enumerations.set(self.enumerations.get() + 1);
        if let Some(err) = &self.enumeration_failure {
            return Err(err.clone());
        }
        Ok(self
            .endpoints
            .iter()
            .filter(|endpoint| endpoint.state == state)
            .cloned()
            .collect())
    }

    fn identifier(&self, endpoint: &MemoryEndpoint) -> Result<String, ProviderError> {
        Ok(endpoint.identifier.clone())
    }

    fn friendly_name(&self, endpoint: &MemoryEndpoint) -> Result<String, ProviderError> {
        endpoint.friendly_name.clone().ok_or_else(|| {
            ProviderError::new(E_NOT_FOUND, "Element not found: PKEY_Device_FriendlyName")
        })
    }

    fn set_default_endpoint(&self, identifier: &str) -> Result<(), ProviderError> {
        self.default_requests
            .borrow_mut()
            .push(identifier.to_string());
        match &self.set_default_failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
