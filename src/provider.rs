//! Device Provider Abstraction
//!
//! The audio subsystem is reached only through [`DeviceProvider`]: enumerate
//! render end-points in a given state, read an end-point's identifier and
//! friendly name, and make an identifier the default end-point for the console
//! role. Every handle a provider hands out is an owned value that releases its
//! underlying resource when dropped.

use crate::device::DeviceState;
use crate::error::{ControllerError, ProviderError};

pub mod memory;
#[cfg(not(windows))]
pub mod unsupported;
#[cfg(windows)]
pub mod wasapi;

pub use memory::{MemoryEndpoint, MemoryProvider};

/// Capability interface over the platform's audio end-point services.
pub trait DeviceProvider {
    /// Handle to one end-point.
    type Endpoint;

    /// Render (playback) end-points currently in `state`, in provider order.
    fn render_endpoints(&self, state: DeviceState) -> Result<Vec<Self::Endpoint>, ProviderError>;

    /// Stable identifier of an end-point.
    fn identifier(&self, endpoint: &Self::Endpoint) -> Result<String, ProviderError>;

    /// Human-readable name of an end-point.
    fn friendly_name(&self, endpoint: &Self::Endpoint) -> Result<String, ProviderError>;

    /// Make `identifier` the default render end-point for the console role.
    fn set_default_endpoint(&self, identifier: &str) -> Result<(), ProviderError>;
}

#[cfg(windows)]
pub type SystemProvider = wasapi::WasapiProvider;

#[cfg(not(windows))]
pub type SystemProvider = unsupported::UnsupportedProvider;

/// Open the provider backed by the host's audio subsystem.
pub fn open_system_provider() -> Result<SystemProvider, ControllerError> {
    SystemProvider::open()
}
