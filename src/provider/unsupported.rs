//! System provider for platforms without an audio end-point backend.

use crate::device::DeviceState;
use crate::error::{ControllerError, ProviderError};
use crate::provider::DeviceProvider;
use std::convert::Infallible;

/// Uninhabited: opening it always fails, so its methods are unreachable.
#[derive(Debug)]
pub enum UnsupportedProvider {}

impl UnsupportedProvider {
    pub fn open() -> Result<Self, ControllerError> {
        Err(ControllerError::Initialization(ProviderError::new(
            1,
            format!(
                "no audio end-point backend is available on {}",
                std::env::consts::OS
            ),
        )))
    }
}

impl DeviceProvider for UnsupportedProvider {
    type Endpoint = Infallible;

    fn render_endpoints(&self, _state: DeviceState) -> Result<Vec<Infallible>, ProviderError> {
        match *self {}
    }

    fn identifier(&self, endpoint: &Infallible) -> Result<String, ProviderError> {
        match *endpoint {}
    }

    fn friendly_name(&self, endpoint: &Infallible) -> Result<String, ProviderError> {
        match *endpoint {}
    }

    fn set_default_endpoint(&self, _identifier: &str) -> Result<(), ProviderError> {
        match *self {}
    }
}
