//! Device Snapshot
//!
//! An ordered, immutable view of the active render devices, captured once per
//! invocation. Indices are 1-based and follow the provider's order; they are
//! only meaningful within the snapshot that produced them.

use crate::device::{Device, DeviceState};
use crate::error::ControllerError;
use crate::provider::DeviceProvider;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    devices: Vec<Device>,
}

impl Snapshot {
    /// Capture the active render devices from `provider`.
    ///
    /// A failed friendly-name lookup is logged and leaves that device unnamed;
    /// it never drops the device or aborts the capture. Failing to list the
    /// devices or to read an identifier is an enumeration failure.
    pub fn capture<P: DeviceProvider>(provider: &P) -> Result<Self, ControllerError> {
        let endpoints = provider
            .render_endpoints(DeviceState::Active)
            .map_err(ControllerError::Enumeration)?;

        let mut devices = Vec::with_capacity(endpoints.len());
        for endpoint in &endpoints {
            let identifier = provider
                .identifier(endpoint)
                .map_err(ControllerError::Enumeration)?;
            let friendly_name = match provider.friendly_name(endpoint) {
                Ok(name) => Some(name),
                Err(source) => {
                    let err = ControllerError::PropertyLookup {
                        identifier: identifier.clone(),
                        source,
                    };
                    warn!(error = %err, "Continuing without friendly name");
                    None
                }
            };
            devices.push(Device {
                identifier,
                friendly_name,
            });
        }

        debug!(count = devices.len(), "Captured device snapshot");
        Ok(Self { devices })
    }

    pub fn from_devices(devices: Vec<Device>) -> Self {
        Self { devices }
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Device at 1-based `index`, or `None` outside `1..=len`.
    pub fn get(&self, index: i64) -> Option<&Device> {
        let position = usize::try_from(index).ok()?.checked_sub(1)?;
        self.devices.get(position)
    }

    /// `(index, device)` pairs with 1-based indices, in captured order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Device)> + '_ {
        self.devices
            .iter()
            .enumerate()
            .map(|(position, device)| (position + 1, device))
    }
}
