//! Selection Engine
//!
//! Executes one [`Request`] against one [`Snapshot`]: either render the
//! snapshot as device lines or make the device at an index the default
//! render end-point. A selection index is always resolved against the same
//! snapshot that was captured for the invocation.

use crate::error::ControllerError;
use crate::format::{self, DEFAULT_DEVICE_FORMAT};
use crate::provider::DeviceProvider;
use crate::snapshot::Snapshot;
use tracing::{debug, info};

/// The single operation of an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Render every device; `None` uses [`DEFAULT_DEVICE_FORMAT`].
    List { template: Option<String> },
    /// Make the device at this 1-based index the default.
    SelectByIndex { index: i64 },
}

impl Request {
    pub fn name(&self) -> &'static str {
        match self {
            Request::List { .. } => "list",
            Request::SelectByIndex { .. } => "select",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Listed { lines: Vec<String> },
    Selected { identifier: String },
}

impl Outcome {
    /// Number of devices listed; zero for a selection.
    pub fn count(&self) -> usize {
        match self {
            Outcome::Listed { lines } => lines.len(),
            Outcome::Selected { .. } => 0,
        }
    }
}

pub struct SelectionEngine<'a, P> {
    provider: &'a P,
}

impl<'a, P: DeviceProvider> SelectionEngine<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    pub fn execute(&self, request: &Request, snapshot: &Snapshot) -> Result<Outcome, ControllerError> {
        match request {
            Request::List { template } => {
                let template = template.as_deref().unwrap_or(DEFAULT_DEVICE_FORMAT);
                let lines = snapshot
                    .iter()
                    .map(|(index, device)| format::render(template, index, device.display_name()))
                    .collect::<Result<Vec<_>, _>>()?;
                debug!(count = lines.len(), "Rendered device list");
                Ok(Outcome::Listed { lines })
            }
            Request::SelectByIndex { index } => {
                let device = snapshot
                    .get(*index)
                    .ok_or(ControllerError::IndexOutOfRange(*index))?;
                debug!(index, identifier = %device.identifier, "Resolved device");

                self.provider
                    .set_default_endpoint(&device.identifier)
                    .map_err(|source| ControllerError::DefaultSet {
                        identifier: device.identifier.clone(),
                        source,
                    })?;
                info!(
                    identifier = %device.identifier,
                    name = device.display_name(),
                    "Default audio end-point changed"
                );
                Ok(Outcome::Selected {
                    identifier: device.identifier.clone(),
                })
            }
        }
    }
}

/// Capture a snapshot from `provider` and execute `request` against it.
pub fn run<P: DeviceProvider>(provider: &P, request: &Request) -> Result<Outcome, ControllerError> {
    let snapshot = Snapshot::capture(provider)?;
    SelectionEngine::new(provider).execute(request, &snapshot)
}
