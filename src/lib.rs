//! endpointctl: list audio playback end-point devices and set the default one.
//!
//! A single invocation captures a [`snapshot::Snapshot`] of the active render
//! devices from a [`provider::DeviceProvider`], then the
//! [`selection::SelectionEngine`] either renders it with the [`format`]
//! templates or makes one device the default end-point.

pub mod cli;
pub mod config;
pub mod device;
pub mod error;
pub mod format;
pub mod logging;
pub mod provider;
pub mod selection;
pub mod snapshot;

pub use device::{Device, DeviceState};
pub use error::{ControllerError, ProviderError};
pub use selection::{Outcome, Request, SelectionEngine};
pub use snapshot::Snapshot;
