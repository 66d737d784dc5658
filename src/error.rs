//! Error types for the audio end-point controller.

use crate::format::TemplateError;
use thiserror::Error;

/// Failure reported by a device provider, carrying the provider's status code
/// (an HRESULT on Windows).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (0x{code:08X})")]
pub struct ProviderError {
    pub code: i32,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[cfg(windows)]
impl From<windows_core::Error> for ProviderError {
    fn from(err: windows_core::Error) -> Self {
        Self::new(err.code().0, err.message().to_string())
    }
}

/// Terminal failure of one invocation.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("Failed to initialize the audio device subsystem: {0}")]
    Initialization(ProviderError),

    #[error("Failed to enumerate audio end-point devices: {0}")]
    Enumeration(ProviderError),

    #[error("Failed to read the friendly name of device {identifier}: {source}")]
    PropertyLookup {
        identifier: String,
        #[source]
        source: ProviderError,
    },

    #[error("No audio end-point device with the index '{0}'")]
    IndexOutOfRange(i64),

    #[error("Failed to set default audio end-point device {identifier}: {source}")]
    DefaultSet {
        identifier: String,
        #[source]
        source: ProviderError,
    },

    #[error("Invalid device format string: {0}")]
    Template(#[from] TemplateError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ControllerError {
    /// Process exit status for this failure. Provider failures exit with the
    /// provider's code; everything else exits with 1.
    pub fn exit_code(&self) -> i32 {
        let code = match self {
            ControllerError::Initialization(e)
            | ControllerError::Enumeration(e)
            | ControllerError::PropertyLookup { source: e, .. }
            | ControllerError::DefaultSet { source: e, .. } => e.code,
            ControllerError::IndexOutOfRange(_)
            | ControllerError::Template(_)
            | ControllerError::Config(_) => 1,
        };
        if code == 0 {
            1
        } else {
            code
        }
    }
}

impl From<config::ConfigError> for ControllerError {
    fn from(err: config::ConfigError) -> Self {
        ControllerError::Config(err.to_string())
    }
}
