//! CLI route: run context and dispatch. Builds the Request from parsed
//! arguments and configuration, picks the provider backend, and hands the
//! Request to the selection engine.

use crate::cli::parse::Cli;
use crate::cli::presentation::format_outcome;
use crate::config::{Backend, ConfigLoader, ControllerConfig};
use crate::error::ControllerError;
use crate::provider::{self, DeviceProvider, MemoryProvider};
use crate::selection::{self, Request};
use std::path::PathBuf;
use tracing::{debug, info};

/// Runtime context for CLI execution: the loaded configuration.
pub struct RunContext {
    config: ControllerConfig,
}

impl RunContext {
    /// Load configuration from `config_path`, or from the default sources.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ControllerError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: ControllerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Request for the parsed arguments. `-f` wins over the configured
    /// listing format.
    pub fn request(&self, cli: &Cli) -> Request {
        match cli.device_index {
            Some(index) => Request::SelectByIndex { index },
            None => Request::List {
                template: cli
                    .format
                    .clone()
                    .or_else(|| self.config.listing.format.clone()),
            },
        }
    }

    /// Execute against the configured backend; returns the text for stdout.
    pub fn execute(&self, request: &Request) -> Result<String, ControllerError> {
        info!(
            request = request.name(),
            backend = ?self.config.provider.backend,
            "Executing request"
        );
        match self.config.provider.backend {
            Backend::System => {
                let provider = provider::open_system_provider()?;
                self.execute_with(&provider, request)
            }
            Backend::Simulated => {
                let provider = MemoryProvider::from_endpoints(self.config.provider.devices.clone());
                self.execute_with(&provider, request)
            }
        }
    }

    /// Execute against an already opened provider.
    pub fn execute_with<P: DeviceProvider>(
        &self,
        provider: &P,
        request: &Request,
    ) -> Result<String, ControllerError> {
        let outcome = selection::run(provider, request)?;
        debug!(count = outcome.count(), "Request completed");
        Ok(format_outcome(&outcome))
    }
}
