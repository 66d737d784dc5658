//! Config loader facade: the only entry point that assembles sources.

use crate::config::merge::merge_policy;
use crate::config::sources::{environment, global_file};
use crate::config::ControllerConfig;
use crate::error::ControllerError;
use config::{File, FileFormat};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, then the global config file if present, then environment.
    pub fn load() -> Result<ControllerConfig, ControllerError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = environment::add_to_builder(builder);
        Self::finish(builder.build()?)
    }

    /// Defaults, then `path` (which must exist), then environment. The global
    /// config file is not consulted.
    pub fn load_from_file(path: &Path) -> Result<ControllerConfig, ControllerError> {
        debug!(config_path = %path.display(), "Loading explicit config file");
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        let builder = environment::add_to_builder(builder);
        Self::finish(builder.build()?)
    }

    /// Location of the user-level config file.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }

    fn finish(config: config::Config) -> Result<ControllerConfig, ControllerError> {
        let config: ControllerConfig = config.try_deserialize()?;
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ControllerError::Config(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(config)
    }
}
