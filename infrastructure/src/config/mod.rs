//! Configuration file loading for house-estimator
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ESTIMATOR_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./estimator.toml` or `./.estimator.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/house-estimator/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_BASE_URL, FileConfig, FileDisplayConfig, FileEndpointConfig,
    FileFormConfig, FileOutputConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
