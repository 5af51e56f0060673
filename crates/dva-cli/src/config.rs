//! CLI configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default config file name, looked up in the working directory
const DEFAULT_CONFIG_NAME: &str = "dva";

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// JSON file holding the sample list
    pub data_file: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Write the default samples when the data file does not exist yet
    pub seed_defaults: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("dva_data.json"),
            log_level: "info".to_string(),
            seed_defaults: true,
        }
    }
}

impl CliConfig {
    /// Load configuration
    ///
    /// Layers, lowest priority first: built-in defaults, the config file
    /// (`path`, or an optional `dva.toml` in the working directory), then
    /// `DVA_*` environment variables.
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&CliConfig::default())?);

        builder = match path {
            Some(path) => builder.add_source(config::File::with_name(path).required(true)),
            None => builder.add_source(config::File::with_name(DEFAULT_CONFIG_NAME).required(false)),
        };

        builder = builder.add_source(config::Environment::with_prefix("DVA").try_parsing(true));

        builder.build()?.try_deserialize()
    }
}
