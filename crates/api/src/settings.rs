//! Service configuration

use config::{Config, ConfigError, File};
use serde::Deserialize;

/// Runtime settings: defaults overridable by an optional config/stress.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Address the HTTP listener binds to
    pub listen_addr: String,
    /// Directory holding the model artifact bundle
    pub model_dir: String,
}

impl Settings {
    /// Load settings from defaults plus the optional config file
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("listen_addr", "0.0.0.0:8080")?
            .set_default("model_dir", "models")?
            .add_source(File::with_name("config/stress").required(false))
            .build()?
            .try_deserialize()
    }
}
