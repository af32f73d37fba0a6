use crate::config::validate_catalog_config;
use crate::domain::ports::CatalogConfig;
use crate::utils::error::ConfigError;
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,

    #[serde(default = "default_resource")]
    pub resource: String,

    pub endpoint: Option<String>,
}

fn default_assets_dir() -> String {
    "./assets".to_string()
}

fn default_resource() -> String {
    crate::core::repository::DEFAULT_RESOURCE.to_string()
}

impl FileConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        toml::from_str(&text).map_err(|source| ConfigError::Toml {
            path: path.display().to_string(),
            source,
        })
    }
}

impl CatalogConfig for FileConfig {
    fn assets_dir(&self) -> &str {
        &self.assets_dir
    }

    fn resource(&self) -> &str {
        &self.resource
    }

    fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        validate_catalog_config(self)
    }
}
