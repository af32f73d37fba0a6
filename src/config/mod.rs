pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::repository::DEFAULT_RESOURCE;
use crate::domain::ports::CatalogConfig;
use crate::utils::error::ConfigError;
use crate::utils::validation;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "movie-catalog")]
#[command(about = "Fetches a movie catalog and looks up single titles")]
pub struct CliConfig {
    /// Movie id to look up; fetches the whole catalog when omitted
    #[arg(long)]
    pub movie_id: Option<u64>,

    #[arg(long, default_value = "./assets")]
    pub assets_dir: String,

    #[arg(long, default_value = DEFAULT_RESOURCE)]
    pub resource: String,

    /// Fetch assets from this base URL instead of the local directory
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Pretend the source is unreachable
    #[arg(long)]
    pub offline: bool,

    /// TOML config file; replaces the asset flags above
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CatalogConfig for CliConfig {
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

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        validate_catalog_config(self)
    }
}

pub(crate) fn validate_catalog_config(config: &dyn CatalogConfig) -> Result<(), ConfigError> {
    validation::validate_path("assets_dir", config.assets_dir())?;
    validation::validate_non_empty_string("resource", config.resource())?;
    if let Some(endpoint) = config.endpoint() {
        validation::validate_url("endpoint", endpoint)?;
    }
    Ok(())
}
