pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::toml_config::FileConfig;

pub use crate::adapters::assets::{DirAssets, HttpAssets};
pub use crate::adapters::connectivity::{Offline, Online};
pub use crate::core::repository::{AssetCatalog, DEFAULT_RESOURCE};
pub use crate::domain::model::{Genre, Movie};
pub use crate::domain::ports::{AssetStore, CatalogConfig, Connectivity, MovieRepository};
pub use crate::utils::error::{CatalogResult, ConfigError, Failure, ParseError, SourceError};
