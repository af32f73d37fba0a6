pub mod mapper;
pub mod records;
pub mod repository;

pub use crate::domain::model::{Genre, Movie};
pub use crate::domain::ports::{AssetStore, Connectivity, MovieRepository};
pub use crate::utils::error::CatalogResult;
