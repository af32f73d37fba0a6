use crate::domain::model::Movie;
use crate::utils::error::{CatalogResult, SourceError};
use async_trait::async_trait;

/// Reports whether the external source is currently reachable. Pure query;
/// every repository operation checks it before doing any work.
pub trait Connectivity: Send + Sync {
    fn is_available(&self) -> bool;
}

impl Connectivity for Box<dyn Connectivity> {
    fn is_available(&self) -> bool {
        self.as_ref().is_available()
    }
}

/// Supplies the raw text payload for a named resource. Does not interpret
/// content; fails with an IO-kind error when the resource cannot be opened
/// or fully read.
#[async_trait]
pub trait AssetStore: Send + Sync {
    async fn read(&self, name: &str) -> Result<String, SourceError>;
}

#[async_trait]
impl AssetStore for Box<dyn AssetStore> {
    async fn read(&self, name: &str) -> Result<String, SourceError> {
        self.as_ref().read(name).await
    }
}

pub trait CatalogConfig: Send + Sync {
    fn assets_dir(&self) -> &str;
    fn resource(&self) -> &str;
    fn endpoint(&self) -> Option<&str>;
}

/// Repository port consumed by upstream callers. Expected failure modes come
/// back as [`crate::utils::error::Failure`] values, never as panics.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn get_all(&self) -> CatalogResult<Vec<Movie>>;
    async fn get_by_id(&self, id: u64) -> CatalogResult<Movie>;
}
