use crate::core::mapper::map_movie;
use crate::core::records::parse_movies;
use crate::domain::model::Movie;
use crate::domain::ports::{AssetStore, Connectivity, MovieRepository};
use crate::utils::error::{CatalogResult, Failure};
use async_trait::async_trait;

/// Resource the repository reads when no explicit name is configured.
pub const DEFAULT_RESOURCE: &str = "popular_movies.json";

/// Movie repository over an injected asset store. Each call runs the full
/// guard -> read -> parse -> map pipeline against a fresh payload; the
/// repository itself holds no cross-call state, so a fixed payload makes
/// both operations deterministic and idempotent.
pub struct AssetCatalog<C: Connectivity, A: AssetStore> {
    connectivity: C,
    assets: A,
    resource: String,
}

impl<C: Connectivity, A: AssetStore> AssetCatalog<C, A> {
    pub fn new(connectivity: C, assets: A) -> Self {
        Self {
            connectivity,
            assets,
            resource: DEFAULT_RESOURCE.to_string(),
        }
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = resource.into();
        self
    }

    async fn load_movies(&self) -> CatalogResult<Vec<Movie>> {
        tracing::debug!("reading movie asset: {}", self.resource);
        let payload = self.assets.read(&self.resource).await?;

        let records = parse_movies(&payload)?;
        tracing::debug!("parsed {} raw records", records.len());

        let movies = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| map_movie(index, record))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(movies)
    }
}

#[async_trait]
impl<C: Connectivity, A: AssetStore> MovieRepository for AssetCatalog<C, A> {
    async fn get_all(&self) -> CatalogResult<Vec<Movie>> {
        if !self.connectivity.is_available() {
            return Err(Failure::NetworkUnavailable);
        }

        self.load_movies().await
    }

    async fn get_by_id(&self, id: u64) -> CatalogResult<Movie> {
        if !self.connectivity.is_available() {
            return Err(Failure::NetworkUnavailable);
        }

        let movies = self.load_movies().await?;

        // Count-then-branch instead of "take the single element and catch".
        let mut matching: Vec<Movie> = movies.into_iter().filter(|m| m.id == id).collect();
        match matching.len() {
            1 => Ok(matching.swap_remove(0)),
            matches => Err(Failure::Lookup { id, matches }),
        }
    }
}
