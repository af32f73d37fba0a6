use crate::domain::ports::AssetStore;
use crate::utils::error::SourceError;
use async_trait::async_trait;
use std::path::PathBuf;

/// Asset store over a local directory. Resource names resolve relative to
/// the base directory.
#[derive(Debug, Clone)]
pub struct DirAssets {
    base_dir: PathBuf,
}

impl DirAssets {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

#[async_trait]
impl AssetStore for DirAssets {
    async fn read(&self, name: &str) -> Result<String, SourceError> {
        let path = self.base_dir.join(name);
        tracing::debug!("reading asset file: {}", path.display());

        std::fs::read_to_string(&path).map_err(|source| SourceError::Io {
            name: name.to_string(),
            source,
        })
    }
}

/// Asset store over an HTTP endpoint. Resource names are appended to the
/// base URL; non-2xx responses count as read failures.
#[derive(Debug, Clone)]
pub struct HttpAssets {
    base_url: String,
    client: reqwest::Client,
}

impl HttpAssets {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl AssetStore for HttpAssets {
    async fn read(&self, name: &str) -> Result<String, SourceError> {
        let url = format!("{}/{}", self.base_url, name);
        tracing::debug!("fetching asset: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| SourceError::Http {
                url: url.clone(),
                source,
            })?;

        response
            .text()
            .await
            .map_err(|source| SourceError::Http { url, source })
    }
}
