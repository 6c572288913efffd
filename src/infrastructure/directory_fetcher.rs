// Directory asset fetcher - Reads static assets from local disk
use crate::application::asset_fetcher::AssetFetcher;
use crate::application::source_error::SourceError;
use async_trait::async_trait;
use bytes::Bytes;
use std::io::ErrorKind;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DirectoryAssetFetcher {
    root: PathBuf,
}

impl DirectoryAssetFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

#[async_trait]
impl AssetFetcher for DirectoryAssetFetcher {
    async fn fetch(&self, path: &str) -> Result<Bytes, SourceError> {
        let file = self.resolve(path);
        tracing::debug!("Reading panel asset {}", file.display());

        match tokio::fs::read(&file).await {
            Ok(data) => Ok(Bytes::from(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(SourceError::MissingAsset(path.to_string()))
            }
            Err(source) => Err(SourceError::Io {
                path: path.to_string(),
                source,
            }),
        }
    }
}
