// HTTP asset fetcher - Reads static assets from the web origin
use crate::application::asset_fetcher::AssetFetcher;
use crate::application::source_error::SourceError;
use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpAssetFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAssetFetcher {
    pub fn new(base_url: String, timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl AssetFetcher for HttpAssetFetcher {
    async fn fetch(&self, path: &str) -> Result<Bytes, SourceError> {
        let url = self.build_url(path);
        tracing::debug!("Fetching panel asset {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| SourceError::Transport {
                path: path.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(SourceError::Status {
                path: path.to_string(),
                status: response.status().as_u16(),
            });
        }

        response.bytes().await.map_err(|source| SourceError::Transport {
            path: path.to_string(),
            source,
        })
    }
}
