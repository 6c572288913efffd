// Fetcher trait for the static assets panel data is read from
use crate::application::source_error::SourceError;
use async_trait::async_trait;
use bytes::Bytes;

#[async_trait]
pub trait AssetFetcher: Send + Sync {
    /// Fetch the raw bytes of the asset at `path` (e.g. `/panels.xlsx`).
    /// Any non-success outcome is an error.
    async fn fetch(&self, path: &str) -> Result<Bytes, SourceError>;
}
