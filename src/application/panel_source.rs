// Source trait for raw panel rows
use crate::application::source_error::SourceError;
use crate::domain::cell::RawRow;
use async_trait::async_trait;

#[async_trait]
pub trait PanelSource: Send + Sync {
    /// Short label used in log lines
    fn name(&self) -> &str;

    /// Read every row the source holds, in source order.
    async fn load_rows(&self) -> Result<Vec<RawRow>, SourceError>;
}
