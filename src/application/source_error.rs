// Errors raised while reading a panel source. They never leave the loader.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{path} responded with status {status}")]
    Status { path: String, status: u16 },

    #[error("request for {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("asset {0} does not exist")]
    MissingAsset(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("spreadsheet could not be decoded: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("delimited text could not be parsed: {0}")]
    Text(#[from] csv::Error),

    #[error("bundled dataset is malformed: {0}")]
    Bundled(#[from] serde_json::Error),
}
