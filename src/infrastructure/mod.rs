// Infrastructure layer - Asset access, decoders and configuration
pub mod bundled_source;
pub mod config;
pub mod directory_fetcher;
pub mod http_fetcher;
pub mod spreadsheet_source;
pub mod text_source;
