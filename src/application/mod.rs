// Application layer - Source abstractions and the fallback chain
pub mod asset_fetcher;
pub mod panel_loader;
pub mod panel_source;
pub mod source_error;
