// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;
#[cfg(test)]
mod test_support;

use std::{sync::Arc, time::Duration};
use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::application::asset_fetcher::AssetFetcher;
use crate::application::panel_loader::PanelDataLoader;
use crate::infrastructure::bundled_source::BundledSource;
use crate::infrastructure::config::{
    load_panels_config, LoaderSettings, SourceKind, SourceSettings,
};
use crate::infrastructure::directory_fetcher::DirectoryAssetFetcher;
use crate::infrastructure::http_fetcher::HttpAssetFetcher;
use crate::infrastructure::spreadsheet_source::SpreadsheetSource;
use crate::infrastructure::text_source::DelimitedTextSource;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{health_check, list_panels};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_panels_config()?;

    // Create fetcher and sources (infrastructure layer)
    let fetcher = build_fetcher(&config.sources)?;

    // Create loader (application layer)
    let panel_loader = build_loader(fetcher, &config.sources, &config.loader);
    tracing::info!("Panel loader using {:?} policy", config.loader.policy);

    let state = Arc::new(AppState { panel_loader });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/panels", get(list_panels))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    tracing::info!("Starting panel-catalog service on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}

fn build_fetcher(sources: &SourceSettings) -> anyhow::Result<Arc<dyn AssetFetcher>> {
    let fetcher: Arc<dyn AssetFetcher> = match sources.kind {
        SourceKind::Http => Arc::new(HttpAssetFetcher::new(
            sources.base_url.clone(),
            Duration::from_secs(sources.request_timeout_secs),
        )?),
        SourceKind::Directory => Arc::new(DirectoryAssetFetcher::new(sources.root.clone())),
    };
    Ok(fetcher)
}

fn build_loader(
    fetcher: Arc<dyn AssetFetcher>,
    sources: &SourceSettings,
    loader: &LoaderSettings,
) -> PanelDataLoader {
    let spreadsheet = SpreadsheetSource::new(fetcher.clone(), sources.spreadsheet_path.clone());
    let text = DelimitedTextSource::new(fetcher, sources.text_path.clone(), loader.text_dialect);

    PanelDataLoader::for_policy(
        loader.policy,
        Arc::new(spreadsheet),
        Arc::new(text),
        Arc::new(BundledSource::default()),
    )
}
