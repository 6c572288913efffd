// HTTP request handlers
use crate::application::panel_loader::LoadOutcome;
use crate::domain::panel::PanelPage;
use crate::presentation::app_state::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Panel list for the page. Always succeeds; the list may be empty.
pub async fn list_panels(State(state): State<Arc<AppState>>) -> Json<PanelPage> {
    let (page, outcome) = state.panel_loader.load_with_outcome().await;

    match outcome {
        LoadOutcome::Source(source) => {
            tracing::info!("Serving {} panels from {}", page.panels.len(), source);
        }
        LoadOutcome::Exhausted => {
            tracing::info!("Serving empty panel list");
        }
    }

    Json(page)
}
