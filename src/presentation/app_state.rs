// Application state for HTTP handlers
use crate::application::panel_loader::PanelDataLoader;

#[derive(Clone)]
pub struct AppState {
    pub panel_loader: PanelDataLoader,
}
