use crate::core::state::AppState;
use crate::models::views::{DemoModeView, SiteLinks, TickerItem};
use crate::pages::site;
use axum::{extract::State, response::Json};
use std::sync::Arc;

/// GET /site/links
pub async fn links_handler(State(state): State<Arc<AppState>>) -> Json<SiteLinks> {
    Json(site::links(&state))
}

/// GET /site/ticker
pub async fn ticker_handler() -> Json<Vec<TickerItem>> {
    Json(site::ticker())
}

/// GET /site/demo-mode
pub async fn demo_mode_handler(State(state): State<Arc<AppState>>) -> Json<DemoModeView> {
    Json(site::demo_mode(&state).await)
}

/// POST /site/demo-mode
pub async fn demo_mode_toggle_handler(State(state): State<Arc<AppState>>) -> Json<DemoModeView> {
    Json(site::toggle_demo_mode(&state).await)
}
