use crate::core::error::PageError;
use crate::core::state::AppState;
use crate::models::views::ActivityItem;
use crate::pages::dashboard::{self, DashboardPage};
use axum::{
    extract::State,
    response::{IntoResponse, Json, Redirect, Response},
};
use std::sync::Arc;

/// Dashboard for the signed-in operator, or a redirect to the login page
///
/// GET /dashboard
pub async fn dashboard_handler(State(state): State<Arc<AppState>>) -> Result<Response, PageError> {
    Ok(match dashboard::load(&state).await? {
        DashboardPage::Redirect(path) => Redirect::to(path).into_response(),
        DashboardPage::Render(view) => Json(view).into_response(),
    })
}

/// POST /dashboard/logout
pub async fn logout_handler(State(state): State<Arc<AppState>>) -> Result<Redirect, PageError> {
    Ok(Redirect::to(dashboard::logout(&state)?))
}

/// Inject a fake sensor event into the activity feed
///
/// POST /dashboard/mock-sensor
pub async fn mock_sensor_handler(State(state): State<Arc<AppState>>) -> Json<ActivityItem> {
    Json(dashboard::mock_sensor(&state))
}
