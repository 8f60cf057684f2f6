use crate::core::error::PageError;
use crate::core::state::AppState;
use crate::models::views::WalletView;
use crate::pages::wallet;
use axum::{extract::State, response::Json};
use std::sync::Arc;

/// Current button label and dropdown
///
/// GET /wallet
pub async fn wallet_view_handler(State(state): State<Arc<AppState>>) -> Json<WalletView> {
    let session = state.session.lock().await;
    Json(wallet::view(&session))
}

/// Header button click
///
/// POST /wallet/button
pub async fn wallet_button_handler(State(state): State<Arc<AppState>>) -> Json<WalletView> {
    Json(wallet::button_click(&state).await)
}

/// POST /wallet/connect
pub async fn wallet_connect_handler(State(state): State<Arc<AppState>>) -> Json<WalletView> {
    match wallet::connect(&state).await {
        Ok(view) => Json(view),
        Err(e) => {
            tracing::warn!(error = %e, "Wallet connection failed");
            let mut view = wallet::view(&*state.session.lock().await);
            view.notice = Some(e.to_string());
            Json(view)
        }
    }
}

/// POST /wallet/disconnect
pub async fn wallet_disconnect_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<WalletView>, PageError> {
    Ok(Json(wallet::disconnect(&state).await?))
}
