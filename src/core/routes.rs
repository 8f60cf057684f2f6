// HTTP routes configuration

use crate::core::state::AppState;
use crate::handlers::{auth, dashboard, site, upload, verify, wallet};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.server.max_upload_bytes);

    Router::new()
        .route("/health", get(crate::handlers::health::health_handler))

        // Site chrome shared by every page
        .route("/site/links", get(site::links_handler))
        .route("/site/ticker", get(site::ticker_handler))
        .route(
            "/site/demo-mode",
            get(site::demo_mode_handler).post(site::demo_mode_toggle_handler),
        )

        // Wallet connector
        .route("/wallet", get(wallet::wallet_view_handler))
        .route("/wallet/button", post(wallet::wallet_button_handler))
        .route("/wallet/connect", post(wallet::wallet_connect_handler))
        .route("/wallet/disconnect", post(wallet::wallet_disconnect_handler))

        // Login page
        .route(
            "/login",
            get(auth::login_page_handler).post(auth::login_submit_handler),
        )
        .route("/login/web3", post(auth::web3_login_handler))

        // Dashboard page
        .route("/dashboard", get(dashboard::dashboard_handler))
        .route("/dashboard/logout", post(dashboard::logout_handler))
        .route("/dashboard/mock-sensor", post(dashboard::mock_sensor_handler))

        // Upload page
        .route("/upload/preview", post(upload::upload_preview_handler))
        .route("/upload", post(upload::upload_submit_handler))

        // Verify page
        .route("/verify/preview", post(verify::verify_preview_handler))
        .route("/verify", post(verify::verify_submit_handler))

        // 404 fallback for all unmatched routes
        .fallback(crate::handlers::fallback::fallback_handler)
        .layer(body_limit)

        .with_state(state)
}
