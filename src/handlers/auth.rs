use crate::core::error::PageError;
use crate::core::state::AppState;
use crate::models::views::{AuthOutcome, AuthPageView};
use crate::pages::auth;
use crate::validation::params::{AuthForm, AuthMode};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ModeQuery {
    #[serde(default)]
    pub mode: AuthMode,
}

/// Mode switch text for the login page
///
/// GET /login?mode=<login|register>
pub async fn login_page_handler(Query(query): Query<ModeQuery>) -> Json<AuthPageView> {
    Json(auth::page_view(query.mode))
}

fn outcome_status(outcome: &AuthOutcome) -> StatusCode {
    if outcome.success {
        StatusCode::OK
    } else if outcome.auth_error.as_deref() == Some(auth::ACCOUNT_EXISTS) {
        StatusCode::CONFLICT
    } else if outcome.auth_error.is_some() {
        StatusCode::UNAUTHORIZED
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    }
}

/// Submit the login / registration form
///
/// POST /login with a JSON `{mode, email, password, remember_me}` body
pub async fn login_submit_handler(
    State(state): State<Arc<AppState>>,
    Json(form): Json<AuthForm>,
) -> Result<Response, PageError> {
    let outcome = auth::submit(&state, form).await?;

    Ok((outcome_status(&outcome), Json(outcome)).into_response())
}

/// Wallet-only sign in
///
/// POST /login/web3
pub async fn web3_login_handler(State(state): State<Arc<AppState>>) -> Json<AuthOutcome> {
    Json(auth::web3_login(&state).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{read_json, send, MockChain};
    use axum::http::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_page_modes() {
        let mock = MockChain::start().await;
        let state = Arc::new(mock.app_state(false));

        let view: AuthPageView = read_json(send(&state, Method::GET, "/login", None).await).await;
        assert_eq!(view.mode, "login");
        assert!(view.meta.starts_with("Login with an existing node operator account."));

        let view: AuthPageView =
            read_json(send(&state, Method::GET, "/login?mode=register", None).await).await;
        assert_eq!(view.mode, "register");
    }

    #[tokio::test]
    async fn test_submit_statuses() {
        let mock = MockChain::start().await;
        let state = Arc::new(mock.app_state(false));
        let body = |email: &str, password: &str, mode: &str| {
            Some(json!({"mode": mode, "email": email, "password": password}))
        };

        let response = send(&state, Method::POST, "/login", body("bad", "secret1", "register")).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = send(&state, Method::POST, "/login", body("a@lab.org", "secret1", "register")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let outcome: AuthOutcome = read_json(response).await;
        assert_eq!(outcome.redirect.as_deref(), Some("/dashboard"));

        let response = send(&state, Method::POST, "/login", body("a@lab.org", "secret1", "register")).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = send(&state, Method::POST, "/login", body("a@lab.org", "wrong-pw", "login")).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let outcome: AuthOutcome = read_json(response).await;
        assert!(outcome.password_invalid);
    }

    #[tokio::test]
    async fn test_web3_login() {
        let mock = MockChain::start().await;
        let state = Arc::new(mock.app_state(true));

        let outcome: AuthOutcome =
            read_json(send(&state, Method::POST, "/login/web3", None).await).await;
        assert_eq!(outcome.redirect.as_deref(), Some("/dashboard"));
        assert!(state.session.lock().await.can_sign());
    }
}
