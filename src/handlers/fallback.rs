use crate::core::error::PageError;
use axum::{
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
};

pub async fn fallback_handler(headers: HeaderMap) -> Response {
    // Check if this is a browser request
    let user_agent = headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let is_browser = user_agent.contains("Mozilla")
        || user_agent.contains("Chrome")
        || user_agent.contains("Safari")
        || user_agent.contains("Firefox")
        || user_agent.contains("Edge");

    if is_browser {
        let html = "Nothing anchored here. Try /login, /dashboard, /upload or /verify.";

        return Html(html).into_response();
    }

    PageError::InvalidParameter(
        "Invalid endpoint. Pages: /login, /dashboard, /upload, /verify; see also /wallet, /site/links, /health"
            .to_string(),
    )
    .into_response()
}
