//! UI serving routes
//!
//! Serves the static HTML/JS/CSS web client embedded in the binary

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

const INDEX_HTML: &str = include_str!("../ui/index.html");
const APP_JS: &str = include_str!("../ui/app.js");
const APP_CSS: &str = include_str!("../ui/app.css");

/// GET /
///
/// Serves the main UI page
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /static/app.js
///
/// Serves the JavaScript application
pub async fn serve_app_js() -> Response {
    (
        StatusCode::OK,
        [("content-type", "application/javascript")],
        APP_JS,
    )
        .into_response()
}

/// GET /static/app.css
pub async fn serve_app_css() -> Response {
    (StatusCode::OK, [("content-type", "text/css")], APP_CSS).into_response()
}
