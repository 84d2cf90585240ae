//! savorlog-server library - router and shared state
//!
//! Exposed as a library so integration tests can drive the router
//! directly with `tower::ServiceExt::oneshot`.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod db;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
///
/// JSON API under /api, embedded web client at / and /static, health
/// endpoint at /health. CORS is permissive: the client may be served from
/// a dev server on another port.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    let api = Router::new()
        .route("/api", get(api::api_root))
        .route(
            "/api/recipes",
            get(api::list_recipes).post(api::create_recipe),
        )
        .route(
            "/api/recipes/:id",
            get(api::get_recipe)
                .put(api::update_recipe)
                .delete(api::delete_recipe),
        )
        .route(
            "/api/mealplan",
            get(api::list_meal_plan).post(api::schedule_meal),
        )
        .route(
            "/api/mealplan/:id",
            axum::routing::put(api::reschedule_meal).delete(api::unschedule_meal),
        );

    let client = Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/static/app.css", get(api::serve_app_css));

    Router::new()
        .merge(api)
        .merge(client)
        .merge(api::health_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
