use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::{
    api::handlers::{expenses::*, health},
    utils::app_config::AppConfig,
};

pub fn build_router(app_config: AppConfig) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Derived views and maintenance
        .route("/api/expenses/summary", get(get_summary))
        .route("/api/expenses/filter", get(filter_expenses))
        .route("/api/expenses/sorted", get(sort_expenses))
        .route("/api/expenses/backup", post(backup_expenses))
        // CRUD
        .route("/api/expenses", get(get_expenses).post(create_expense))
        .route(
            "/api/expenses/:id",
            put(update_expense).delete(delete_expense),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_config)
}
