use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{balances, customers, health, welcome};
use crate::api::state::AppState;

/// Static file mount: URL prefix and directory served under it
#[derive(Debug, Clone)]
pub struct StaticFiles {
    pub prefix: String,
    pub dir: String,
}

/// Build the application router
pub fn router(state: AppState, static_files: Option<StaticFiles>) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Demo routes
        .route("/", get(welcome::welcome).post(welcome::welcome))
        .route("/balances", post(balances::get_balance))
        // Customer routes
        .route(
            "/customers",
            get(customers::list_customers).post(customers::create_customer),
        )
        .route(
            "/customers/:id",
            get(customers::get_customer)
                .put(customers::update_customer)
                .delete(customers::delete_customer),
        );

    if let Some(files) = static_files {
        app = app.nest_service(&files.prefix, ServeDir::new(&files.dir));
    }

    app
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
