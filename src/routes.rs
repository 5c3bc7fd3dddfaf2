// routes.rs
use std::sync::Arc;

use axum::{middleware, routing::get, Extension, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::{
    handler::{
        bookings::bookings_handler, categories::categories_handler,
        contractors::contractors_handler, customers::customers_handler,
        services::services_handler, users::users_handler,
    },
    middleware::cache_layer,
    AppState,
};

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "message": "Server is running"
    }))
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_route = Router::new()
        .nest("/categories", categories_handler())
        .nest("/services", services_handler())
        .nest("/contractors", contractors_handler())
        .nest("/customers", customers_handler())
        .nest("/bookings", bookings_handler())
        .nest("/users", users_handler())
        .layer(middleware::from_fn(cache_layer))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_route)
}
