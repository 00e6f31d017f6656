use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers;
use crate::state::AppState;

pub mod health;

/// Create the main router
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Product routes
        .route("/products", post(handlers::product::create).get(handlers::product::list))
        // Menu group routes
        .route(
            "/menu-groups",
            post(handlers::menu_group::create).get(handlers::menu_group::list),
        )
        // Menu routes
        .route("/menus", post(handlers::menu::create).get(handlers::menu::list))
        // Order routes
        .route("/orders", post(handlers::order::create).get(handlers::order::list))
        .route(
            "/orders/:order_id/order-status",
            put(handlers::order::change_order_status),
        )
        // Order table routes
        .route("/tables", post(handlers::table::create).get(handlers::table::list))
        .route("/tables/:order_table_id/empty", put(handlers::table::change_empty))
        .route(
            "/tables/:order_table_id/number-of-guests",
            put(handlers::table::change_number_of_guests),
        )
        // Table group routes
        .route("/table-groups", post(handlers::table_group::create))
        .route("/table-groups/:table_group_id", delete(handlers::table_group::ungroup));

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
