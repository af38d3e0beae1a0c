//! Route definitions for the Consignment Inventory Platform

use axum::{
    middleware::from_fn_with_state,
    routing::{get, patch, post},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
///
/// The application state is threaded into the auth middleware explicitly so
/// the JWT secret comes from injected configuration, not process globals.
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Auth routes (login public, profile protected)
        .nest("/auth", auth_routes(state.clone()))
        // Protected routes - product catalog
        .nest("/products", product_routes(state.clone()))
        // Protected routes - store directory
        .nest("/stores", store_routes(state.clone()))
        // Protected routes - user management
        .nest("/users", user_routes(state.clone()))
        // Protected routes - stock ledger
        .nest("/stock", stock_routes(state.clone()))
        // Protected routes - sales
        .nest("/sales", sales_routes(state.clone()))
        // Protected routes - distribution
        .nest("/distribution", distribution_routes(state.clone()))
        // Protected routes - reporting and dashboard
        .nest("/reports", report_routes(state.clone()))
        .nest("/dashboard", dashboard_routes(state))
}

/// Authentication routes
fn auth_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(handlers::me))
        .route_layer(from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/login", post(handlers::login))
        .merge(protected)
}

/// Product catalog routes (protected)
fn product_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/:product_id",
            axum::routing::put(handlers::update_product).delete(handlers::delete_product),
        )
        .route_layer(from_fn_with_state(state, auth_middleware))
}

/// Store directory routes (protected)
fn store_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_stores).post(handlers::create_store))
        .route(
            "/:store_id",
            get(handlers::get_store)
                .put(handlers::update_store)
                .delete(handlers::delete_store),
        )
        .route_layer(from_fn_with_state(state, auth_middleware))
}

/// User management routes (protected)
fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_users).post(handlers::create_user))
        .route(
            "/:user_id",
            axum::routing::put(handlers::update_user).delete(handlers::delete_user),
        )
        .route_layer(from_fn_with_state(state, auth_middleware))
}

/// Stock ledger routes (protected)
fn stock_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_stock))
        .route("/quantity", get(handlers::get_quantity))
        .route("/:stock_id", axum::routing::put(handlers::correct_stock))
        .route_layer(from_fn_with_state(state, auth_middleware))
}

/// Sales routes (protected)
fn sales_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_sales).post(handlers::record_sale))
        .route_layer(from_fn_with_state(state, auth_middleware))
}

/// Distribution routes (protected)
fn distribution_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_distributions).post(handlers::create_distribution),
        )
        .route(
            "/:distribution_id/complete",
            patch(handlers::complete_distribution),
        )
        .route_layer(from_fn_with_state(state, auth_middleware))
}

/// Reporting routes (protected)
fn report_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/sales", get(handlers::sales_report))
        .route_layer(from_fn_with_state(state, auth_middleware))
}

/// Dashboard routes (protected)
fn dashboard_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::dashboard_stats))
        .route_layer(from_fn_with_state(state, auth_middleware))
}
