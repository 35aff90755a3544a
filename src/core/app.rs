use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Router};

use crate::core::middleware;
use crate::features::auth::TokenService;
use crate::features::customers::{routes as customers_routes, CustomerService};

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// API routes: public registration, token-protected profile and health check.
///
/// Docs and the tracing/CORS layers are added by `main`.
pub fn api_router(customer_service: Arc<CustomerService>, tokens: Arc<TokenService>) -> Router {
    let protected_routes = customers_routes::protected_routes(Arc::clone(&customer_service))
        .route_layer(axum::middleware::from_fn_with_state(
            tokens,
            middleware::auth_middleware,
        ));

    Router::new()
        .merge(customers_routes::public_routes(customer_service))
        .merge(protected_routes)
        .route("/health", get(health_check))
}
