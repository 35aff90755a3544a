use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::customers::handlers;
use crate::features::customers::services::CustomerService;

/// Public customer routes (no authentication required)
pub fn public_routes(service: Arc<CustomerService>) -> Router {
    Router::new()
        .route("/api/customers", post(handlers::register_customer))
        .with_state(service)
}

/// Customer routes that need a verified session token
pub fn protected_routes(service: Arc<CustomerService>) -> Router {
    Router::new()
        .route("/api/customers/me", get(handlers::get_current_customer))
        .with_state(service)
}
