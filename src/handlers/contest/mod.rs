//! Contest administration handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::{middleware::auth::admin_auth_middleware, state::AppState};

/// Contest routes
///
/// Rankings and alerts are public (the venue screen renders them); the
/// dashboard and every mutating operation are admin only.
pub fn routes(state: AppState) -> Router<AppState> {
    let admin_routes = Router::new()
        .route("/dashboard", get(handler::dashboard))
        .route("/status", post(handler::set_status))
        .route("/reset", post(handler::reset))
        .route("/rankings/finalize", post(handler::finalize_rankings))
        .route_layer(middleware::from_fn_with_state(state, admin_auth_middleware));

    Router::new()
        .route("/status", get(handler::get_status))
        .route("/rankings", get(handler::rankings))
        .route("/alerts", get(handler::alerts))
        .merge(admin_routes)
}
