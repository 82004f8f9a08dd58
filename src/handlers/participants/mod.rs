//! Participant handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{
    Router, middleware,
    routing::{delete, get},
};

use crate::{middleware::auth::admin_auth_middleware, state::AppState};

/// Participant routes
pub fn routes(state: AppState) -> Router<AppState> {
    let admin_routes = Router::new()
        .route("/{name}", delete(handler::kick_participant))
        .route_layer(middleware::from_fn_with_state(state, admin_auth_middleware));

    Router::new()
        .route("/{name}/status", get(handler::participant_status))
        .merge(admin_routes)
}
