//! Problem handlers

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

/// Problem routes
///
/// Listing is public (participants render statements from it); everything
/// that exposes or mutates test cases is admin only.
pub fn routes(state: AppState) -> Router<AppState> {
    let admin_routes = Router::new()
        .route("/", post(handler::create_problem))
        .route(
            "/{id}",
            get(handler::get_problem)
                .put(handler::update_problem)
                .delete(handler::delete_problem),
        )
        .route_layer(middleware::from_fn_with_state(state, admin_auth_middleware));

    Router::new()
        .route("/", get(handler::list_problems))
        .merge(admin_routes)
}
