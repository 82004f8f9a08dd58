//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.
//! Admin-only routes are guarded per domain with the admin auth middleware,
//! which needs the application state for token verification.

pub mod auth;
pub mod contest;
pub mod health;
pub mod participants;
pub mod problems;
pub mod submissions;
pub mod ws;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes())
        .nest("/problems", problems::routes(state.clone()))
        .nest("/submissions", submissions::routes())
        .nest("/participants", participants::routes(state.clone()))
        .nest("/contest", contest::routes(state))
        .merge(ws::routes())
}
