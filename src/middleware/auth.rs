//! Authentication middleware
//!
//! Only the administrator carries a JWT; participant sessions are tracked in
//! the database. Admin-only routes sit behind [`admin_auth_middleware`],
//! which verifies the token and stashes an [`AdminUser`] in the request
//! extensions for handlers to extract.

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::AppError,
    services::{AuthService, auth_service::ROLE_ADMIN},
    state::AppState,
};

/// Authenticated administrator extracted from a verified JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub username: String,
}

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AdminUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Admin authentication middleware
pub async fn admin_auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let Some(auth_header) = auth_header else {
        debug!(path = %path, "Auth failed: No Authorization header");
        return Err(AppError::Unauthorized);
    };

    let Some(token) = auth_header.strip_prefix("Bearer ") else {
        debug!(path = %path, "Auth failed: Invalid Authorization format (expected 'Bearer <token>')");
        return Err(AppError::Unauthorized);
    };

    let claims = match AuthService::verify_token(token, &state.config().jwt.secret) {
        Ok(claims) => claims,
        Err(e) => {
            debug!(path = %path, error = ?e, "Auth failed: Token verification failed");
            return Err(e);
        }
    };

    if claims.role != ROLE_ADMIN {
        debug!(path = %path, sub = %claims.sub, role = %claims.role, "Auth failed: Admin role required");
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }

    debug!(path = %path, sub = %claims.sub, "Admin authenticated");

    request.extensions_mut().insert(AdminUser {
        username: claims.sub,
    });
    Ok(next.run(request).await)
}
