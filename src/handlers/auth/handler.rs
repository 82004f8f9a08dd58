//! Authentication handler implementations

use axum::{Json, extract::State};
use validator::Validate;

use crate::{
    error::AppResult,
    services::{AuthService, auth_service::ROLE_ADMIN},
    state::AppState,
};

use super::{
    request::{LoginRequest, LogoutRequest},
    response::{LoginResponse, LogoutResponse},
};

/// Login as admin or participant
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    payload.validate()?;

    if payload.role == ROLE_ADMIN {
        let token = AuthService::login_admin(
            state.db(),
            state.config(),
            &payload.username,
            &payload.password,
        )
        .await?;

        return Ok(Json(LoginResponse {
            role: ROLE_ADMIN.to_string(),
            token: Some(token),
            participant: None,
        }));
    }

    let participant = AuthService::login_participant(
        state.db(),
        state.events(),
        state.config(),
        &payload.username,
        &payload.password,
    )
    .await?;

    Ok(Json(LoginResponse {
        role: "participant".to_string(),
        token: None,
        participant: Some(participant),
    }))
}

/// Log a participant out
pub async fn logout(
    State(state): State<AppState>,
    Json(payload): Json<LogoutRequest>,
) -> AppResult<Json<LogoutResponse>> {
    payload.validate()?;

    AuthService::logout_participant(state.db(), state.events(), &payload.name).await?;

    Ok(Json(LogoutResponse {
        message: "Logged out".to_string(),
    }))
}
