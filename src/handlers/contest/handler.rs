//! Contest handler implementations

use axum::{Json, extract::State};

use crate::{
    error::AppResult, middleware::auth::AdminUser, services::ContestService, state::AppState,
};

use super::{
    request::SetStatusRequest,
    response::{
        AlertsResponse, DashboardResponse, RankingsResponse, ResetResponse, StatusResponse,
    },
};

/// Current contest status
pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: state.contest().status(),
    })
}

/// Admin dashboard
pub async fn dashboard(State(state): State<AppState>) -> AppResult<Json<DashboardResponse>> {
    let data = ContestService::dashboard(state.db()).await?;
    Ok(Json(DashboardResponse {
        status: state.contest().status(),
        participants: data.participants,
        recent_logs: data.recent_logs,
        total_problems: data.total_problems,
    }))
}

/// Apply a contest status transition
pub async fn set_status(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(payload): Json<SetStatusRequest>,
) -> AppResult<Json<StatusResponse>> {
    tracing::info!(admin = %admin.username, status = ?payload.status, "Status transition requested");
    let status = ContestService::set_status(state.db(), state.contest(), payload.status).await?;
    Ok(Json(StatusResponse { status }))
}

/// Snapshot the final rankings
pub async fn finalize_rankings(
    State(state): State<AppState>,
) -> AppResult<Json<RankingsResponse>> {
    let rankings = ContestService::finalize_rankings(state.db()).await?;
    Ok(Json(RankingsResponse { rankings }))
}

/// Read the final-ranking snapshot
pub async fn rankings(State(state): State<AppState>) -> AppResult<Json<RankingsResponse>> {
    let rankings = ContestService::rankings(state.db()).await?;
    Ok(Json(RankingsResponse { rankings }))
}

/// Persisted global alerts
pub async fn alerts(State(state): State<AppState>) -> AppResult<Json<AlertsResponse>> {
    let alerts = ContestService::alerts(state.db()).await?;
    Ok(Json(AlertsResponse { alerts }))
}

/// Full contest reset
pub async fn reset(
    State(state): State<AppState>,
    admin: AdminUser,
) -> AppResult<Json<ResetResponse>> {
    tracing::info!(admin = %admin.username, "Contest reset requested");
    ContestService::reset(state.db(), state.contest(), state.events()).await?;
    Ok(Json(ResetResponse {
        message: "Contest data has been reset".to_string(),
    }))
}
