//! Participant handler implementations

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    error::AppResult, models::Participant, services::ParticipantService, state::AppState,
};

use super::response::KickResponse;

/// Fetch a participant's live status
pub async fn participant_status(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Participant>> {
    let participant = ParticipantService::status(state.db(), &name).await?;
    Ok(Json(participant))
}

/// Kick a participant (admin)
pub async fn kick_participant(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<KickResponse>> {
    ParticipantService::kick(state.db(), state.events(), &name).await?;
    Ok(Json(KickResponse {
        message: format!("Participant '{}' kicked", name),
    }))
}
