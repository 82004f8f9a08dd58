//! Submission handler implementations

use axum::{Json, extract::State};
use validator::Validate;

use crate::{error::AppResult, judge::Verdict, state::AppState};

use super::request::SubmitRequest;

/// Submit source code for evaluation
///
/// The verdict body always answers with `{ success, message }`; rejections
/// that are part of normal contest flow (wrong answer, out-of-order, contest
/// not running) are 200s, not errors.
pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<SubmitRequest>,
) -> AppResult<Json<Verdict>> {
    payload.validate()?;

    let verdict = state
        .judge()
        .evaluate(&payload.participant, &payload.problem_id, &payload.code)
        .await?;

    Ok(Json(verdict))
}
