//! Problem handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{error::AppResult, services::ProblemService, state::AppState};

use super::{
    request::{CreateProblemRequest, UpdateProblemRequest},
    response::{DeleteProblemResponse, ProblemDetailResponse, ProblemListResponse},
};

/// List all problems in solve order
pub async fn list_problems(State(state): State<AppState>) -> AppResult<Json<ProblemListResponse>> {
    let problems = ProblemService::list(state.db()).await?;
    Ok(Json(ProblemListResponse { problems }))
}

/// Fetch a single problem with its test cases
pub async fn get_problem(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProblemDetailResponse>> {
    let (problem, test_cases) = ProblemService::detail(state.db(), &id).await?;
    Ok(Json(ProblemDetailResponse {
        problem,
        test_cases,
    }))
}

/// Create a problem at the next position
pub async fn create_problem(
    State(state): State<AppState>,
    Json(payload): Json<CreateProblemRequest>,
) -> AppResult<(StatusCode, Json<ProblemDetailResponse>)> {
    payload.validate()?;

    let test_cases = payload.test_cases.into_iter().map(Into::into).collect();
    let problem = ProblemService::create(
        state.db(),
        state.events(),
        &payload.title,
        &payload.statement,
        test_cases,
    )
    .await?;
    let (problem, test_cases) = ProblemService::detail(state.db(), &problem.id).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProblemDetailResponse {
            problem,
            test_cases,
        }),
    ))
}

/// Update a problem, replacing its test cases
pub async fn update_problem(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateProblemRequest>,
) -> AppResult<Json<ProblemDetailResponse>> {
    payload.validate()?;

    let test_cases = payload.test_cases.into_iter().map(Into::into).collect();
    ProblemService::update(
        state.db(),
        state.events(),
        &id,
        &payload.title,
        &payload.statement,
        test_cases,
    )
    .await?;
    let (problem, test_cases) = ProblemService::detail(state.db(), &id).await?;

    Ok(Json(ProblemDetailResponse {
        problem,
        test_cases,
    }))
}

/// Delete a problem
pub async fn delete_problem(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteProblemResponse>> {
    ProblemService::delete(state.db(), state.events(), &id).await?;
    Ok(Json(DeleteProblemResponse {
        message: format!("Problem {} deleted", id),
    }))
}
