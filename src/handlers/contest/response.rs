//! Contest response DTOs

use serde::Serialize;

use crate::models::{ContestStatus, FinalRanking, GlobalAlert, Participant};

/// Current contest status
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: ContestStatus,
}

/// Admin dashboard response
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub status: ContestStatus,
    pub participants: Vec<Participant>,
    pub recent_logs: Vec<String>,
    pub total_problems: i64,
}

/// Final-ranking snapshot response
#[derive(Debug, Serialize)]
pub struct RankingsResponse {
    pub rankings: Vec<FinalRanking>,
}

/// Global alerts response
#[derive(Debug, Serialize)]
pub struct AlertsResponse {
    pub alerts: Vec<GlobalAlert>,
}

/// Reset response
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub message: String,
}
