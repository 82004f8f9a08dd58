//! Contest request DTOs

use serde::Deserialize;

use crate::models::ContestStatus;

/// Contest status transition request
#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: ContestStatus,
}
