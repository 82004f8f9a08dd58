//! Participant response DTOs

use serde::Serialize;

/// Kick response
#[derive(Debug, Serialize)]
pub struct KickResponse {
    pub message: String,
}
