//! Authentication response DTOs

use serde::Serialize;

use crate::models::Participant;

/// Login response
///
/// Admin logins carry a JWT; participant logins carry the participant's
/// live state instead (their session is tracked server-side).
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub role: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant: Option<Participant>,
}

/// Logout response
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}
