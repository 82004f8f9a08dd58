//! Authentication request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_PARTICIPANT_NAME_LENGTH, MIN_PARTICIPANT_NAME_LENGTH};

/// Login request, used by both the administrator and participants.
///
/// The `role` field selects the credential check: `"admin"` compares the
/// username/password pair against the configured admin account, anything
/// else is treated as a participant login against the shared password.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default = "default_role")]
    pub role: String,

    #[validate(length(min = MIN_PARTICIPANT_NAME_LENGTH, max = MAX_PARTICIPANT_NAME_LENGTH))]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,
}

fn default_role() -> String {
    "participant".to_string()
}

/// Participant logout request
#[derive(Debug, Deserialize, Validate)]
pub struct LogoutRequest {
    #[validate(length(min = MIN_PARTICIPANT_NAME_LENGTH, max = MAX_PARTICIPANT_NAME_LENGTH))]
    pub name: String,
}
