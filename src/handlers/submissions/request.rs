//! Submission request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{
    MAX_PARTICIPANT_NAME_LENGTH, MAX_SOURCE_CODE_SIZE, MIN_PARTICIPANT_NAME_LENGTH,
};

/// Submission request
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitRequest {
    #[validate(length(min = MIN_PARTICIPANT_NAME_LENGTH, max = MAX_PARTICIPANT_NAME_LENGTH))]
    pub participant: String,

    #[validate(length(min = 1))]
    pub problem_id: String,

    #[validate(length(min = 1, max = MAX_SOURCE_CODE_SIZE))]
    pub code: String,
}
