//! First blood model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// First-blood record: the first participant to solve a problem.
///
/// At most one row exists per problem; the primary key on `problem_id` is
/// what makes the claim atomic.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct FirstBlood {
    pub problem_id: String,
    pub participant: String,
}
