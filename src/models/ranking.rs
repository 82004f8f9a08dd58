//! Final ranking model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the finalized ranking snapshot.
///
/// Written by the administrative finalize action and independent of live
/// participant state from then on.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct FinalRanking {
    pub id: i64,
    pub rank: i64,
    pub name: String,
    pub score: i64,
}
