//! Log record model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Append-only contest log line (admin dashboard).
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct LogRecord {
    pub id: i64,
    pub message: String,
    pub created_at: String,
}
