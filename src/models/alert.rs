//! Global alert model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted contest-wide banner (currently only first-blood alerts).
/// Stored so clients that connect late can still show past alerts.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct GlobalAlert {
    pub id: i64,
    pub message: String,
    pub kind: String,
}
