//! Problem model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Problem database model.
///
/// `position` is order-significant: participants solve problems in ascending
/// position order, and a participant's unlock index refers to it. The public
/// identifier is derived from the position (`p1`, `p2`, ...).
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    pub position: i64,
    pub title: String,
    pub statement: String,
}

impl Problem {
    /// Build the public identifier for a given position.
    pub fn id_for_position(position: i64) -> String {
        format!("p{}", position)
    }

    /// Parse a public identifier (`p3`) back into its position.
    pub fn position_from_id(id: &str) -> Option<i64> {
        id.strip_prefix('p')?.parse().ok()
    }
}
