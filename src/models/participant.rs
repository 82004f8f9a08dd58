//! Participant model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Participant database model.
///
/// `unlock_index` is the 1-based position of the lowest unsolved problem;
/// submissions are only accepted for exactly that position. It only ever
/// increases, except on a full contest reset which deletes the row.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub score: i64,
    pub unlock_index: i64,
    pub is_logged_in: bool,
}

impl Participant {
    /// Where a submitted problem position sits relative to this participant's
    /// progression.
    pub fn classify_position(&self, position: i64) -> PositionClass {
        if position < self.unlock_index {
            PositionClass::AlreadySolved
        } else if position > self.unlock_index {
            PositionClass::OutOfOrder
        } else {
            PositionClass::Current
        }
    }
}

/// Relation of a submission's problem position to the unlock index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionClass {
    /// Strictly below the unlock index: solved before
    AlreadySolved,
    /// Exactly the unlock index: admissible
    Current,
    /// Above the unlock index: attempted too early
    OutOfOrder,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(unlock_index: i64) -> Participant {
        Participant {
            name: "alice".to_string(),
            score: 0,
            unlock_index,
            is_logged_in: true,
        }
    }

    #[test]
    fn test_classify_position() {
        let p = participant(3);
        assert_eq!(p.classify_position(1), PositionClass::AlreadySolved);
        assert_eq!(p.classify_position(2), PositionClass::AlreadySolved);
        assert_eq!(p.classify_position(3), PositionClass::Current);
        assert_eq!(p.classify_position(4), PositionClass::OutOfOrder);
    }
}
