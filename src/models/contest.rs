//! Contest status model

use serde::{Deserialize, Serialize};

/// Global contest state.
///
/// The lifecycle is `Waiting → InProgress → Finished`; a reset returns a
/// finished contest to `Waiting`. Submissions are only accepted while
/// `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContestStatus {
    Waiting,
    InProgress,
    Finished,
}

impl ContestStatus {
    /// Whether submissions are currently admissible.
    pub fn accepts_submissions(&self) -> bool {
        matches!(self, ContestStatus::InProgress)
    }
}

impl std::fmt::Display for ContestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ContestStatus::Waiting => "Waiting",
            ContestStatus::InProgress => "InProgress",
            ContestStatus::Finished => "Finished",
        };
        write!(f, "{}", s)
    }
}
