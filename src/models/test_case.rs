//! Test case model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Test case database model.
///
/// Belongs to exactly one problem and is deleted with it. Rows are judged in
/// insertion (`id`) order. `input` may be `NULL`: the submitted program must
/// then observe *no* input source at all, not an empty one.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TestCase {
    pub id: i64,
    pub problem_id: String,
    pub input: Option<String>,
    pub expected_output: String,
}

impl TestCase {
    /// Whether this test case feeds anything to the program's stdin.
    pub fn has_input(&self) -> bool {
        self.input.as_deref().is_some_and(|s| !s.is_empty())
    }
}
