//! Problem request DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    constants::{MAX_PROBLEM_STATEMENT_LENGTH, MAX_PROBLEM_TITLE_LENGTH},
    db::repositories::NewTestCase,
};

/// A test case as supplied by the admin UI
#[derive(Debug, Serialize, Deserialize)]
pub struct TestCaseInput {
    /// Empty or absent input means the program is run with no stdin.
    pub input: Option<String>,
    pub expected_output: String,
}

impl From<TestCaseInput> for NewTestCase {
    fn from(tc: TestCaseInput) -> Self {
        NewTestCase {
            input: tc.input,
            expected_output: tc.expected_output,
        }
    }
}

/// Problem creation request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProblemRequest {
    #[validate(length(min = 1, max = MAX_PROBLEM_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(max = MAX_PROBLEM_STATEMENT_LENGTH))]
    pub statement: String,

    #[validate(length(min = 1, message = "at least one test case is required"))]
    pub test_cases: Vec<TestCaseInput>,
}

/// Problem update request (test cases are replaced wholesale)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProblemRequest {
    #[validate(length(min = 1, max = MAX_PROBLEM_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(max = MAX_PROBLEM_STATEMENT_LENGTH))]
    pub statement: String,

    #[validate(length(min = 1, message = "at least one test case is required"))]
    pub test_cases: Vec<TestCaseInput>,
}
