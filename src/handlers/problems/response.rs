//! Problem response DTOs

use serde::Serialize;

use crate::models::{Problem, TestCase};

/// Problem list response
#[derive(Debug, Serialize)]
pub struct ProblemListResponse {
    pub problems: Vec<Problem>,
}

/// Problem detail response including test cases (admin only)
#[derive(Debug, Serialize)]
pub struct ProblemDetailResponse {
    #[serde(flatten)]
    pub problem: Problem,
    pub test_cases: Vec<TestCase>,
}

/// Deletion response
#[derive(Debug, Serialize)]
pub struct DeleteProblemResponse {
    pub message: String,
}
