//! Verdict types and judging-failure taxonomy
//!
//! A failed compilation, a wrong answer, or a crashing program are expected
//! outcomes of judging, not errors: they become a [`Verdict`] with
//! `success: false`. Infrastructure problems (Docker unreachable, filesystem
//! failures) travel as `anyhow::Error` and are collapsed into a generic
//! server-error verdict at the pipeline boundary.

use serde::{Deserialize, Serialize};

/// How a sandboxed run failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    /// Wall-clock limit exceeded
    Timeout,
    /// Non-zero exit or killed by signal
    Crash,
    /// Killed by the memory limit
    ResourceLimit,
}

/// Why a submission was rejected by the evaluation itself.
#[derive(Debug, Clone, thiserror::Error)]
pub enum JudgeFailure {
    /// Toolchain rejected the source (or compilation timed out; the two are
    /// deliberately indistinguishable to the participant)
    #[error("compilation failed")]
    Compile {
        /// Raw toolchain diagnostic, logged but never shown to participants
        diagnostic: String,
    },

    /// The program failed while running test case `index` (1-based)
    #[error("runtime error on test case {index} of {total}")]
    Runtime {
        index: usize,
        total: usize,
        kind: RuntimeErrorKind,
    },

    /// Output mismatch on test case `index` (1-based)
    #[error("wrong answer on test case {index} of {total}")]
    WrongAnswer { index: usize, total: usize },
}

/// Terminal result of one submission evaluation, as shown to the participant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub success: bool,
    pub message: String,
}

impl Verdict {
    /// All test cases passed.
    pub fn accepted(passed: usize, total: usize) -> Self {
        Self {
            success: true,
            message: format!("Correct! ({}/{} test cases passed)", passed, total),
        }
    }

    /// Participant-facing rendering of a judging failure.
    pub fn from_failure(failure: &JudgeFailure) -> Self {
        let message = match failure {
            JudgeFailure::Compile { .. } => "Compilation error".to_string(),
            JudgeFailure::Runtime { index, total, kind } => match kind {
                RuntimeErrorKind::Timeout => format!(
                    "Runtime error (time limit exceeded) on test case {} of {}",
                    index, total
                ),
                RuntimeErrorKind::ResourceLimit => format!(
                    "Runtime error (memory limit exceeded) on test case {} of {}",
                    index, total
                ),
                RuntimeErrorKind::Crash => {
                    format!("Runtime error on test case {} of {}", index, total)
                }
            },
            JudgeFailure::WrongAnswer { index, total } => {
                format!("Wrong answer (failed test case {} of {})", index, total)
            }
        };
        Self {
            success: false,
            message,
        }
    }

    /// The problem was solved earlier (or a racing submission won).
    pub fn already_solved() -> Self {
        Self {
            success: false,
            message: "You already solved this problem".to_string(),
        }
    }

    /// A later problem was attempted before the current one.
    pub fn out_of_order() -> Self {
        Self {
            success: false,
            message: "Problems must be solved in order".to_string(),
        }
    }

    /// Submissions are closed because the contest is not running.
    pub fn contest_not_running() -> Self {
        Self {
            success: false,
            message: "The contest is not in progress".to_string(),
        }
    }

    /// Generic infrastructure-failure verdict; internals stay in the logs.
    pub fn server_error() -> Self {
        Self {
            success: false,
            message: "A server error occurred while judging. Please try again".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_answer_message_carries_index_and_total() {
        let v = Verdict::from_failure(&JudgeFailure::WrongAnswer { index: 1, total: 1 });
        assert!(!v.success);
        assert!(v.message.contains("1 of 1"));
    }

    #[test]
    fn test_timeout_is_called_out() {
        let v = Verdict::from_failure(&JudgeFailure::Runtime {
            index: 2,
            total: 5,
            kind: RuntimeErrorKind::Timeout,
        });
        assert!(v.message.contains("time limit"));
        assert!(v.message.contains("2 of 5"));
    }

    #[test]
    fn test_compile_diagnostic_not_exposed() {
        let v = Verdict::from_failure(&JudgeFailure::Compile {
            diagnostic: "main.c:3:1: error: expected ';'".to_string(),
        });
        assert!(!v.message.contains("main.c"));
    }
}
