//! Test case sequencer
//!
//! Runs a problem's test cases in declaration order against the compiled
//! artifact and short-circuits on the first failure: once a test case fails,
//! the remaining ones are never executed. The passed count only exists for
//! the all-pass success message.

use std::time::Duration;

use anyhow::Result;

use crate::constants::{ARTIFACT_FILE_NAME, INPUT_FILE_NAME};
use crate::judge::comparator;
use crate::judge::isolation::{ExecOutcome, ExecRequest, IsolationProvider};
use crate::judge::verdict::{JudgeFailure, RuntimeErrorKind};
use crate::judge::workspace::Workspace;
use crate::models::TestCase;

/// Exit code Docker reports when the kernel OOM-kills the process.
const OOM_EXIT_CODE: i32 = 137;

/// Resource limits applied to every run.
#[derive(Debug, Clone, Copy)]
pub struct RunLimits {
    pub wall_time: Duration,
    pub memory_limit_mb: u64,
}

/// Result of sequencing all test cases.
#[derive(Debug, Clone)]
pub enum SequenceOutcome {
    AllPassed { total: usize },
    Failed(JudgeFailure),
}

/// Run every test case in order, fail-fast.
pub async fn run_all(
    provider: &dyn IsolationProvider,
    workspace: &Workspace,
    test_cases: &[TestCase],
    limits: RunLimits,
) -> Result<SequenceOutcome> {
    let total = test_cases.len();

    for (i, test_case) in test_cases.iter().enumerate() {
        let index = i + 1;

        // The program must observe an input file exactly when the test case
        // has input; a leftover file from the previous iteration would leak
        // into this run.
        if test_case.has_input() {
            workspace
                .write_input(test_case.input.as_deref().unwrap_or_default())
                .await?;
        } else {
            workspace.clear_input().await?;
        }

        let command = if test_case.has_input() {
            vec![
                "sh".to_string(),
                "-c".to_string(),
                format!("./{} < {}", ARTIFACT_FILE_NAME, INPUT_FILE_NAME),
            ]
        } else {
            vec![format!("./{}", ARTIFACT_FILE_NAME)]
        };

        let request = ExecRequest {
            command,
            wall_time: limits.wall_time,
            memory_limit_mb: Some(limits.memory_limit_mb),
            read_only_rootfs: true,
        };

        match provider.execute(workspace.path(), &request).await? {
            ExecOutcome::TimedOut => {
                return Ok(SequenceOutcome::Failed(JudgeFailure::Runtime {
                    index,
                    total,
                    kind: RuntimeErrorKind::Timeout,
                }));
            }
            ExecOutcome::Exited {
                exit_code, stdout, ..
            } => {
                if exit_code != 0 {
                    let kind = if exit_code == OOM_EXIT_CODE {
                        RuntimeErrorKind::ResourceLimit
                    } else {
                        RuntimeErrorKind::Crash
                    };
                    return Ok(SequenceOutcome::Failed(JudgeFailure::Runtime {
                        index,
                        total,
                        kind,
                    }));
                }

                if !comparator::outputs_match(&test_case.expected_output, &stdout) {
                    tracing::debug!(index, total, "Output mismatch");
                    return Ok(SequenceOutcome::Failed(JudgeFailure::WrongAnswer {
                        index,
                        total,
                    }));
                }
            }
        }
    }

    Ok(SequenceOutcome::AllPassed { total })
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;

    /// Fake provider that returns scripted outcomes and counts invocations.
    struct ScriptedProvider {
        calls: AtomicUsize,
        outcomes: Mutex<Vec<ExecOutcome>>,
    }

    impl ScriptedProvider {
        fn new(outcomes: Vec<ExecOutcome>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                outcomes: Mutex::new(outcomes),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl IsolationProvider for ScriptedProvider {
        async fn execute(&self, _workspace: &Path, _request: &ExecRequest) -> Result<ExecOutcome> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            let outcomes = self.outcomes.lock().unwrap();
            Ok(outcomes[n.min(outcomes.len() - 1)].clone())
        }
    }

    fn exited(stdout: &str) -> ExecOutcome {
        ExecOutcome::Exited {
            exit_code: 0,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    fn test_case(id: i64, input: Option<&str>, expected: &str) -> TestCase {
        TestCase {
            id,
            problem_id: "p1".to_string(),
            input: input.map(str::to_string),
            expected_output: expected.to_string(),
        }
    }

    async fn workspace() -> (tempfile::TempDir, Workspace) {
        let root = tempfile::tempdir().unwrap();
        let ws = Workspace::create(root.path()).await.unwrap();
        (root, ws)
    }

    fn limits() -> RunLimits {
        RunLimits {
            wall_time: Duration::from_secs(2),
            memory_limit_mb: 64,
        }
    }

    #[tokio::test]
    async fn test_all_pass() {
        let provider = ScriptedProvider::new(vec![exited("1\n"), exited("2\n")]);
        let cases = vec![test_case(1, None, "1"), test_case(2, None, "2")];
        let (_root, ws) = workspace().await;

        let outcome = run_all(&provider, &ws, &cases, limits()).await.unwrap();

        assert!(matches!(outcome, SequenceOutcome::AllPassed { total: 2 }));
        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test]
    async fn test_short_circuits_after_first_failure() {
        // Second of four cases fails; cases three and four must never run.
        let provider = ScriptedProvider::new(vec![
            exited("ok"),
            exited("wrong"),
            exited("ok"),
            exited("ok"),
        ]);
        let cases = vec![
            test_case(1, None, "ok"),
            test_case(2, None, "ok"),
            test_case(3, None, "ok"),
            test_case(4, None, "ok"),
        ];
        let (_root, ws) = workspace().await;

        let outcome = run_all(&provider, &ws, &cases, limits()).await.unwrap();

        match outcome {
            SequenceOutcome::Failed(JudgeFailure::WrongAnswer { index, total }) => {
                assert_eq!(index, 2);
                assert_eq!(total, 4);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test]
    async fn test_timeout_maps_to_runtime_timeout() {
        let provider = ScriptedProvider::new(vec![ExecOutcome::TimedOut]);
        let cases = vec![test_case(1, Some("5"), "whatever")];
        let (_root, ws) = workspace().await;

        let outcome = run_all(&provider, &ws, &cases, limits()).await.unwrap();

        assert!(matches!(
            outcome,
            SequenceOutcome::Failed(JudgeFailure::Runtime {
                index: 1,
                kind: RuntimeErrorKind::Timeout,
                ..
            })
        ));
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_oom_exit_maps_to_resource_limit() {
        let provider = ScriptedProvider::new(vec![ExecOutcome::Exited {
            exit_code: OOM_EXIT_CODE,
            stdout: String::new(),
            stderr: String::new(),
        }]);
        let cases = vec![test_case(1, None, "x")];
        let (_root, ws) = workspace().await;

        let outcome = run_all(&provider, &ws, &cases, limits()).await.unwrap();

        assert!(matches!(
            outcome,
            SequenceOutcome::Failed(JudgeFailure::Runtime {
                kind: RuntimeErrorKind::ResourceLimit,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_inputless_case_clears_stale_input() {
        // First case writes input.txt; second case has none and must see it
        // removed before running.
        let provider = ScriptedProvider::new(vec![exited("a"), exited("b")]);
        let cases = vec![test_case(1, Some("data"), "a"), test_case(2, None, "b")];
        let (_root, ws) = workspace().await;

        run_all(&provider, &ws, &cases, limits()).await.unwrap();

        assert!(!ws.path().join(INPUT_FILE_NAME).exists());
    }
}
