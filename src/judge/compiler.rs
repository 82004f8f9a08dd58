//! Compiler stage
//!
//! Turns the submitted C source into `main.out` inside the submission's
//! workspace, through the isolation provider (network disabled, writable
//! workspace). A compile that exceeds the wall-clock limit is reported as an
//! ordinary compile failure; the participant cannot tell a pathological
//! macro expansion from a syntax error, and does not need to.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;

use crate::constants::{ARTIFACT_FILE_NAME, SOURCE_FILE_NAME};
use crate::judge::isolation::{ExecOutcome, ExecRequest, IsolationProvider};

/// Result of the compile stage.
#[derive(Debug, Clone)]
pub enum CompileOutcome {
    /// `main.out` now exists in the workspace
    Success,
    /// Toolchain rejection or timeout; diagnostic is for the logs only
    Failure { diagnostic: String },
}

/// Compile the source already present in `workspace`.
pub async fn compile(
    provider: &dyn IsolationProvider,
    workspace: &Path,
    wall_time: Duration,
) -> Result<CompileOutcome> {
    let request = ExecRequest {
        command: vec![
            "sh".to_string(),
            "-c".to_string(),
            format!(
                "gcc {} -O2 -o {} && chmod +x {}",
                SOURCE_FILE_NAME, ARTIFACT_FILE_NAME, ARTIFACT_FILE_NAME
            ),
        ],
        wall_time,
        memory_limit_mb: None,
        read_only_rootfs: false,
    };

    let outcome = provider.execute(workspace, &request).await?;
    if outcome.success() {
        return Ok(CompileOutcome::Success);
    }

    match outcome {
        ExecOutcome::Exited {
            exit_code, stderr, ..
        } => Ok(CompileOutcome::Failure {
            diagnostic: if stderr.is_empty() {
                format!("compiler exited with code {}", exit_code)
            } else {
                stderr
            },
        }),
        ExecOutcome::TimedOut => Ok(CompileOutcome::Failure {
            diagnostic: format!("compilation timed out after {:?}", wall_time),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    struct FixedProvider {
        outcome: Mutex<Option<ExecOutcome>>,
        saw_request: Mutex<Option<ExecRequest>>,
    }

    impl FixedProvider {
        fn new(outcome: ExecOutcome) -> Self {
            Self {
                outcome: Mutex::new(Some(outcome)),
                saw_request: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl IsolationProvider for FixedProvider {
        async fn execute(&self, _workspace: &Path, request: &ExecRequest) -> Result<ExecOutcome> {
            *self.saw_request.lock().unwrap() = Some(request.clone());
            Ok(self.outcome.lock().unwrap().take().unwrap())
        }
    }

    fn exited(exit_code: i32, stderr: &str) -> ExecOutcome {
        ExecOutcome::Exited {
            exit_code,
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }

    #[tokio::test]
    async fn test_clean_exit_is_success() {
        let provider = FixedProvider::new(exited(0, ""));

        let outcome = compile(&provider, Path::new("/tmp/job"), Duration::from_secs(5))
            .await
            .unwrap();

        assert!(matches!(outcome, CompileOutcome::Success));

        // The compile runs with a writable rootfs and no memory cap
        let request = provider.saw_request.lock().unwrap().take().unwrap();
        assert!(!request.read_only_rootfs);
        assert_eq!(request.memory_limit_mb, None);
    }

    #[tokio::test]
    async fn test_nonzero_exit_carries_stderr_diagnostic() {
        let provider = FixedProvider::new(exited(1, "main.c:3: error: expected ';'"));

        let outcome = compile(&provider, Path::new("/tmp/job"), Duration::from_secs(5))
            .await
            .unwrap();

        match outcome {
            CompileOutcome::Failure { diagnostic } => assert!(diagnostic.contains("expected ';'")),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_timeout_is_a_compile_failure() {
        let provider = FixedProvider::new(ExecOutcome::TimedOut);

        let outcome = compile(&provider, Path::new("/tmp/job"), Duration::from_secs(5))
            .await
            .unwrap();

        match outcome {
            CompileOutcome::Failure { diagnostic } => assert!(diagnostic.contains("timed out")),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
