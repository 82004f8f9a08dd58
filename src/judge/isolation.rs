//! Isolated execution provider
//!
//! The judge never talks to a sandboxing technology directly; it goes
//! through the [`IsolationProvider`] capability so the pipeline stays
//! unit-testable with a fake and the Docker adapter stays swappable.
//!
//! The concrete adapter drives the `docker` CLI: each request becomes a
//! fresh `docker run --rm` with the workspace bind-mounted, network
//! disabled, and memory/pid limits applied. A hard wall-clock timeout wraps
//! the whole run; `kill_on_drop` reaps the container process when the
//! timeout fires.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;

use crate::constants::{SANDBOX_MOUNT_PATH, SANDBOX_PIDS_LIMIT};

/// One command to run inside the isolation boundary.
#[derive(Debug, Clone)]
pub struct ExecRequest {
    /// argv to execute with the workspace as working directory
    pub command: Vec<String>,
    /// Hard wall-clock limit for the run
    pub wall_time: Duration,
    /// Memory ceiling in megabytes, if any
    pub memory_limit_mb: Option<u64>,
    /// Mount the root filesystem read-only (the workspace stays writable)
    pub read_only_rootfs: bool,
}

/// What happened inside the sandbox. Infrastructure failures (provider
/// unreachable, spawn errors) are *not* represented here; they surface as
/// `Err` from [`IsolationProvider::execute`].
#[derive(Debug, Clone)]
pub enum ExecOutcome {
    Exited {
        exit_code: i32,
        stdout: String,
        stderr: String,
    },
    TimedOut,
}

impl ExecOutcome {
    pub fn success(&self) -> bool {
        matches!(self, ExecOutcome::Exited { exit_code: 0, .. })
    }
}

/// Capability to run untrusted code under resource and access limits.
#[async_trait]
pub trait IsolationProvider: Send + Sync {
    /// Execute `request` with `workspace` mounted as the working directory.
    async fn execute(&self, workspace: &Path, request: &ExecRequest) -> Result<ExecOutcome>;
}

/// Docker-backed isolation provider.
#[derive(Debug, Clone)]
pub struct DockerIsolation {
    image: String,
    docker_api_version: Option<String>,
}

impl DockerIsolation {
    pub fn new(image: String, docker_api_version: Option<String>) -> Self {
        Self {
            image,
            docker_api_version,
        }
    }

    /// Build the `docker run` argument list for a request.
    fn build_args(&self, workspace_abs: &Path, request: &ExecRequest) -> Vec<String> {
        let mut args: Vec<String> = Vec::new();

        args.push("run".into());
        args.push("--rm".into());

        // Resource constraints
        if let Some(mb) = request.memory_limit_mb {
            args.push(format!("--memory={}m", mb));
            // No swap headroom beyond the memory limit
            args.push(format!("--memory-swap={}m", mb));
        }
        args.push(format!("--pids-limit={}", SANDBOX_PIDS_LIMIT));

        // Untrusted code never gets the network
        args.push("--network=none".into());
        args.push("--cap-drop=ALL".into());

        if request.read_only_rootfs {
            args.push("--read-only".into());
        }

        // Workspace mount
        args.push("-v".into());
        args.push(format!("{}:{}", workspace_abs.display(), SANDBOX_MOUNT_PATH));
        args.push("-w".into());
        args.push(SANDBOX_MOUNT_PATH.into());

        args.push(self.image.clone());
        args.extend(request.command.iter().cloned());

        args
    }
}

#[async_trait]
impl IsolationProvider for DockerIsolation {
    async fn execute(&self, workspace: &Path, request: &ExecRequest) -> Result<ExecOutcome> {
        let workspace_abs = workspace
            .canonicalize()
            .with_context(|| format!("Could not canonicalize {}", workspace.display()))?;

        let args = self.build_args(&workspace_abs, request);

        tracing::debug!(
            image = %self.image,
            cmd = ?request.command,
            workspace = %workspace.display(),
            "Spawning sandbox container"
        );

        let mut cmd = Command::new("docker");
        cmd.args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(ref ver) = self.docker_api_version {
            cmd.env("DOCKER_API_VERSION", ver);
        }

        let child = cmd
            .spawn()
            .context("Failed to spawn docker process. Is the Docker daemon reachable?")?;

        // Small grace on top of the limit so container startup does not eat
        // into the program's allotted time.
        let limit = request.wall_time + Duration::from_millis(100);
        match timeout(limit, child.wait_with_output()).await {
            Ok(Ok(output)) => Ok(ExecOutcome::Exited {
                exit_code: output.status.code().unwrap_or(-1),
                stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            }),
            Ok(Err(e)) => Err(anyhow!("Docker command execution failed: {}", e)),
            Err(_) => Ok(ExecOutcome::TimedOut),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_args_applies_limits() {
        let provider = DockerIsolation::new("c-judge-env".to_string(), None);
        let request = ExecRequest {
            command: vec!["./main.out".to_string()],
            wall_time: Duration::from_secs(2),
            memory_limit_mb: Some(64),
            read_only_rootfs: true,
        };

        let args = provider.build_args(Path::new("/tmp/job"), &request);

        assert!(args.contains(&"--network=none".to_string()));
        assert!(args.contains(&"--memory=64m".to_string()));
        assert!(args.contains(&"--read-only".to_string()));
        assert!(args.contains(&"--cap-drop=ALL".to_string()));
        assert!(args.contains(&"-v".to_string()));
        assert_eq!(args.last().unwrap(), "./main.out");
    }

    #[test]
    fn test_build_args_writable_compile() {
        let provider = DockerIsolation::new("c-judge-env".to_string(), None);
        let request = ExecRequest {
            command: vec!["sh".into(), "-c".into(), "gcc main.c -o main.out".into()],
            wall_time: Duration::from_secs(5),
            memory_limit_mb: None,
            read_only_rootfs: false,
        };

        let args = provider.build_args(Path::new("/tmp/job"), &request);

        assert!(!args.contains(&"--read-only".to_string()));
        assert!(!args.iter().any(|a| a.starts_with("--memory=")));
    }
}
