//! Per-submission sandbox workspace
//!
//! Each evaluation owns exactly one working directory under the sandbox
//! root. Nothing is shared between concurrent submissions. The directory is
//! backed by a [`tempfile::TempDir`], so it is removed on *every* exit path
//! (success, judged failure, or infrastructure error) when the
//! [`Workspace`] drops.

use std::path::Path;

use anyhow::{Context, Result};
use tempfile::TempDir;
use tokio::fs;
use uuid::Uuid;

use crate::constants::{INPUT_FILE_NAME, SOURCE_FILE_NAME};

/// Scoped working directory for one submission's evaluation.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Create a fresh workspace under `root` (creating `root` if needed).
    pub async fn create(root: &Path) -> Result<Self> {
        fs::create_dir_all(root)
            .await
            .with_context(|| format!("Failed to create sandbox root {}", root.display()))?;

        let dir = tempfile::Builder::new()
            .prefix(&format!("sub-{}-", Uuid::new_v4()))
            .tempdir_in(root)
            .context("Failed to create submission workspace")?;

        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write the submitted source into the workspace.
    pub async fn write_source(&self, source: &str) -> Result<()> {
        fs::write(self.path().join(SOURCE_FILE_NAME), source)
            .await
            .context("Failed to write source file")
    }

    /// Provide the input file for the next run.
    pub async fn write_input(&self, input: &str) -> Result<()> {
        fs::write(self.path().join(INPUT_FILE_NAME), input)
            .await
            .context("Failed to write input file")
    }

    /// Guarantee the absence of an input file.
    ///
    /// A stale `input.txt` from a previous test case would be visible to the
    /// program, so it is actively removed rather than merely left unwritten.
    pub async fn clear_input(&self) -> Result<()> {
        match fs::remove_file(self.path().join(INPUT_FILE_NAME)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).context("Failed to remove stale input file"),
        }
    }
}
