//! Import formatter collaborator

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::error::{Error, Result};

/// Sorts and groups the imports of one source file.
#[async_trait]
pub trait ImportFormatter: Send + Sync {
    /// Format `source`, grouping imports under `local_prefix` separately.
    ///
    /// `path` is used for import resolution and diagnostics only; the
    /// formatter must not touch the file itself.
    async fn format(&self, path: &Path, source: &[u8], local_prefix: &str) -> Result<Vec<u8>>;
}

/// Formatter backed by the `goimports` binary.
///
/// The source is piped on stdin and the formatted result read from stdout.
#[derive(Debug, Clone)]
pub struct GoImportsFormatter {
    program: PathBuf,
}

impl GoImportsFormatter {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, path: &Path, local_prefix: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-srcdir").arg(path);
        if !local_prefix.is_empty() {
            cmd.arg("-local").arg(local_prefix);
        }
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl ImportFormatter for GoImportsFormatter {
    async fn format(&self, path: &Path, source: &[u8], local_prefix: &str) -> Result<Vec<u8>> {
        let program = self.program.display().to_string();
        tracing::debug!(program = %program, file = %path.display(), local = local_prefix, "Formatting imports");

        let mut child = self
            .command(path, local_prefix)
            .spawn()
            .map_err(|source| Error::CommandSpawn {
                command: program.clone(),
                source,
            })?;

        let stdin = child.stdin.take();
        let feed = async move {
            match stdin {
                // Dropping stdin afterwards closes the pipe
                Some(mut stdin) => stdin.write_all(source).await,
                None => Ok(()),
            }
        };
        let (fed, output) = tokio::join!(feed, child.wait_with_output());
        let output = output.map_err(|source| Error::CommandSpawn {
            command: program.clone(),
            source,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = match stderr.trim() {
                "" => output.status.to_string(),
                detail => detail.to_string(),
            };
            return Err(Error::Format {
                path: path.to_path_buf(),
                message,
            });
        }
        fed.map_err(|source| Error::CommandSpawn {
            command: program,
            source,
        })?;

        Ok(output.stdout)
    }
}
