//! Local module prefix detection
//!
//! The prefix names the module the files being fixed belong to, so the
//! formatter can group its imports apart from third-party ones. It is
//! detected once per run from the first file's directory and reused for
//! every later file, even one that lives in another module.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{Error, Result};

/// Discovers the module identifier for a directory.
#[async_trait]
pub trait ModuleDiscovery: Send + Sync {
    /// Return the module identifier governing `dir`.
    async fn discover(&self, dir: &Path) -> Result<String>;
}

/// Module discovery through `go list -m`.
#[derive(Debug, Clone)]
pub struct GoModuleDiscovery {
    go: PathBuf,
}

impl GoModuleDiscovery {
    pub fn new(go: impl Into<PathBuf>) -> Self {
        Self { go: go.into() }
    }

    fn command_line(&self) -> String {
        format!("{} list -m", self.go.display())
    }
}

#[async_trait]
impl ModuleDiscovery for GoModuleDiscovery {
    async fn discover(&self, dir: &Path) -> Result<String> {
        let command = self.command_line();
        tracing::debug!(command = %command, dir = %dir.display(), "Running module discovery");

        let output = Command::new(&self.go)
            .args(["list", "-m"])
            .current_dir(dir)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| Error::ModuleDiscovery {
                command: command.clone(),
                workdir: dir.to_path_buf(),
                message: e.to_string(),
            })?;

        // Combined output, as a terminal would show it
        let mut combined = output.stdout;
        combined.extend_from_slice(&output.stderr);
        let combined = String::from_utf8_lossy(&combined);

        if !output.status.success() {
            let detail = combined.trim();
            let message = if detail.is_empty() {
                output.status.to_string()
            } else {
                format!("{}: {}", output.status, detail)
            };
            return Err(Error::ModuleDiscovery {
                command,
                workdir: dir.to_path_buf(),
                message,
            });
        }

        Ok(combined.trim().to_string())
    }
}

/// The run-scoped local prefix.
///
/// Starts unset, is set once by [`LocalPrefix::ensure`] and read-only
/// afterwards. An empty value counts as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalPrefix {
    value: Option<String>,
}

impl LocalPrefix {
    pub fn new() -> Self {
        Self::default()
    }

    /// A prefix fixed up front; discovery will not run.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    /// Resolved prefix, if any.
    pub fn get(&self) -> Option<&str> {
        self.value.as_deref().filter(|v| !v.is_empty())
    }

    /// Resolved prefix, or the empty string while unresolved.
    pub fn as_str(&self) -> &str {
        self.get().unwrap_or_default()
    }

    pub fn is_resolved(&self) -> bool {
        self.get().is_some()
    }

    /// Resolve the prefix from `dir` unless it is already resolved.
    ///
    /// On failure the prefix stays unset, so a later call detects again.
    pub async fn ensure(&mut self, dir: &Path, discovery: &dyn ModuleDiscovery) -> Result<()> {
        if self.is_resolved() {
            return Ok(());
        }

        let module = discovery.discover(dir).await?;
        tracing::info!(module = %module, "Detected module");
        self.value = Some(module);
        Ok(())
    }
}
