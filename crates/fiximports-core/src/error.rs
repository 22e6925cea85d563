//! Error types for fiximports-core

use std::path::PathBuf;

/// Result type for fiximports-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fixing imports
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The run was started without any input files
    #[error("no files specified")]
    NoFiles,

    /// The module discovery command failed for a directory
    #[error("failed detecting go module via `{command}` [workdir={}]: {message}", workdir.display())]
    ModuleDiscovery {
        command: String,
        workdir: PathBuf,
        message: String,
    },

    /// A listed file does not exist
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Filesystem error from fiximports-fs
    #[error(transparent)]
    Fs(#[from] fiximports_fs::Error),

    /// The import formatter rejected the source
    #[error("failed formatting {}: {message}", path.display())]
    Format { path: PathBuf, message: String },

    /// A collaborator program could not be started
    #[error("failed to run `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// A per-file task panicked or was cancelled by the runtime
    #[error("import fixing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
