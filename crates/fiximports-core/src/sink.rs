//! Destination for rewritten sources

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;

/// Receives the final contents of files whose imports changed.
#[async_trait]
pub trait FileSink: Send + Sync {
    async fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
}

/// Writes files in place with an atomic rename.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskSink;

#[async_trait]
impl FileSink for DiskSink {
    async fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        let path = path.to_path_buf();
        let contents = contents.to_vec();
        tokio::task::spawn_blocking(move || fiximports_fs::io::write_atomic(&path, &contents))
            .await??;
        Ok(())
    }
}
