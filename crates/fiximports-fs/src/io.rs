//! Byte-level reads and atomic rewrites of source files

use std::fs;
use std::io::Write;
use std::path::Path;

use fs2::FileExt;
use tempfile::NamedTempFile;

use crate::{Error, Result, source_dir};

/// Permission mode applied to rewritten source files on Unix.
pub const SOURCE_FILE_MODE: u32 = 0o644;

/// Read the full contents of a file.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::io(path, e))
}

/// Check that a path exists, reporting the underlying I/O error if it does not.
pub fn ensure_exists(path: &Path) -> Result<()> {
    fs::metadata(path)
        .map(|_| ())
        .map_err(|e| Error::io(path, e))
}

/// Write content atomically to a file with locking.
///
/// Symlinks are resolved first so the link target is rewritten and the link
/// itself survives. Content goes to a uniquely named temp file next to the
/// target (same filesystem) with [`SOURCE_FILE_MODE`] and an exclusive
/// advisory lock held while writing, which is then renamed over the target.
/// Concurrent writes to the same path each use their own temp file; the last
/// rename wins.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let target = match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(Error::io(path, e)),
    };
    let dir = source_dir(&target);

    let mut temp_file = NamedTempFile::new_in(&dir).map_err(|e| Error::io(&dir, e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp_file
            .as_file()
            .set_permissions(fs::Permissions::from_mode(SOURCE_FILE_MODE))
            .map_err(|e| Error::io(temp_file.path(), e))?;
    }

    temp_file
        .as_file()
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: target.clone(),
        })?;

    temp_file
        .write_all(content)
        .and_then(|()| temp_file.as_file().sync_all())
        .map_err(|e| Error::io(temp_file.path(), e))?;

    FileExt::unlock(temp_file.as_file()).map_err(|_| Error::LockFailed {
        path: target.clone(),
    })?;

    // A failed persist drops the temp file, which removes it
    temp_file
        .persist(&target)
        .map_err(|e| Error::io(&target, e.error))?;

    tracing::debug!(path = %target.display(), bytes = content.len(), "Wrote file atomically");
    Ok(())
}
