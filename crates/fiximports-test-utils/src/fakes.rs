//! Scripted collaborators for driving an `ImportFixer` without Go tooling.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use fiximports_core::{Error, FileSink, ImportFormatter, ModuleDiscovery, Result};

/// Module discovery that always answers with one module (or one failure)
/// and records every directory it was asked about.
pub struct FakeDiscovery {
    module: std::result::Result<String, String>,
    dirs: Mutex<Vec<PathBuf>>,
}

impl FakeDiscovery {
    pub fn new(module: &str) -> Self {
        Self {
            module: Ok(module.to_string()),
            dirs: Mutex::new(Vec::new()),
        }
    }

    /// Discovery that fails with `message` for every directory.
    pub fn failing(message: &str) -> Self {
        Self {
            module: Err(message.to_string()),
            dirs: Mutex::new(Vec::new()),
        }
    }

    /// Directories discovery ran in, in call order.
    pub fn dirs(&self) -> Vec<PathBuf> {
        self.dirs.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModuleDiscovery for FakeDiscovery {
    async fn discover(&self, dir: &Path) -> Result<String> {
        self.dirs.lock().unwrap().push(dir.to_path_buf());
        self.module.clone().map_err(|message| Error::ModuleDiscovery {
            command: "go list -m".to_string(),
            workdir: dir.to_path_buf(),
            message,
        })
    }
}

/// One recorded formatter invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatCall {
    pub path: PathBuf,
    pub source: Vec<u8>,
    pub local_prefix: String,
}

type FormatFn = dyn Fn(&Path, &[u8]) -> Result<Vec<u8>> + Send + Sync;

/// Formatter driven by a closure that records every call.
pub struct FakeFormatter {
    format: Box<FormatFn>,
    calls: Mutex<Vec<FormatCall>>,
}

impl FakeFormatter {
    pub fn new(format: impl Fn(&Path, &[u8]) -> Result<Vec<u8>> + Send + Sync + 'static) -> Self {
        Self {
            format: Box::new(format),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Returns its input unchanged.
    pub fn identity() -> Self {
        Self::new(|_, source| Ok(source.to_vec()))
    }

    /// Appends `suffix` to every source, so every file counts as changed.
    pub fn appending(suffix: &'static str) -> Self {
        Self::new(move |_, source| {
            let mut out = source.to_vec();
            out.extend_from_slice(suffix.as_bytes());
            Ok(out)
        })
    }

    /// Rejects every file whose name is `file_name`, passing others through.
    pub fn rejecting(file_name: &'static str, message: &'static str) -> Self {
        Self::new(move |path, source| {
            if path.file_name().is_some_and(|n| n == file_name) {
                Err(Error::Format {
                    path: path.to_path_buf(),
                    message: message.to_string(),
                })
            } else {
                Ok(source.to_vec())
            }
        })
    }

    pub fn calls(&self) -> Vec<FormatCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImportFormatter for FakeFormatter {
    async fn format(&self, path: &Path, source: &[u8], local_prefix: &str) -> Result<Vec<u8>> {
        self.calls.lock().unwrap().push(FormatCall {
            path: path.to_path_buf(),
            source: source.to_vec(),
            local_prefix: local_prefix.to_string(),
        });
        (self.format)(path, source)
    }
}

/// Sink that keeps writes in memory instead of touching the file system.
#[derive(Default)]
pub struct RecordingSink {
    writes: Mutex<Vec<(PathBuf, Vec<u8>)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write in the order it happened.
    pub fn writes(&self) -> Vec<(PathBuf, Vec<u8>)> {
        self.writes.lock().unwrap().clone()
    }

    /// Last contents written to `path`, as text.
    pub fn written(&self, path: &Path) -> Option<String> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(p, _)| p == path)
            .map(|(_, contents)| String::from_utf8_lossy(contents).into_owned())
    }
}

#[async_trait]
impl FileSink for RecordingSink {
    async fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.writes
            .lock()
            .unwrap()
            .push((path.to_path_buf(), contents.to_vec()));
        Ok(())
    }
}
