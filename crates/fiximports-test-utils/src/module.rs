//! [`TestModule`] builder for import fixing scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary Go module directory with helpers for writing sources and
/// asserting on their contents afterwards.
///
/// # Example
///
/// ```rust,no_run
/// use fiximports_test_utils::TestModule;
///
/// let module = TestModule::new("example.com/app");
/// let main = module.write_file("main.go", "package main\n");
/// module.assert_file_content("main.go", "package main\n");
/// # let _ = main;
/// ```
pub struct TestModule {
    temp_dir: TempDir,
    name: String,
}

impl TestModule {
    /// Create a temporary directory containing a `go.mod` for `name`.
    pub fn new(name: &str) -> Self {
        let module = Self {
            temp_dir: TempDir::new().unwrap(),
            name: name.to_string(),
        };
        module.write_file("go.mod", &format!("module {}\n\ngo 1.22\n", name));
        module
    }

    /// Module path written to `go.mod`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `rel` inside the module.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Write `contents` to `rel`, creating parent directories as needed.
    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// Write an executable shell script (Unix only).
    #[cfg(unix)]
    pub fn write_script(&self, rel: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.write_file(rel, &format!("#!/bin/sh\n{}\n", body));
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    pub fn read_file(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel))
            .unwrap_or_else(|e| panic!("failed to read {}: {}", rel, e))
    }

    /// Assert that `rel` holds exactly `expected`.
    pub fn assert_file_content(&self, rel: &str, expected: &str) {
        let actual = self.read_file(rel);
        assert_eq!(
            actual, expected,
            "unexpected content in {}\n\nactual:\n{}\n\nexpect:\n{}",
            rel, actual, expected
        );
    }
}
