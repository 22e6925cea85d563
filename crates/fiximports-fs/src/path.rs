//! Source path helpers

use std::path::{Component, Path, PathBuf};

/// Directory a source file lives in.
///
/// A bare file name such as `main.go` has an empty parent in
/// [`Path::parent`]; it resolves to `.` here so it can be used as a working
/// directory for child processes.
pub fn source_dir(file: &Path) -> PathBuf {
    match file.parent() {
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        // Root or prefix only
        None if file.components().any(|c| matches!(c, Component::RootDir)) => file.to_path_buf(),
        None => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("main.go", ".")]
    #[case("./main.go", ".")]
    #[case("pkg/main.go", "pkg")]
    #[case("/src/mod/pkg/main.go", "/src/mod/pkg")]
    #[case("/", "/")]
    fn test_source_dir(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(source_dir(Path::new(input)), PathBuf::from(expected));
    }
}
