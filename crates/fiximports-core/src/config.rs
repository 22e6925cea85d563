//! Collaborator program configuration

use std::path::PathBuf;

/// Default program used for module discovery.
pub const DEFAULT_GO: &str = "go";
/// Default program used for formatting imports.
pub const DEFAULT_GOIMPORTS: &str = "goimports";

/// Programs and overrides a fixer run is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    /// Go toolchain binary, invoked as `<go> list -m`
    pub go: PathBuf,
    /// Import formatter binary
    pub goimports: PathBuf,
    /// Local prefix to use instead of detecting it
    pub local_prefix: Option<String>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            go: PathBuf::from(DEFAULT_GO),
            goimports: PathBuf::from(DEFAULT_GOIMPORTS),
            local_prefix: None,
        }
    }
}
