//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use fiximports_core::ToolConfig;
use fiximports_core::config::{DEFAULT_GO, DEFAULT_GOIMPORTS};

/// Formats and adjusts imports of Go source files.
///
/// Improves on `goimports` by detecting the local Go module and grouping its
/// imports separately, and by merging import groups that were split by
/// blank lines. Files marked `DO NOT EDIT` are left untouched.
#[derive(Parser, Debug)]
#[command(name = "fiximports")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Go toolchain used to detect the local module (`go list -m`)
    #[arg(long, env = "FIXIMPORTS_GO", default_value = DEFAULT_GO)]
    pub go: PathBuf,

    /// Import formatter binary
    #[arg(long, env = "FIXIMPORTS_GOIMPORTS", default_value = DEFAULT_GOIMPORTS)]
    pub goimports: PathBuf,

    /// Local import prefix to use instead of detecting the module
    #[arg(long, env = "FIXIMPORTS_LOCAL")]
    pub local: Option<String>,

    /// Go source files to fix
    pub files: Vec<PathBuf>,
}

impl Cli {
    pub fn tool_config(&self) -> ToolConfig {
        ToolConfig {
            go: self.go.clone(),
            goimports: self.goimports.clone(),
            local_prefix: self.local.clone(),
        }
    }
}
