//! Import fixing for Go sources
//!
//! Collapses import blocks that formatting tools left split into several
//! blank-line separated groups, detects the local module prefix once per
//! run, and hands each file to an import formatter that regroups local
//! imports apart from third-party ones. Files carrying the `DO NOT EDIT`
//! marker are never rewritten.

pub mod compact;
pub mod config;
pub mod error;
pub mod fixer;
pub mod formatter;
pub mod prefix;
pub mod sink;

pub use compact::{Compacted, GENERATED_MARKER, compact};
pub use config::ToolConfig;
pub use error::{Error, Result};
pub use fixer::{FileOutcome, ImportFixer, RunSummary};
pub use formatter::{GoImportsFormatter, ImportFormatter};
pub use prefix::{GoModuleDiscovery, LocalPrefix, ModuleDiscovery};
pub use sink::{DiskSink, FileSink};
