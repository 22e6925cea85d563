//! Filesystem access for fiximports
//!
//! Provides byte-level reads, atomic in-place rewrites and source directory
//! resolution for the files a run touches.

pub mod error;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use io::SOURCE_FILE_MODE;
pub use path::source_dir;
