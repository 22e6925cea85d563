//! Run orchestration
//!
//! Every file goes through a sequential prelude (prefix resolution and an
//! existence check) on the caller's task, then its read, compact, format and
//! write pipeline is spawned onto a [`JoinSet`]. All spawned pipelines run to
//! completion; the first failure to be joined becomes the run's error.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task::JoinSet;

use fiximports_fs::{io, source_dir};

use crate::compact::compact;
use crate::config::ToolConfig;
use crate::error::{Error, Result};
use crate::formatter::{GoImportsFormatter, ImportFormatter};
use crate::prefix::{GoModuleDiscovery, LocalPrefix, ModuleDiscovery};
use crate::sink::{DiskSink, FileSink};

/// What happened to a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Formatted output differed and was written
    Fixed,
    /// Formatted output matched the compacted source
    Unchanged,
    /// Carries the generated-file marker; never rewritten
    SkippedGenerated,
}

/// Counts of per-file outcomes for a successful run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub fixed: usize,
    pub unchanged: usize,
    pub skipped_generated: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Fixed => self.fixed += 1,
            FileOutcome::Unchanged => self.unchanged += 1,
            FileOutcome::SkippedGenerated => self.skipped_generated += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.fixed + self.unchanged + self.skipped_generated
    }
}

/// Fixes import grouping across a batch of files.
pub struct ImportFixer {
    prefix: LocalPrefix,
    discovery: Arc<dyn ModuleDiscovery>,
    formatter: Arc<dyn ImportFormatter>,
    sink: Arc<dyn FileSink>,
}

impl ImportFixer {
    pub fn new(
        discovery: Arc<dyn ModuleDiscovery>,
        formatter: Arc<dyn ImportFormatter>,
        sink: Arc<dyn FileSink>,
    ) -> Self {
        Self {
            prefix: LocalPrefix::new(),
            discovery,
            formatter,
            sink,
        }
    }

    /// Fixer that shells out to the configured Go tools and writes to disk.
    pub fn from_config(config: &ToolConfig) -> Self {
        let fixer = Self::new(
            Arc::new(GoModuleDiscovery::new(&config.go)),
            Arc::new(GoImportsFormatter::new(&config.goimports)),
            Arc::new(DiskSink),
        );
        match &config.local_prefix {
            Some(prefix) => fixer.with_local_prefix(LocalPrefix::with_value(prefix.clone())),
            None => fixer,
        }
    }

    pub fn with_local_prefix(mut self, prefix: LocalPrefix) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn local_prefix(&self) -> &LocalPrefix {
        &self.prefix
    }

    /// Fix imports in every file.
    ///
    /// A prelude failure stops dispatching immediately. Pipelines that were
    /// already spawned are detached rather than aborted, so their writes
    /// still happen.
    pub async fn run(&mut self, files: &[PathBuf]) -> Result<RunSummary> {
        if files.is_empty() {
            return Err(Error::NoFiles);
        }

        let mut tasks = JoinSet::new();
        for file in files {
            if let Err(err) = self.prepare(file).await {
                tasks.detach_all();
                return Err(err);
            }

            tracing::info!(file = %file.display(), "Checking imports");

            let file = file.clone();
            let local_prefix = self.prefix.as_str().to_string();
            let formatter = Arc::clone(&self.formatter);
            let sink = Arc::clone(&self.sink);
            tasks.spawn(fix_file(file, local_prefix, formatter, sink));
        }

        let mut summary = RunSummary::default();
        let mut first_error = None;
        while let Some(joined) = tasks.join_next().await {
            match joined.map_err(Error::from).and_then(|result| result) {
                Ok(outcome) => summary.record(outcome),
                Err(err) if first_error.is_none() => first_error = Some(err),
                Err(err) => tracing::debug!(error = %err, "Further file failure"),
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(summary),
        }
    }

    async fn prepare(&mut self, file: &Path) -> Result<()> {
        self.prefix
            .ensure(&source_dir(file), self.discovery.as_ref())
            .await?;

        io::ensure_exists(file).map_err(|err| {
            if err.is_not_found() {
                Error::NotFound {
                    path: file.to_path_buf(),
                }
            } else {
                Error::Fs(err)
            }
        })
    }
}

async fn fix_file(
    file: PathBuf,
    local_prefix: String,
    formatter: Arc<dyn ImportFormatter>,
    sink: Arc<dyn FileSink>,
) -> Result<FileOutcome> {
    let read_path = file.clone();
    let raw = tokio::task::spawn_blocking(move || io::read_bytes(&read_path)).await??;

    let compacted = compact(&raw);
    if compacted.generated {
        tracing::info!(file = %file.display(), "Skipping generated file");
        return Ok(FileOutcome::SkippedGenerated);
    }

    let formatted = formatter
        .format(&file, &compacted.source, &local_prefix)
        .await?;
    if formatted == compacted.source {
        tracing::debug!(
            file = %file.display(),
            removed_lines = compacted.removed_lines,
            "Imports already in order"
        );
        return Ok(FileOutcome::Unchanged);
    }

    sink.write(&file, &formatted).await?;
    tracing::info!(file = %file.display(), "Fixed imports");
    Ok(FileOutcome::Fixed)
}
