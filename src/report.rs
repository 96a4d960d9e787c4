//! Per-file failure tracking for batch runs.
//!
//! Both pipelines isolate per-file failures: a failed asset is logged and
//! skipped, the batch continues, and every failure is reported at the end.
//! Any recorded failure makes the run exit non-zero.

use std::fmt;
use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use thiserror::Error;

/// A single-file pipeline failure.
#[derive(Debug, Error)]
pub enum AssetError {
    /// Dimension/metadata read failure.
    #[error("failed to probe `{0}`")]
    Probe(PathBuf, #[source] anyhow::Error),

    /// Codec transform or write failure.
    #[error("failed to encode `{0}`")]
    Encode(PathBuf, #[source] anyhow::Error),

    /// Filesystem copy failure.
    #[error("failed to copy `{0}`")]
    Copy(PathBuf, #[source] anyhow::Error),
}

impl AssetError {
    pub fn probe(path: impl Into<PathBuf>, err: impl Into<anyhow::Error>) -> Self {
        Self::Probe(path.into(), err.into())
    }

    pub fn encode(path: impl Into<PathBuf>, err: impl Into<anyhow::Error>) -> Self {
        Self::Encode(path.into(), err.into())
    }

    pub fn copy(path: impl Into<PathBuf>, err: impl Into<anyhow::Error>) -> Self {
        Self::Copy(path.into(), err.into())
    }

    /// Path of the offending file.
    pub fn path(&self) -> &Path {
        match self {
            Self::Probe(path, _) | Self::Encode(path, _) | Self::Copy(path, _) => path,
        }
    }
}

/// Outcome of a batch pass: processed count plus collected failures.
#[derive(Debug, Default)]
pub struct BatchReport {
    processed: usize,
    failures: Vec<AssetError>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one successfully processed file.
    pub fn ok(&mut self) {
        self.processed += 1;
    }

    /// Record a failure. The failing file is logged immediately to stderr.
    pub fn fail(&mut self, err: AssetError) {
        match std::error::Error::source(&err) {
            Some(cause) => eprintln!("{} {err}: {cause}", "✗".red()),
            None => eprintln!("{} {err}", "✗".red()),
        }
        self.failures.push(err);
    }

    /// Fold another pass's report into this one.
    pub fn merge(&mut self, other: Self) {
        self.processed += other.processed;
        self.failures.extend(other.failures);
    }

    pub fn processed(&self) -> usize {
        self.processed
    }

    pub fn failures(&self) -> &[AssetError] {
        &self.failures
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Convert to a process-level result. Prints the failure summary when
    /// any file failed, so the driver can simply `?` this.
    pub fn into_result(self) -> anyhow::Result<()> {
        if self.failures.is_empty() {
            return Ok(());
        }
        eprintln!("\n{self}");
        anyhow::bail!(
            "{} of {} file(s) failed",
            self.failures.len(),
            self.processed + self.failures.len()
        )
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "failed files:".red().bold())?;
        for err in &self.failures {
            writeln!(f, "- {}", err.path().display())?;
        }
        Ok(())
    }
}
