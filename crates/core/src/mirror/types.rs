//! Types for the mirror module.

use serde::Serialize;
use std::path::PathBuf;

/// Which operation a per-file failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Verbatim copy of a passthrough file failed.
    Copy,
    /// Audio extraction of a convertible file failed.
    Transcode,
}

/// A per-file failure recorded during a run.
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    /// Input file the operation was attempted on.
    pub path: PathBuf,
    /// Which operation failed.
    pub kind: FailureKind,
    /// Human-readable failure description.
    pub message: String,
}

/// Summary of one tree mirroring run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MirrorReport {
    /// Output directories created by this run.
    pub dirs_created: u64,
    /// Passthrough files copied verbatim.
    pub files_copied: u64,
    /// Files successfully transcoded.
    pub files_converted: u64,
    /// Per-file failures skipped under `ErrorPolicy::SkipAndLog`.
    pub failures: Vec<FileFailure>,
}

impl MirrorReport {
    /// Whether the run completed without any per-file failures.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_clean() {
        assert!(MirrorReport::default().is_clean());
    }

    #[test]
    fn test_report_with_failure_is_not_clean() {
        let mut report = MirrorReport::default();
        report.failures.push(FileFailure {
            path: PathBuf::from("/in/bad.mp4"),
            kind: FailureKind::Transcode,
            message: "boom".to_string(),
        });
        assert!(!report.is_clean());
    }
}
