//! Error types for the mirror module.

use std::path::PathBuf;
use thiserror::Error;

use super::types::FileFailure;

/// Errors that abort a tree mirroring run.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// Input root does not exist or is not a directory.
    #[error("Input root is not a directory: {path}")]
    InputRootNotADirectory { path: PathBuf },

    /// Output root must exist before the run; only its descendants are created.
    #[error("Output root does not exist: {path}")]
    OutputRootMissing { path: PathBuf },

    /// Output directory could not be created, usually because a same-named
    /// non-directory entry already occupies the path.
    #[error("Failed to create output directory: {path}")]
    DirectoryConflict {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The directory walk itself failed.
    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// I/O error while listing directory contents.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A per-file failure stopped the run under `ErrorPolicy::Abort`.
    #[error("Aborted after failure on {}: {}", .0.path.display(), .0.message)]
    Aborted(FileFailure),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mirror::types::FailureKind;

    #[test]
    fn test_aborted_display_names_file() {
        let err = MirrorError::Aborted(FileFailure {
            path: PathBuf::from("/in/sub/b.mp4"),
            kind: FailureKind::Transcode,
            message: "ffmpeg exited with code 1".to_string(),
        });
        let msg = err.to_string();
        assert!(msg.contains("b.mp4"));
        assert!(msg.contains("exited with code 1"));
    }
}
