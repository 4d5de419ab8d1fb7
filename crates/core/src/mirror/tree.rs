//! Tree mirroring traversal.
//!
//! Walks an input directory tree depth-first, recreates its structure under
//! an output root, and for every non-excluded file either copies it verbatim
//! (passthrough extensions) or feeds it to the transcoder. Entries whose
//! name starts with `"__"` or `"."` are skipped entirely, excluded
//! directories are never descended into.

use std::ffi::OsStr;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::transcoder::{AudioSpec, ExtractionJob, Transcoder};

use super::config::{ErrorPolicy, MirrorConfig};
use super::error::MirrorError;
use super::types::{FailureKind, FileFailure, MirrorReport};

/// Filename prefixes that exclude an entry and all of its descendants.
pub const EXCLUDE_PREFIXES: [&str; 2] = ["__", "."];

/// Returns true if the entry name starts with an exclusion prefix.
fn is_excluded(name: &OsStr) -> bool {
    let name = name.to_string_lossy();
    EXCLUDE_PREFIXES.iter().any(|p| name.starts_with(p))
}

/// Replaces the file's extension with the target format, appending it when
/// the name has no extension at all.
fn output_file_name(name: &str, format: &str) -> String {
    let stem = Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name);
    format!("{stem}.{format}")
}

/// Mirrors an input directory tree into an output tree, replacing media
/// files with extracted mono/16kHz audio and copying sidecar files verbatim.
pub struct TreeMirror<T: Transcoder> {
    config: MirrorConfig,
    transcoder: T,
}

impl<T: Transcoder> TreeMirror<T> {
    /// Creates a new tree mirror with the given configuration and transcoder.
    pub fn new(config: MirrorConfig, transcoder: T) -> Self {
        Self { config, transcoder }
    }

    /// Runs one full traversal of `input_root`, producing the mirrored tree
    /// under `output_root` as a side effect.
    ///
    /// `output_root` must already exist; only its descendants are created,
    /// one level at a time as the corresponding input directory is visited.
    /// Depth-first top-down ordering guarantees a parent output directory
    /// exists before any of its children are created.
    pub async fn convert_tree(
        &self,
        input_root: &Path,
        output_root: &Path,
    ) -> Result<MirrorReport, MirrorError> {
        if !input_root.is_dir() {
            return Err(MirrorError::InputRootNotADirectory {
                path: input_root.to_path_buf(),
            });
        }
        if !output_root.is_dir() {
            return Err(MirrorError::OutputRootMissing {
                path: output_root.to_path_buf(),
            });
        }

        let mut report = MirrorReport::default();

        // The root itself is exempt from the prefix check; the original
        // walk only filtered directory listings, never its starting point.
        let walker = WalkDir::new(input_root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_excluded(e.file_name()));

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_dir() {
                continue;
            }

            let rel = entry
                .path()
                .strip_prefix(input_root)
                .expect("walk entries are rooted at the input root");
            let out_dir = output_root.join(rel);

            // A same-named non-directory entry at this path makes
            // create_dir fail with EEXIST and aborts the run.
            if !out_dir.is_dir() {
                fs::create_dir(&out_dir)
                    .await
                    .map_err(|e| MirrorError::DirectoryConflict {
                        path: out_dir.clone(),
                        source: e,
                    })?;
                report.dirs_created += 1;
                debug!(dir = %out_dir.display(), "Created output directory");
            }

            self.process_directory(entry.path(), &out_dir, &mut report)
                .await?;
        }

        info!(
            dirs_created = report.dirs_created,
            files_copied = report.files_copied,
            files_converted = report.files_converted,
            failures = report.failures.len(),
            "Tree mirroring complete"
        );
        Ok(report)
    }

    /// Handles the files of one visited directory: the passthrough copy
    /// pass first, then the conversion pass over every remaining file.
    async fn process_directory(
        &self,
        in_dir: &Path,
        out_dir: &Path,
        report: &mut MirrorReport,
    ) -> Result<(), MirrorError> {
        let names = self.list_file_names(in_dir).await?;

        // Passthrough pass: one sweep per configured extension. These files
        // stay eligible for the conversion pass below.
        for ext in &self.config.passthrough_extensions {
            let suffix = format!(".{ext}");
            for name in names.iter().filter(|n| n.ends_with(&suffix)) {
                let src = in_dir.join(name);
                let dst = out_dir.join(name);
                match fs::copy(&src, &dst).await {
                    Ok(_) => {
                        report.files_copied += 1;
                        debug!(file = %src.display(), "Copied sidecar file");
                    }
                    Err(e) => self.handle_failure(
                        report,
                        FileFailure {
                            path: src,
                            kind: FailureKind::Copy,
                            message: e.to_string(),
                        },
                    )?,
                }
            }
        }

        // Conversion pass: no extension filtering, extensionless files
        // included.
        for name in &names {
            if !self.config.double_process_passthrough && self.is_passthrough(name) {
                continue;
            }

            let src = in_dir.join(name);
            let dst = out_dir.join(output_file_name(name, &self.config.target_format));
            let job = ExtractionJob {
                input_path: src.clone(),
                output_path: dst,
                spec: AudioSpec::classifier_with_format(self.config.target_format.clone()),
            };

            match self.transcoder.extract_audio(job).await {
                Ok(result) => {
                    report.files_converted += 1;
                    info!(
                        input = %src.display(),
                        output = %result.output_path.display(),
                        "Extracted audio"
                    );
                }
                Err(e) => self.handle_failure(
                    report,
                    FileFailure {
                        path: src,
                        kind: FailureKind::Transcode,
                        message: e.to_string(),
                    },
                )?,
            }
        }

        Ok(())
    }

    /// Lists the non-excluded file names of a directory, sorted for
    /// deterministic processing order.
    async fn list_file_names(&self, dir: &Path) -> Result<Vec<String>, MirrorError> {
        let mut names = Vec::new();
        let mut entries = fs::read_dir(dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_dir() {
                continue;
            }
            if is_excluded(&entry.file_name()) {
                continue;
            }
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn is_passthrough(&self, name: &str) -> bool {
        self.config
            .passthrough_extensions
            .iter()
            .any(|ext| name.ends_with(&format!(".{ext}")))
    }

    fn handle_failure(
        &self,
        report: &mut MirrorReport,
        failure: FileFailure,
    ) -> Result<(), MirrorError> {
        match self.config.error_policy {
            ErrorPolicy::SkipAndLog => {
                warn!(
                    file = %failure.path.display(),
                    kind = ?failure.kind,
                    "Skipping failed file: {}",
                    failure.message
                );
                report.failures.push(failure);
                Ok(())
            }
            ErrorPolicy::Abort => Err(MirrorError::Aborted(failure)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_excluded_prefixes() {
        assert!(is_excluded(OsStr::new(".hidden")));
        assert!(is_excluded(OsStr::new("__pycache__")));
        assert!(is_excluded(OsStr::new(".DS_Store")));
        assert!(!is_excluded(OsStr::new("_single_underscore")));
        assert!(!is_excluded(OsStr::new("regular.mp4")));
    }

    #[test]
    fn test_output_file_name_replaces_extension() {
        assert_eq!(output_file_name("clip.mp4", "wav"), "clip.wav");
        assert_eq!(output_file_name("b.seg", "wav"), "b.wav");
    }

    #[test]
    fn test_output_file_name_extensionless() {
        assert_eq!(output_file_name("rawdump", "wav"), "rawdump.wav");
    }

    #[test]
    fn test_output_file_name_strips_only_last_extension() {
        assert_eq!(output_file_name("archive.tar.gz", "wav"), "archive.tar.wav");
    }
}
