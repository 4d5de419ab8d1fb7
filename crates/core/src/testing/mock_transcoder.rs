//! Mock transcoder for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::transcoder::{
    ExtractionJob, ExtractionResult, Transcoder, TranscoderError,
};

/// Mock implementation of the Transcoder trait.
///
/// Provides controllable behavior for testing:
/// - Records every submitted job for assertions
/// - Simulates blanket or one-shot failures
/// - Optionally writes a stub output file so filesystem-level assertions work
///
/// # Example
///
/// ```rust,ignore
/// use soundmirror_core::testing::MockTranscoder;
///
/// let transcoder = MockTranscoder::new();
/// transcoder.set_fail_all(true).await;
///
/// // ... run the tree mirror against it ...
///
/// let jobs = transcoder.recorded_jobs().await;
/// assert_eq!(jobs.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct MockTranscoder {
    /// Recorded extraction jobs.
    jobs: Arc<RwLock<Vec<ExtractionJob>>>,
    /// If true, every extraction fails.
    fail_all: Arc<RwLock<bool>>,
    /// If set, the next extraction fails with this error.
    next_error: Arc<RwLock<Option<TranscoderError>>>,
    /// Whether to write a stub file at the job's output path.
    write_output: Arc<RwLock<bool>>,
}

impl Default for MockTranscoder {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTranscoder {
    /// Create a new mock transcoder.
    pub fn new() -> Self {
        Self {
            jobs: Arc::new(RwLock::new(Vec::new())),
            fail_all: Arc::new(RwLock::new(false)),
            next_error: Arc::new(RwLock::new(None)),
            write_output: Arc::new(RwLock::new(true)),
        }
    }

    /// Get all recorded extraction jobs.
    pub async fn recorded_jobs(&self) -> Vec<ExtractionJob> {
        self.jobs.read().await.clone()
    }

    /// Get the number of extractions attempted.
    pub async fn job_count(&self) -> usize {
        self.jobs.read().await.len()
    }

    /// Clear recorded jobs.
    pub async fn clear_recorded(&self) {
        self.jobs.write().await.clear();
    }

    /// Make every subsequent extraction fail.
    pub async fn set_fail_all(&self, fail: bool) {
        *self.fail_all.write().await = fail;
    }

    /// Configure the next extraction to fail with the given error.
    pub async fn set_next_error(&self, error: TranscoderError) {
        *self.next_error.write().await = Some(error);
    }

    /// Enable or disable writing stub output files.
    pub async fn set_write_output(&self, write: bool) {
        *self.write_output.write().await = write;
    }

    async fn take_error(&self) -> Option<TranscoderError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl Transcoder for MockTranscoder {
    fn name(&self) -> &str {
        "mock"
    }

    async fn extract_audio(&self, job: ExtractionJob) -> Result<ExtractionResult, TranscoderError> {
        self.jobs.write().await.push(job.clone());

        if let Some(err) = self.take_error().await {
            return Err(err);
        }
        if *self.fail_all.read().await {
            return Err(TranscoderError::extraction_failed(
                "simulated extraction failure",
                None,
            ));
        }

        let stub = b"stub audio";
        if *self.write_output.read().await {
            tokio::fs::write(&job.output_path, stub).await?;
        }

        Ok(ExtractionResult {
            output_path: job.output_path,
            output_size_bytes: stub.len() as u64,
            duration_ms: 0,
        })
    }

    async fn validate(&self) -> Result<(), TranscoderError> {
        Ok(())
    }
}
