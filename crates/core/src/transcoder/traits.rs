//! Trait definitions for the transcoder module.

use async_trait::async_trait;

use super::error::TranscoderError;
use super::types::{ExtractionJob, ExtractionResult};

/// A transcoder that can extract an audio track from a media file.
#[async_trait]
pub trait Transcoder: Send + Sync {
    /// Returns the name of this transcoder implementation.
    fn name(&self) -> &str;

    /// Extracts audio from the input file according to the job specification.
    ///
    /// The invocation is synchronous from the caller's perspective: it
    /// completes only once the external process has exited.
    async fn extract_audio(&self, job: ExtractionJob) -> Result<ExtractionResult, TranscoderError>;

    /// Validates that the transcoder is properly configured and ready.
    async fn validate(&self) -> Result<(), TranscoderError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcoder::types::AudioSpec;
    use std::path::PathBuf;

    struct NoopTranscoder;

    #[async_trait]
    impl Transcoder for NoopTranscoder {
        fn name(&self) -> &str {
            "noop"
        }

        async fn extract_audio(
            &self,
            job: ExtractionJob,
        ) -> Result<ExtractionResult, TranscoderError> {
            Ok(ExtractionResult {
                output_path: job.output_path,
                output_size_bytes: 0,
                duration_ms: 0,
            })
        }

        async fn validate(&self) -> Result<(), TranscoderError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_noop_transcoder_extract() {
        let transcoder = NoopTranscoder;
        let job = ExtractionJob {
            input_path: PathBuf::from("/in/clip.mp4"),
            output_path: PathBuf::from("/out/clip.wav"),
            spec: AudioSpec::classifier_default(),
        };
        let result = transcoder.extract_audio(job).await.unwrap();
        assert_eq!(result.output_path, PathBuf::from("/out/clip.wav"));
    }
}
