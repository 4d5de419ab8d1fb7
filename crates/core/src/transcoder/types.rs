//! Types for the transcoder module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Sample rate expected by the downstream audio classifier.
pub const CLASSIFIER_SAMPLE_RATE_HZ: u32 = 16_000;

/// Channel count expected by the downstream audio classifier (mono).
pub const CLASSIFIER_CHANNELS: u8 = 1;

/// Target audio properties for an extraction.
///
/// The format is a container/extension token understood by ffmpeg's `-f`
/// flag (e.g. "wav", "flac").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioSpec {
    /// Output container/format token, also used as the file extension.
    pub format: String,
    /// Target sample rate in Hz.
    pub sample_rate_hz: u32,
    /// Number of audio channels (1 = mono).
    pub channels: u8,
}

impl AudioSpec {
    /// The fixed mono/16kHz policy required by classifier ingestion.
    pub fn classifier_default() -> Self {
        Self {
            format: "wav".to_string(),
            sample_rate_hz: CLASSIFIER_SAMPLE_RATE_HZ,
            channels: CLASSIFIER_CHANNELS,
        }
    }

    /// Same fixed policy with a different container format.
    pub fn classifier_with_format(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            ..Self::classifier_default()
        }
    }
}

impl Default for AudioSpec {
    fn default() -> Self {
        Self::classifier_default()
    }
}

/// An audio extraction request.
#[derive(Debug, Clone)]
pub struct ExtractionJob {
    /// Input media file path.
    pub input_path: PathBuf,
    /// Output audio file path.
    pub output_path: PathBuf,
    /// Target audio properties.
    pub spec: AudioSpec,
}

/// Result of a successful extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Output file path.
    pub output_path: PathBuf,
    /// Output file size in bytes.
    pub output_size_bytes: u64,
    /// Extraction duration in milliseconds.
    pub duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifier_default_spec() {
        let spec = AudioSpec::classifier_default();
        assert_eq!(spec.format, "wav");
        assert_eq!(spec.sample_rate_hz, 16_000);
        assert_eq!(spec.channels, 1);
    }

    #[test]
    fn test_classifier_with_format_keeps_rate_and_channels() {
        let spec = AudioSpec::classifier_with_format("flac");
        assert_eq!(spec.format, "flac");
        assert_eq!(spec.sample_rate_hz, 16_000);
        assert_eq!(spec.channels, 1);
    }

    #[test]
    fn test_spec_serialization_round_trip() {
        let spec = AudioSpec::classifier_default();
        let json = serde_json::to_string(&spec).unwrap();
        let parsed: AudioSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, spec);
    }
}
