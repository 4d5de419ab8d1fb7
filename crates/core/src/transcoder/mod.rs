//! Transcoder module for extracting audio tracks from media files.
//!
//! This module provides the `Transcoder` trait and an FFmpeg-backed
//! implementation. The trait exists so the tree mirroring logic can be
//! exercised against a fake in tests without spawning processes.
//!
//! # Example
//!
//! ```ignore
//! use soundmirror_core::transcoder::{AudioSpec, ExtractionJob, FfmpegTranscoder, Transcoder};
//!
//! let transcoder = FfmpegTranscoder::with_defaults();
//! transcoder.validate().await?;
//!
//! let job = ExtractionJob {
//!     input_path: PathBuf::from("/videos/clip.mp4"),
//!     output_path: PathBuf::from("/audio/clip.wav"),
//!     spec: AudioSpec::classifier_default(),
//! };
//! let result = transcoder.extract_audio(job).await?;
//! println!("Extracted {} bytes", result.output_size_bytes);
//! ```

mod config;
mod error;
mod ffmpeg;
mod traits;
mod types;

pub use config::TranscoderConfig;
pub use error::TranscoderError;
pub use ffmpeg::FfmpegTranscoder;
pub use traits::Transcoder;
pub use types::{
    AudioSpec, ExtractionJob, ExtractionResult, CLASSIFIER_CHANNELS, CLASSIFIER_SAMPLE_RATE_HZ,
};
