pub mod config;
pub mod mirror;
pub mod testing;
pub mod transcoder;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError,
};
pub use mirror::{
    ErrorPolicy, FailureKind, FileFailure, MirrorConfig, MirrorError, MirrorReport, TreeMirror,
};
pub use transcoder::{
    AudioSpec, ExtractionJob, ExtractionResult, FfmpegTranscoder, Transcoder, TranscoderConfig,
    TranscoderError,
};
