//! Configuration for the mirror module.

use serde::{Deserialize, Serialize};

/// How per-file copy/transcode failures are handled during a run.
///
/// Directory-creation conflicts are structural and always abort,
/// independent of this policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Log the failure, record it in the report, and keep going.
    #[default]
    SkipAndLog,
    /// Abort the traversal on the first failure.
    Abort,
}

/// Configuration for the tree mirroring traversal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirrorConfig {
    /// Target audio container/extension for converted files.
    #[serde(default = "default_target_format")]
    pub target_format: String,

    /// Sidecar extensions copied verbatim into the output tree.
    #[serde(default = "default_passthrough_extensions")]
    pub passthrough_extensions: Vec<String>,

    /// Whether passthrough files are also fed to the transcoder.
    ///
    /// The original batch tool applied both steps to matching files because
    /// the two filters were independent; this keeps that behavior
    /// selectable instead of silently changing it.
    #[serde(default = "default_true")]
    pub double_process_passthrough: bool,

    /// Per-file failure handling policy.
    #[serde(default)]
    pub error_policy: ErrorPolicy,
}

fn default_target_format() -> String {
    "wav".to_string()
}

fn default_passthrough_extensions() -> Vec<String> {
    vec!["seg".to_string(), "eaf".to_string()]
}

fn default_true() -> bool {
    true
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            target_format: default_target_format(),
            passthrough_extensions: default_passthrough_extensions(),
            double_process_passthrough: true,
            error_policy: ErrorPolicy::default(),
        }
    }
}

impl MirrorConfig {
    /// Sets the target audio format.
    pub fn with_target_format(mut self, format: impl Into<String>) -> Self {
        self.target_format = format.into();
        self
    }

    /// Sets the passthrough extension set.
    pub fn with_passthrough_extensions(mut self, extensions: Vec<String>) -> Self {
        self.passthrough_extensions = extensions;
        self
    }

    /// Enables or disables double-processing of passthrough files.
    pub fn with_double_process_passthrough(mut self, enabled: bool) -> Self {
        self.double_process_passthrough = enabled;
        self
    }

    /// Sets the per-file error policy.
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MirrorConfig::default();
        assert_eq!(config.target_format, "wav");
        assert_eq!(config.passthrough_extensions, vec!["seg", "eaf"]);
        assert!(config.double_process_passthrough);
        assert_eq!(config.error_policy, ErrorPolicy::SkipAndLog);
    }

    #[test]
    fn test_config_builder() {
        let config = MirrorConfig::default()
            .with_target_format("flac")
            .with_passthrough_extensions(vec!["srt".to_string()])
            .with_double_process_passthrough(false)
            .with_error_policy(ErrorPolicy::Abort);

        assert_eq!(config.target_format, "flac");
        assert_eq!(config.passthrough_extensions, vec!["srt"]);
        assert!(!config.double_process_passthrough);
        assert_eq!(config.error_policy, ErrorPolicy::Abort);
    }

    #[test]
    fn test_error_policy_deserializes_snake_case() {
        let config: MirrorConfig = toml::from_str(
            r#"
target_format = "wav"
error_policy = "abort"
"#,
        )
        .unwrap();
        assert_eq!(config.error_policy, ErrorPolicy::Abort);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: MirrorConfig = toml::from_str("").unwrap();
        assert_eq!(config.target_format, "wav");
        assert!(config.double_process_passthrough);
    }
}
