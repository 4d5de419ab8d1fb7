use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use soundmirror_core::{
    load_config, validate_config, Config, ErrorPolicy, FfmpegTranscoder, Transcoder, TreeMirror,
};

/// Mirror a video directory tree into a mono 16kHz audio tree.
///
/// Walks the input tree, recreates its structure under the output root,
/// extracts a classifier-ready audio track from every non-excluded file,
/// and copies sidecar annotation files (segmentation/ELAN) verbatim.
#[derive(Debug, Parser)]
#[command(name = "soundmirror", version)]
struct Args {
    /// Root directory containing the source video tree
    #[arg(short = 'i', long)]
    input_dir: PathBuf,

    /// Root directory for the mirrored audio tree (created if missing)
    #[arg(short = 'o', long, default_value = ".")]
    output_dir: PathBuf,

    /// Target audio container/extension (overrides config)
    #[arg(short = 'f', long)]
    format: Option<String>,

    /// Sidecar extension to copy verbatim, repeatable (overrides config)
    #[arg(short = 'p', long = "passthrough")]
    passthrough: Vec<String>,

    /// How per-file failures are handled (overrides config)
    #[arg(long, value_enum)]
    error_policy: Option<ErrorPolicyArg>,

    /// Optional TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Log every processed file
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ErrorPolicyArg {
    SkipAndLog,
    Abort,
}

impl From<ErrorPolicyArg> for ErrorPolicy {
    fn from(arg: ErrorPolicyArg) -> Self {
        match arg {
            ErrorPolicyArg::SkipAndLog => ErrorPolicy::SkipAndLog,
            ErrorPolicyArg::Abort => ErrorPolicy::Abort,
        }
    }
}

#[tokio::main]
async fn main() {
    // Argument errors exit with status 2 via clap before we get here.
    let args = Args::parse();

    if let Err(e) = run(args).await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    // Initialize logging
    let default_filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; the file is optional and flags override it
    let mut config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => Config::default(),
    };

    if let Some(format) = args.format {
        config.mirror.target_format = format;
    }
    if !args.passthrough.is_empty() {
        config.mirror.passthrough_extensions = args.passthrough;
    }
    if let Some(policy) = args.error_policy {
        config.mirror.error_policy = policy.into();
    }

    validate_config(&config).context("Configuration validation failed")?;

    info!(
        input = %args.input_dir.display(),
        output = %args.output_dir.display(),
        format = %config.mirror.target_format,
        "Starting audio tree mirroring"
    );

    // The traversal only creates descendants of the output root
    tokio::fs::create_dir_all(&args.output_dir)
        .await
        .with_context(|| format!("Failed to create output root {:?}", args.output_dir))?;

    let transcoder = FfmpegTranscoder::new(config.transcoder.clone());
    if let Err(e) = transcoder.validate().await {
        // Best-effort batch policy: per-file failures surface in the report
        warn!("Transcoder validation failed, conversions will likely fail: {e}");
    }

    let mirror = TreeMirror::new(config.mirror.clone(), transcoder);
    let report = mirror
        .convert_tree(&args.input_dir, &args.output_dir)
        .await
        .context("Tree mirroring failed")?;

    info!(
        dirs_created = report.dirs_created,
        files_copied = report.files_copied,
        files_converted = report.files_converted,
        "Done"
    );
    if !report.is_clean() {
        warn!(
            "{} file(s) were skipped; rerun with -v for details",
            report.failures.len()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_minimal_args() {
        let args = Args::parse_from(["soundmirror", "-i", "/videos"]);
        assert_eq!(args.input_dir, PathBuf::from("/videos"));
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert!(args.format.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_parse_full_args() {
        let args = Args::parse_from([
            "soundmirror",
            "-i",
            "/videos",
            "-o",
            "/audio",
            "-f",
            "flac",
            "-p",
            "seg",
            "-p",
            "eaf",
            "--error-policy",
            "abort",
            "-v",
        ]);
        assert_eq!(args.output_dir, PathBuf::from("/audio"));
        assert_eq!(args.format.as_deref(), Some("flac"));
        assert_eq!(args.passthrough, vec!["seg", "eaf"]);
        assert!(matches!(args.error_policy, Some(ErrorPolicyArg::Abort)));
        assert!(args.verbose);
    }

    #[test]
    fn test_missing_input_dir_is_an_error() {
        let result = Args::try_parse_from(["soundmirror"]);
        assert!(result.is_err());
    }
}
