//! Mirror module: the tree traversal-and-transform core.
//!
//! Given an input root, `TreeMirror` reproduces its subdirectory structure
//! at an output root and dispatches every non-excluded file to either a
//! verbatim copy (passthrough extensions) or an audio extraction through
//! the injected `Transcoder`.
//!
//! The run is fully sequential: each extraction blocks the traversal until
//! the external process exits. Batch offline conversion is not
//! latency-sensitive, so there is no parallelism, queueing, or retry.

mod config;
mod error;
mod tree;
mod types;

pub use config::{ErrorPolicy, MirrorConfig};
pub use error::MirrorError;
pub use tree::{TreeMirror, EXCLUDE_PREFIXES};
pub use types::{FailureKind, FileFailure, MirrorReport};
