//! Error types for manual renderer invocation.

use thiserror::Error;

/// Errors from invoking the external manual renderer.
///
/// Every variant is recoverable at the caller's boundary: a failure affects
/// one page or one listing, never the process.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The renderer binary could not be launched at all.
    #[error("manual renderer unavailable: {0}")]
    RendererUnavailable(std::io::Error),

    /// The renderer ran but exited abnormally.
    #[error("manual renderer exited with status {status}: {stderr}")]
    RendererFailed { status: i32, stderr: String },

    /// The renderer did not finish within the probe timeout.
    #[error("manual renderer timed out after {0} ms")]
    Timeout(u64),

    /// Pipe or wait I/O failure while driving the subprocess.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
