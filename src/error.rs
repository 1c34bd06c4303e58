//! Error types for nhctl invocations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NhctlError {
    #[error("failed to start '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with status {code}: {output}")]
    CommandFailed {
        command: String,
        code: i32,
        /// Full merged stdout/stderr of the failed run, for diagnostics.
        output: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("describe output decode error: {message}")]
    Decode {
        message: String,
        /// The raw text that failed to decode, so callers can fall back to
        /// showing it unparsed.
        text: String,
    },
}
