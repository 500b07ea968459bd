use std::io;

use thiserror::Error;

/// Library-wide error type for closure-build operations.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Directory traversal failed (missing or unreadable directory).
    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    /// Malformed glob pattern.
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),

    /// Argument vector contained no program token.
    #[error("Empty command line")]
    EmptyCommand,

    /// Child process could not be started.
    #[error("Failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Child process exited with a non-zero status.
    #[error("'{program}' exited with {}", describe_exit(.code))]
    ToolFailed {
        program: String,
        code: Option<i32>,
        stdout: Vec<u8>,
        stderr: Vec<u8>,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}
