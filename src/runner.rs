//! Child-process execution and status propagation.

use std::ffi::OsString;
use std::process::Command;

use crate::error::BuildError;

/// Launch `argv` as a child process, block until it exits, and return its
/// captured stdout on success.
///
/// Both output streams are captured; on a non-zero exit they travel inside
/// the error so the caller can surface them. There is no timeout: a hung
/// child hangs the orchestrator.
pub fn run(argv: &[OsString]) -> Result<Vec<u8>, BuildError> {
    let (program, args) = argv.split_first().ok_or(BuildError::EmptyCommand)?;
    let program_name = program.to_string_lossy().into_owned();

    let output = Command::new(program).args(args).output().map_err(|source| {
        BuildError::Launch { program: program_name.clone(), source }
    })?;

    if !output.status.success() {
        return Err(BuildError::ToolFailed {
            program: program_name,
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        });
    }

    Ok(output.stdout)
}

/// Render an argument vector for logging.
pub fn render(argv: &[OsString]) -> String {
    argv.iter().map(|token| token.to_string_lossy().into_owned()).collect::<Vec<_>>().join(" ")
}
