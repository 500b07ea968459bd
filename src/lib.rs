//! closure-build: orchestrate Closure Compiler builds of a JavaScript application.
//!
//! The heavy lifting (dependency analysis, optimization, dead-code
//! elimination) happens inside the externally owned compiler jar and the
//! calcdeps.py helper. This crate only discovers input files, assembles the
//! argument vectors, shells out, and propagates the child's status.

pub mod command;
pub mod config;
pub mod discovery;
pub mod error;
pub mod runner;

pub use config::BuildConfig;
pub use error::BuildError;

/// Compile the application with the Closure Compiler.
///
/// Discovers inputs, assembles the compiler command, runs it, and returns
/// the compiler's stdout bytes on success.
pub fn compile(config: &BuildConfig) -> Result<Vec<u8>, BuildError> {
    let argv = command::compile_command(config)?;
    eprintln!("closure-build: running {}", runner::render(&argv));
    runner::run(&argv)
}

/// Regenerate the dependency list with calcdeps.py.
///
/// Writes `config.deps_output` as a side effect of the child process.
pub fn make_deps(config: &BuildConfig) -> Result<Vec<u8>, BuildError> {
    let argv = command::deps_command(config);
    eprintln!("closure-build: running {}", runner::render(&argv));
    runner::run(&argv)
}

/// Print the compiler's own usage text.
pub fn compiler_help(config: &BuildConfig) -> Result<Vec<u8>, BuildError> {
    let argv = command::compiler_help_command(config);
    eprintln!("closure-build: running {}", runner::render(&argv));
    runner::run(&argv)
}
