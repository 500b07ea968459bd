//! Argument-vector builders for the external tools.
//!
//! Each builder returns the full command line as an ordered token list,
//! program first. Nothing here launches a process; that is the runner's job.

use std::ffi::OsString;
use std::path::Path;

use crate::config::BuildConfig;
use crate::discovery::find_files;
use crate::error::BuildError;

/// Glob pattern every compiler input must match.
pub const JS_PATTERN: &str = "*.js";

/// Library paths containing this substring are skipped (demo code is not
/// shipped).
const DEMOS_EXCLUSION: &str = "demos";

/// Command line for the calcdeps.py dependency-list generator.
///
/// Pure function of the configuration; performs no I/O itself.
pub fn deps_command(config: &BuildConfig) -> Vec<OsString> {
    let mut command: Vec<OsString> = vec!["python".into(), config.calcdeps_script.clone().into()];

    command.push("--output_file".into());
    command.push(config.deps_output.clone().into());
    command.push("--d".into());
    command.push(config.library_root.clone().into());
    command.push("-o".into());
    command.push("deps".into());

    command.push("-i".into());
    command.push(config.application_js.clone().into());

    for dir in config.source_dir_paths() {
        command.push("-p".into());
        command.push(dir.into());
    }

    command
}

/// `java -jar compiler.jar`, shared by the compile and help commands.
fn compiler_base(config: &BuildConfig) -> Vec<OsString> {
    vec!["java".into(), "-jar".into(), config.compiler_jar.clone().into()]
}

/// Command line invoking the compiler on every discovered input.
///
/// `--js` inputs are ordered: library files first (minus demos), then each
/// configured source directory in order, then the entry point last. Discovery
/// failures (missing directories) propagate; an empty input set is passed
/// through without validation, the compiler reports its own error.
pub fn compile_command(config: &BuildConfig) -> Result<Vec<OsString>, BuildError> {
    let mut command = compiler_base(config);

    let mut inputs = Vec::new();
    for file in find_files(&config.library_root, JS_PATTERN)? {
        if !path_contains(&file, DEMOS_EXCLUSION) {
            inputs.push(file);
        }
    }
    for dir in config.source_dir_paths() {
        inputs.extend(find_files(&dir, JS_PATTERN)?);
    }
    inputs.push(config.application_js.clone());

    for file in inputs {
        command.push("--js".into());
        command.push(file.into());
    }

    for file in find_files(&config.externs_dir, JS_PATTERN)? {
        command.push("--externs".into());
        command.push(file.into());
    }

    command.push("--manage_closure_dependencies".into());
    command.push("true".into());
    command.push("--compilation_level".into());
    command.push("ADVANCED_OPTIMIZATIONS".into());
    command.push("--summary_detail_level".into());
    command.push("3".into());
    command.push("--warning_level".into());
    command.push("VERBOSE".into());
    command.push("--jscomp_dev_mode".into());
    command.push("EVERY_PASS".into());
    command.push("--js_output_file".into());
    command.push(config.compiled_output.clone().into());

    Ok(command)
}

/// Command line asking the compiler to print its own usage text.
pub fn compiler_help_command(config: &BuildConfig) -> Vec<OsString> {
    let mut command = compiler_base(config);
    command.push("--help".into());
    command
}

fn path_contains(path: &Path, needle: &str) -> bool {
    path.to_string_lossy().contains(needle)
}
