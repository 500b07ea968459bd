use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Scripted stand-in for an external tool (`java`, `python`).
///
/// The script logs its argument vector to a file, emits fixed bytes on
/// stdout/stderr, and exits with a fixed code, so tests can assert both the
/// assembled command line and the orchestrator's status propagation.
pub struct FakeTool {
    log_file: PathBuf,
}

#[allow(dead_code)]
impl FakeTool {
    /// Install a fake `name` executable under `bin_dir`.
    pub fn install(bin_dir: &Path, name: &str, exit_code: i32, stdout: &str, stderr: &str) -> Self {
        fs::create_dir_all(bin_dir).expect("Failed to create bin dir");
        let script_path = bin_dir.join(name);
        let log_file = bin_dir.join(format!("{name}.log"));

        let script_content = format!(
            r#"#!/bin/sh
echo "$@" >> "{log}"
printf '%s' '{stdout}'
printf '%s' '{stderr}' >&2
exit {exit_code}
"#,
            log = log_file.to_string_lossy(),
        );

        fs::write(&script_path, script_content).expect("Failed to write fake tool script");
        let mut perms =
            fs::metadata(&script_path).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&script_path, perms).expect("Failed to set permissions");

        Self { log_file }
    }

    /// Everything the fake tool was invoked with, one line per invocation.
    pub fn log(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }
}
