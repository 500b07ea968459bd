//! Recursive file discovery for compiler inputs.

use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::error::BuildError;

/// Collect every file under `root` whose file name matches `pattern`,
/// visiting subdirectories to arbitrary depth.
///
/// Entries are visited in file-name order at each level, so the returned
/// list is deterministic across platforms. The compiler is order-sensitive
/// for its `--js` inputs, which makes this ordering part of the build
/// contract.
///
/// A missing or unreadable directory is a fatal error; an existing directory
/// with no matching files yields an empty vector.
pub fn find_files(root: &Path, pattern: &str) -> Result<Vec<PathBuf>, BuildError> {
    let pattern = Pattern::new(pattern)?;
    let mut found = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry.file_name().to_str().is_some_and(|name| pattern.matches(name));
        if matches {
            found.push(entry.into_path());
        }
    }

    Ok(found)
}
