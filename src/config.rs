use std::path::{Path, PathBuf};

/// Immutable build configuration, constructed once at startup.
///
/// All paths are relative to the working directory the tool is invoked from.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Root of the JavaScript source tree.
    pub js_root: PathBuf,
    /// Vendored Closure Library subtree (`goog` sources).
    pub library_root: PathBuf,
    /// Application entry-point file, root of the dependency graph.
    pub application_js: PathBuf,
    /// Application source subdirectories under `js_root`, in build order.
    pub source_dirs: Vec<String>,
    /// The calcdeps.py helper shipped with the Closure Library.
    pub calcdeps_script: PathBuf,
    /// Where the generated dependency list is written.
    pub deps_output: PathBuf,
    /// Where the compiled bundle is written.
    pub compiled_output: PathBuf,
    /// Closure Compiler jar.
    pub compiler_jar: PathBuf,
    /// Externs declaration files.
    pub externs_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        let js_root = PathBuf::from("javascripts");
        let library_root = js_root.join("closure-library").join("closure");
        Self {
            application_js: js_root.join("application.js"),
            source_dirs: vec!["box2d".to_string(), "eightball".to_string(), "helpers".to_string()],
            calcdeps_script: library_root.join("bin").join("calcdeps.py"),
            deps_output: js_root.join("deps.js"),
            compiled_output: js_root.join("compiled.js"),
            compiler_jar: Path::new("_tools").join("closure_compiler").join("compiler.jar"),
            externs_dir: js_root.join("externs"),
            library_root,
            js_root,
        }
    }
}

impl BuildConfig {
    /// Absolute-order list of application source directories, resolved
    /// against `js_root`.
    pub fn source_dir_paths(&self) -> Vec<PathBuf> {
        self.source_dirs.iter().map(|dir| self.js_root.join(dir)).collect()
    }
}
