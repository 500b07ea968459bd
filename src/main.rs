use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use closure_build::{BuildConfig, BuildError};

#[derive(Parser)]
#[command(name = "closure-build")]
#[command(version)]
#[command(
    about = "Orchestrate Closure Compiler builds of a JavaScript application",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile the application to a single optimized file (the default)
    Compile,
    /// Regenerate the dependency list with calcdeps.py
    Deps,
    /// Show the compiler jar's own usage text
    CompilerHelp,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = BuildConfig::default();

    let (result, failure_message) = match cli.command {
        None | Some(Commands::Compile) => {
            (closure_build::compile(&config), "JavaScript compilation failed")
        }
        Some(Commands::Deps) => {
            (closure_build::make_deps(&config), "Dependency generation failed")
        }
        Some(Commands::CompilerHelp) => {
            (closure_build::compiler_help(&config), "Compiler help failed")
        }
    };

    match result {
        Ok(stdout) => {
            if let Err(e) = io::stdout().write_all(&stdout) {
                eprintln!("Error: {}", e);
                return ExitCode::from(2);
            }
            ExitCode::SUCCESS
        }
        Err(BuildError::ToolFailed { stdout, stderr, .. }) => {
            // The child already said what went wrong; forward both streams
            // before the fixed failure line.
            let _ = io::stdout().write_all(&stdout);
            let _ = io::stderr().write_all(&stderr);
            eprintln!("closure-build: {}", failure_message);
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
