// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Build driver for a flat C project.
//!
//! Sources are discovered under one root, compiled into a single executable
//! with one compiler invocation, and the result is optionally run. A
//! compilation database can be produced from the compiler's `-MJ` output.

/// Build configuration and its file/environment layers
pub mod config;

/// Recursive source discovery
pub mod discovery;

/// Compiler and run-step command lines
pub mod invocation;

/// Child process launching
pub mod runner;

/// `compile_commands.json` post-processing
pub mod compile_db;

/// Append-only build log
pub mod logging;

/// Build error type
pub mod error;

use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;

use log::{info, warn};

pub use config::BuildConfig;
pub use error::{BuildError, BuildResult};
pub use invocation::Invocation;
pub use runner::{ExitState, ProcessRunner, SystemRunner};

/// The only command-line token the driver recognizes.
pub const RUN_FLAG: &str = "--run";

/// Result of a successful compile step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    /// Discovery found nothing; no process was launched.
    NothingToCompile,
    /// The compiler exited cleanly.
    Built,
}

/// True when `--run` appears anywhere in `args`.
pub fn run_requested<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    args.into_iter().any(|a| a.as_ref() == OsStr::new(RUN_FLAG))
}

/// Compile `files` into `config.output` with a single compiler launch.
pub fn compile<R>(config: &BuildConfig, files: &[PathBuf], runner: &mut R) -> BuildResult<BuildOutcome>
where
    R: ProcessRunner + ?Sized,
{
    if files.is_empty() {
        println!("No files to compile!");
        warn!("no .{} sources under {}", config.extension, config.source_dir.display());
        return Ok(BuildOutcome::NothingToCompile);
    }
    if config.compile_commands {
        compile_db::clear_fragment(&config.fragment_path)?;
    }

    let binary = config.binary_path();
    if let Some(dir) = binary.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| BuildError::OutputDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let invocation = Invocation::compiler(config, files);
    let output = config.output_file();
    let log_file = config.log_file.as_deref();
    println!("{invocation}");
    info!("compiling {} file(s) into {}", files.len(), output);
    crate::build_info!(log_file, invocation.program(), &output, files.len(), "compile");

    let status = runner.launch(&invocation)?;
    if !status.success() {
        crate::build_error!(log_file, invocation.program(), &output, files.len(), &status.to_string());
        return Err(BuildError::CompilerFailed { status });
    }

    if config.compile_commands {
        compile_db::rewrite(&config.fragment_path, &config.database_path)?;
    }
    Ok(BuildOutcome::Built)
}

/// Discover sources per `config` and compile them.
pub fn build<R>(config: &BuildConfig, runner: &mut R) -> BuildResult<BuildOutcome>
where
    R: ProcessRunner + ?Sized,
{
    let files = discovery::find_files(&config.source_dir, &config.extension, &config.exclude);
    compile(config, &files, runner)
}

/// Launch the produced executable and wait for it.
pub fn run_binary<R>(config: &BuildConfig, runner: &mut R) -> BuildResult<ExitState>
where
    R: ProcessRunner + ?Sized,
{
    let invocation = Invocation::binary(config);
    info!("running {}", invocation.program().display());
    crate::build_info!(config.log_file.as_deref(), invocation.program(), &config.output_file(), 0, "run");
    runner.launch(&invocation)
}

/// Full pipeline. Returns the run step's exit state when `--run` was given
/// and the build produced a binary.
pub fn run<R, I, S>(config: &BuildConfig, args: I, runner: &mut R) -> BuildResult<Option<ExitState>>
where
    R: ProcessRunner + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let outcome = build(config, runner)?;
    if !run_requested(args) {
        return Ok(None);
    }
    match outcome {
        BuildOutcome::Built => run_binary(config, runner).map(Some),
        BuildOutcome::NothingToCompile => {
            warn!("{RUN_FLAG} ignored: nothing was built");
            Ok(None)
        }
    }
}

/// Process exit code for a pipeline result: 0 on success, the child's code
/// when the compiler or the run step exits non-zero, 1 for signals and every
/// other error.
pub fn exit_code(result: &BuildResult<Option<ExitState>>) -> i32 {
    let failed = |state: &ExitState| state.code().filter(|c| *c != 0).unwrap_or(1);
    match result {
        Ok(None) => 0,
        Ok(Some(state)) if state.success() => 0,
        Ok(Some(state)) => failed(state),
        Err(BuildError::CompilerFailed { status }) => failed(status),
        Err(_) => 1,
    }
}
