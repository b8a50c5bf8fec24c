// CLASSIFICATION: COMMUNITY
// Filename: error.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::runner::ExitState;

/// Errors produced while configuring, compiling or running a build.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("program `{program}` not found on PATH")]
    ProgramNotFound { program: String },
    #[error("failed to launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("cannot create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("compiler exited with {status}")]
    CompilerFailed { status: ExitState },
    #[error("cannot access compilation database fragment {}: {source}", path.display())]
    Fragment {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write compilation database {}: {source}", path.display())]
    Database {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value {value:?} for {key}")]
    Env { key: &'static str, value: String },
}

pub type BuildResult<T> = Result<T, BuildError>;
