// CLASSIFICATION: COMMUNITY
// Filename: runner.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Process launching for compiler and run-step invocations.
//!
//! [`ProcessRunner`] is the seam between command assembly and the operating
//! system. [`SystemRunner`] blocks on the child; tests plug in a recorder.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use log::debug;

use crate::error::{BuildError, BuildResult};
use crate::invocation::Invocation;

/// Termination state of a child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitState {
    code: Option<i32>,
}

impl ExitState {
    pub fn from_code(code: i32) -> Self {
        ExitState { code: Some(code) }
    }

    /// A child that ended without an exit code (killed by a signal).
    pub fn signalled() -> Self {
        ExitState { code: None }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }
}

impl From<ExitStatus> for ExitState {
    fn from(status: ExitStatus) -> Self {
        ExitState { code: status.code() }
    }
}

impl fmt::Display for ExitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {code}"),
            None => f.write_str("signal termination"),
        }
    }
}

pub trait ProcessRunner {
    /// Launch `invocation` and wait for it to finish.
    fn launch(&mut self, invocation: &Invocation) -> BuildResult<ExitState>;
}

/// Runs invocations as real child processes with inherited stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn launch(&mut self, invocation: &Invocation) -> BuildResult<ExitState> {
        let program = resolve_program(invocation.program())?;
        debug!("launching {}", program.display());
        let status = Command::new(&program)
            .args(invocation.get_args())
            .status()
            .map_err(|source| BuildError::Launch {
                program: invocation.program().display().to_string(),
                source,
            })?;
        Ok(status.into())
    }
}

/// Bare program names are looked up on `PATH`; anything with a directory
/// component is used as given.
pub fn resolve_program(program: &Path) -> BuildResult<PathBuf> {
    if program.components().count() > 1 {
        return Ok(program.to_path_buf());
    }
    which::which(program).map_err(|_| BuildError::ProgramNotFound {
        program: program.display().to_string(),
    })
}
