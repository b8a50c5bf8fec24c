// CLASSIFICATION: COMMUNITY
// Filename: config.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Build configuration.
//!
//! Defaults reproduce the fixed layout the driver was written for: sources
//! under `../src`, headers in `../src` and `../include`, the binary in
//! `../build`. A `cbuild.toml` in the working directory (or the file named
//! by `CBUILD_CONFIG`) overrides them, and a handful of environment
//! variables override the file.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Deserializer};

use crate::error::{BuildError, BuildResult};

pub const DEFAULT_CONFIG_FILE: &str = "cbuild.toml";
pub const CONFIG_ENV: &str = "CBUILD_CONFIG";
pub const COMPILER_ENV: &str = "CBUILD_COMPILER";
pub const OUTPUT_ENV: &str = "CBUILD_OUTPUT";
pub const LOG_FILE_ENV: &str = "CBUILD_LOG_FILE";
pub const COMPILE_COMMANDS_ENV: &str = "CBUILD_COMPILE_COMMANDS";

/// Everything the pipeline needs to discover, compile and run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    pub compiler: String,
    /// Executable name without the platform suffix.
    pub output: String,
    pub standard: String,
    pub source_dir: PathBuf,
    pub extension: String,
    #[serde(deserialize_with = "one_or_many")]
    pub exclude: Vec<String>,
    pub flags: Vec<String>,
    pub libraries: Vec<String>,
    pub link_dirs: Vec<PathBuf>,
    pub include_dirs: Vec<PathBuf>,
    pub compile_commands: bool,
    /// Written by the compiler (`-MJ`).
    pub fragment_path: PathBuf,
    /// The rewritten, valid JSON database.
    pub database_path: PathBuf,
    pub build_dir: PathBuf,
    pub log_file: Option<PathBuf>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            compiler: "clang".into(),
            output: "OURBINARY".into(),
            standard: "c11".into(),
            source_dir: PathBuf::from("../src"),
            extension: "c".into(),
            exclude: vec!["test.c".into()],
            flags: Vec::new(),
            libraries: Vec::new(),
            link_dirs: Vec::new(),
            include_dirs: vec![PathBuf::from("../src"), PathBuf::from("../include")],
            compile_commands: false,
            fragment_path: PathBuf::from("compile_commands.json"),
            database_path: PathBuf::from("../compile_commands.json"),
            build_dir: PathBuf::from("../build"),
            log_file: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    Ok(match OneOrMany::deserialize(d)? {
        OneOrMany::One(s) => vec![s],
        OneOrMany::Many(v) => v,
    })
}

impl BuildConfig {
    /// Resolve defaults, then the config file, then the environment.
    pub fn load() -> BuildResult<Self> {
        let mut cfg = match env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::from_file(path)?
                } else {
                    Self::default()
                }
            }
        };
        cfg.apply_overrides(|key| env::var(key).ok())?;
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> BuildResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| BuildError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        toml::from_str(&text).map_err(|source| BuildError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `CBUILD_*` overrides looked up through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> BuildResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let set = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(v) = set(COMPILER_ENV) {
            self.compiler = v.trim().to_string();
        }
        if let Some(v) = set(OUTPUT_ENV) {
            self.output = v.trim().to_string();
        }
        if let Some(v) = set(LOG_FILE_ENV) {
            self.log_file = Some(PathBuf::from(v.trim()));
        }
        if let Some(v) = set(COMPILE_COMMANDS_ENV) {
            self.compile_commands = parse_switch(COMPILE_COMMANDS_ENV, &v)?;
        }
        Ok(())
    }

    /// File name the compiler writes, with the platform executable suffix.
    pub fn output_file(&self) -> String {
        format!("{}{}", self.output, env::consts::EXE_SUFFIX)
    }

    /// Where the run step expects the executable.
    pub fn binary_path(&self) -> PathBuf {
        let dir = if self.build_dir.as_os_str().is_empty() {
            Path::new(".")
        } else {
            self.build_dir.as_path()
        };
        dir.join(self.output_file())
    }
}

fn parse_switch(key: &'static str, value: &str) -> BuildResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(BuildError::Env {
            key,
            value: value.to_string(),
        }),
    }
}
