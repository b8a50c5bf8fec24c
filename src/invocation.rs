// CLASSIFICATION: COMMUNITY
// Filename: invocation.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::BuildConfig;

/// A program plus its argument list. Never passed through a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: PathBuf,
    args: Vec<OsString>,
}

impl Invocation {
    pub fn new<P: Into<PathBuf>>(program: P) -> Self {
        Invocation {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg<S: AsRef<OsStr>>(&mut self, arg: S) -> &mut Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for a in args {
            self.arg(a);
        }
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    /// Assemble the compiler command line for `files`.
    ///
    /// Order: compiler, `-MJ <fragment>` when a compilation database is
    /// requested, `-std=`, extra flags, `-g -o <binary path>`, `-l`, `-L`,
    /// `-I` groups, then the sources. `-o` names the same file the run step
    /// launches.
    pub fn compiler(config: &BuildConfig, files: &[PathBuf]) -> Self {
        let mut inv = Invocation::new(&config.compiler);
        if config.compile_commands {
            inv.arg("-MJ").arg(&config.fragment_path);
        }
        inv.arg(format!("-std={}", config.standard));
        inv.args(&config.flags);
        inv.arg("-g").arg("-o").arg(config.binary_path());
        for lib in &config.libraries {
            inv.arg("-l").arg(lib);
        }
        for dir in &config.link_dirs {
            inv.arg("-L").arg(dir);
        }
        for dir in &config.include_dirs {
            inv.arg("-I").arg(dir);
        }
        inv.args(files);
        inv
    }

    /// The produced executable, launched without arguments.
    pub fn binary(config: &BuildConfig) -> Self {
        Invocation::new(config.binary_path())
    }
}

fn quote(arg: &OsStr) -> Cow<'_, str> {
    let text = arg.to_string_lossy();
    if !text.is_empty() && !text.chars().any(|c| c.is_whitespace() || c == '"') {
        return text;
    }
    Cow::Owned(format!("\"{}\"", text.replace('"', "\\\"")))
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(self.program.as_os_str()))?;
        for a in &self.args {
            write!(f, " {}", quote(a))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(inv: &Invocation) -> Vec<String> {
        inv.get_args()
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn minimal_command_groups_std_output_and_files() {
        let cfg = BuildConfig {
            include_dirs: Vec::new(),
            ..BuildConfig::default()
        };
        let files = vec![PathBuf::from("a.c"), PathBuf::from("b.c")];
        let inv = Invocation::compiler(&cfg, &files);
        assert_eq!(inv.program(), Path::new("clang"));
        let out = cfg.binary_path().to_string_lossy().into_owned();
        assert_eq!(strings(&inv), vec!["-std=c11", "-g", "-o", out.as_str(), "a.c", "b.c"]);
    }

    #[test]
    fn full_command_order() {
        let cfg = BuildConfig {
            compiler: "cc".into(),
            output: "app".into(),
            standard: "c99".into(),
            flags: vec!["-Wall".into(), "-O2".into()],
            libraries: vec!["m".into()],
            link_dirs: vec![PathBuf::from("lib")],
            include_dirs: vec![PathBuf::from("inc")],
            compile_commands: true,
            ..BuildConfig::default()
        };
        let inv = Invocation::compiler(&cfg, &[PathBuf::from("main.c")]);
        let out = cfg.binary_path().to_string_lossy().into_owned();
        assert_eq!(
            strings(&inv),
            vec![
                "-MJ",
                "compile_commands.json",
                "-std=c99",
                "-Wall",
                "-O2",
                "-g",
                "-o",
                out.as_str(),
                "-l",
                "m",
                "-L",
                "lib",
                "-I",
                "inc",
                "main.c",
            ]
        );
    }

    #[test]
    fn output_flag_names_the_run_target() {
        let cfg = BuildConfig {
            build_dir: PathBuf::from("out"),
            ..BuildConfig::default()
        };
        let inv = Invocation::compiler(&cfg, &[PathBuf::from("main.c")]);
        let args = inv.get_args();
        let pos = args.iter().position(|a| a == "-o").unwrap();
        let run = Invocation::binary(&cfg);
        assert_eq!(Path::new(&args[pos + 1]), run.program());
        assert_eq!(run.program(), Path::new("out").join(cfg.output_file()));
    }

    #[test]
    fn display_quotes_whitespace() {
        let mut inv = Invocation::new("clang");
        inv.arg("my dir/a.c").arg("-g");
        assert_eq!(inv.to_string(), "clang \"my dir/a.c\" -g");
    }
}
