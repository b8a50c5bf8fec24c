// CLASSIFICATION: COMMUNITY
// Filename: logging.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

use chrono::Utc;
use std::fs::{create_dir_all, OpenOptions};
use std::io::Write;
use std::path::Path;

fn append(path: &Path, line: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }
    let mut f = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(f, "{} {}", Utc::now().to_rfc3339(), line)?;
    f.flush()?;
    Ok(())
}

pub fn format_record(level: &str, program: &Path, output: &str, files: usize, msg: &str) -> String {
    format!(
        "level={level} program={} output={output} files={files} msg={msg}",
        program.display()
    )
}

/// Append one record to the build log. No-op without a log file; write
/// failures are dropped.
pub fn record(log_file: Option<&Path>, level: &str, program: &Path, output: &str, files: usize, msg: &str) {
    if let Some(path) = log_file {
        let _ = append(path, &format_record(level, program, output, files, msg));
    }
}

#[macro_export]
macro_rules! build_info {
    ($log:expr, $program:expr, $output:expr, $files:expr, $msg:expr $(,)?) => {
        $crate::logging::record($log, "INFO", $program, $output, $files, $msg);
    };
}

#[macro_export]
macro_rules! build_error {
    ($log:expr, $program:expr, $output:expr, $files:expr, $msg:expr $(,)?) => {
        $crate::logging::record($log, "ERROR", $program, $output, $files, $msg);
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn records_append_with_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("logs/cbuild.log");
        record(Some(&log), "INFO", Path::new("clang"), "app", 2, "compile");
        record(Some(&log), "ERROR", Path::new("clang"), "app", 2, "exit code 1");
        let text = fs::read_to_string(&log).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("level=INFO program=clang output=app files=2 msg=compile"));
        assert!(lines[1].contains("level=ERROR"));
    }

    #[test]
    fn no_log_file_is_noop() {
        record(None, "INFO", Path::new("clang"), "app", 0, "compile");
    }
}
