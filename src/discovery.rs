// CLASSIFICATION: COMMUNITY
// Filename: discovery.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Recursive source discovery.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Find every regular file under `root` whose extension is `extension`,
/// dropping any whose path contains one of the `exclude` substrings.
///
/// `exclude` takes anything iterable over strings, so a single pattern can be
/// passed as `Some("test.c")` and no pattern as `None::<&str>`. Hidden entries
/// below `root` are not visited. Results are in walk order with each
/// directory's entries sorted by name.
pub fn find_files<I, S>(root: impl AsRef<Path>, extension: &str, exclude: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let root = root.as_ref();
    let exclude: Vec<S> = exclude.into_iter().collect();
    let extension = extension.trim_start_matches('.');
    let files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                warn!("skipping unreadable entry under {}: {err}", root.display());
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension() == Some(OsStr::new(extension)))
        .map(DirEntry::into_path)
        .filter(|p| !is_excluded(p, &exclude))
        .collect();
    debug!(
        "found {} .{} file(s) under {}",
        files.len(),
        extension,
        root.display()
    );
    files
}

/// True when any pattern occurs anywhere in the path text.
pub fn is_excluded<S: AsRef<str>>(path: &Path, exclude: &[S]) -> bool {
    let text = path.to_string_lossy();
    exclude.iter().any(|p| text.contains(p.as_ref()))
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}
