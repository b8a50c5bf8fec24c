// CLASSIFICATION: COMMUNITY
// Filename: compile_db.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Compilation database post-processing.
//!
//! `clang -MJ` appends one JSON object per translation unit, each followed
//! by a comma. The fragment becomes a database by dropping the last
//! character and wrapping the rest in brackets.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{debug, info, warn};
use serde_json::Value;

use crate::error::{BuildError, BuildResult};

/// Delete a fragment left over from an earlier run. Absent is fine.
pub fn clear_fragment(fragment: &Path) -> BuildResult<()> {
    match fs::remove_file(fragment) {
        Ok(()) => {
            debug!("removed stale fragment {}", fragment.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(source) => Err(BuildError::Fragment {
            path: fragment.to_path_buf(),
            source,
        }),
    }
}

/// Wrap the fragment's trimmed text, minus its final character, in a JSON
/// array.
pub fn wrap_fragment(raw: &str) -> String {
    let mut chars = raw.trim().chars();
    chars.next_back();
    format!("[\n{}\n]", chars.as_str())
}

/// Read `fragment` and write the database to `database`.
///
/// Contents are not validated beyond the trim; output that does not parse
/// is logged and written anyway.
pub fn rewrite(fragment: &Path, database: &Path) -> BuildResult<()> {
    let raw = fs::read_to_string(fragment).map_err(|source| BuildError::Fragment {
        path: fragment.to_path_buf(),
        source,
    })?;
    let document = wrap_fragment(&raw);
    match serde_json::from_str::<Value>(&document) {
        Ok(Value::Array(entries)) => info!(
            "compilation database {} has {} entries",
            database.display(),
            entries.len()
        ),
        Ok(_) => warn!("compilation database {} is not an array", database.display()),
        Err(err) => warn!(
            "compilation database {} is not valid JSON: {err}",
            database.display()
        ),
    }
    fs::write(database, document).map_err(|source| BuildError::Database {
        path: database.to_path_buf(),
        source,
    })
}
