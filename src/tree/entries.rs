//! Directory listing helpers

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::TreeError;

/// An immediate child of a listed directory.
#[derive(Debug)]
pub struct Entry {
    pub name: OsString,
    pub path: PathBuf,
}

impl Entry {
    /// Name for display; non-UTF-8 bytes are replaced.
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }

    /// Follows symlinks; anything that cannot be stat'ed counts as a file.
    pub fn is_dir(&self) -> bool {
        self.path.is_dir()
    }
}

/// List the immediate entries of `dir`, sorted by name.
pub fn read_sorted_entries(dir: &Path) -> Result<Vec<Entry>, TreeError> {
    let read_dir = fs::read_dir(dir).map_err(|e| TreeError::access(dir, e))?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| TreeError::access(dir, e))?;
        let name = entry.file_name();
        entries.push(Entry {
            path: dir.join(&name),
            name,
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(entries)
}
