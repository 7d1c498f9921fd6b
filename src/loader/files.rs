//! Selection of data files inside a dictionary directory.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;

/// Whether a file name denotes a data file: it must start with `prefix` and
/// must not be hidden (`.`) or an editor backup (`~`, `#`).
pub fn is_data_file(name: &str, prefix: &str) -> bool {
    if name.starts_with('.') || name.ends_with('~') || name.ends_with('#') {
        return false;
    }
    name.starts_with(prefix)
}

/// Recursively collect the data files under `root`, sorted by path so that
/// loading the same directory twice visits files in the same order.
pub fn collect_data_files(root: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    visit(root, prefix, &mut files)?;
    files.sort();
    Ok(files)
}

fn visit(dir: &Path, prefix: &str, files: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries = fs::read_dir(dir)?.collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            visit(&path, prefix, files)?;
            continue;
        }
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if is_data_file(&name, prefix) {
            files.push(path);
        } else {
            debug!("skipping {}", path.display());
        }
    }
    Ok(())
}
