use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of BOM exports picked up when no files are named
pub const BOM_EXTENSION: &str = "txt";

/// Lists the BOM exports in `dir`: regular `*.txt` files other than the
/// ignore file, sorted by path.
///
/// # Errors
/// Returns an error if `dir` cannot be listed
pub fn discover_bom_files(dir: &Path, ignore_file: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .map_err(|e| anyhow::anyhow!("Failed to list directory {}: {}", dir.display(), e))?;

    let ignore_name = ignore_file.file_name();
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|e| anyhow::anyhow!("Failed to list directory {}: {}", dir.display(), e))?;
        let path = entry.path();

        let is_bom_export = path.extension().is_some_and(|ext| ext == BOM_EXTENSION);
        // file_type() does not follow symlinks, so links are skipped here
        let is_regular = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if !is_bom_export || !is_regular {
            continue;
        }
        if ignore_name.is_some() && path.file_name() == ignore_name {
            continue;
        }
        files.push(path);
    }

    files.sort();
    Ok(files)
}
