//! Discovery of translation files under the configured root.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use glob::Pattern;
use walkdir::WalkDir;

/// Find `*.ts` files under `root`, skipping paths matched by `ignores`.
///
/// Results are sorted so reports and parallel runs stay deterministic.
pub fn find_ts_files(root: &Path, ignores: &[Pattern]) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        bail!(
            "Translations directory '{}' does not exist.\n\
             Hint: Check your {} 'translationsRoot' setting.",
            root.display(),
            crate::config::CONFIG_FILE_NAME
        );
    }

    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("ts") {
            continue;
        }
        if is_ignored(path, ignores) {
            continue;
        }
        files.push(path.to_path_buf());
    }
    files.sort();
    Ok(files)
}

fn is_ignored(path: &Path, ignores: &[Pattern]) -> bool {
    let normalized = path.to_string_lossy().replace('\\', "/");
    ignores.iter().any(|p| p.matches(&normalized))
}
