//! Discovery of package manifests under a workspace root.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::core::errors::{DevtoolsError, Result};

/// Recursively collect every file named `manifest_name` under `root`.
///
/// Hidden directories and the configured skip list (`node_modules`, `.git`
/// by default) are pruned from the walk. Results are sorted for stable
/// processing order.
pub fn find_package_manifests(
    root: &Path,
    manifest_name: &str,
    skip_dirs: &[String],
) -> Result<Vec<PathBuf>> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            !name.starts_with('.') && !skip_dirs.iter().any(|skip| name == skip.as_str())
        });

    let mut manifests = Vec::new();
    for entry in walker {
        let entry =
            entry.map_err(|e| DevtoolsError::io("Failed to walk workspace tree", e.into()))?;
        if entry.file_type().is_file() && entry.file_name() == OsStr::new(manifest_name) {
            debug!("discovered package manifest: {}", entry.path().display());
            manifests.push(entry.into_path());
        }
    }

    manifests.sort();
    Ok(manifests)
}
