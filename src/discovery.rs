use anyhow::{Result, bail};
use ignore::WalkBuilder;
use std::path::PathBuf;

use crate::fs::has_config_extension;

/// Expand the file and directory arguments into the list of configuration
/// files to check. Directories are walked recursively, honoring `.gitignore`
/// and skipping hidden entries. A path that does not exist is an error.
pub fn discover_config_file_paths(args: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = Vec::new();

    for arg in args {
        let path = PathBuf::from(arg);
        if !path.exists() {
            bail!("File not found: {arg}");
        }
        // Files passed explicitly are kept even without a known extension,
        // so that `--filetype` can be applied to them.
        if path.is_file() {
            paths.push(path);
            continue;
        }
        for entry in WalkBuilder::new(&path).build() {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_some_and(|ft| ft.is_file())
                        && has_config_extension(entry.path())
                    {
                        paths.push(entry.into_path());
                    }
                }
                Err(err) => tracing::warn!("Failed to walk directory entry: {err}"),
            }
        }
    }

    paths.sort();
    paths.dedup();

    tracing::debug!("Discovered {} configuration file(s)", paths.len());

    Ok(paths)
}
