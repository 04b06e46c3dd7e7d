//! File enumeration: the list of log files the pool will be fed with.
//! Traversal policy (symlinks, nesting) lives here, not in the core.

use anyhow::{Context, Result, bail};
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::engine::tools::should_include_file;
use crate::types::Opts;

/// Recursively list regular files under `root`, filtered by the exclude
/// patterns and sorted for a deterministic submission order. A missing or
/// non-directory `root` is a configuration error raised before any
/// processing starts.
pub fn list_log_files(root: &Path, opts: &Opts) -> Result<Vec<PathBuf>> {
    let root = root
        .canonicalize()
        .with_context(|| format!("input folder {}", root.display()))?;
    if !root.is_dir() {
        bail!("input path {} is not a directory", root.display());
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(&root) {
        let entry = entry.with_context(|| format!("walk {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if should_include_file(&path, &opts.exclude) {
            paths.push(path);
        }
    }
    paths.sort();
    debug!("enumerated {} log files under {}", paths.len(), root.display());
    Ok(paths)
}
