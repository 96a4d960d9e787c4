//! Asset scanning functions (pure, no side effects).

use std::path::{Path, PathBuf};

use super::AssetKind;

/// A file found under a scan root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceAsset {
    /// Absolute path of the source file.
    pub source: PathBuf,
    /// Path relative to the scan root (used to mirror the tree).
    pub rel: PathBuf,
    /// Detected kind.
    pub kind: AssetKind,
}

impl SourceAsset {
    /// File stem of the source (empty string if the path has none).
    pub fn stem(&self) -> &str {
        self.source
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }

    /// Relative directory the asset lives in.
    pub fn rel_dir(&self) -> &Path {
        self.rel.parent().unwrap_or(Path::new(""))
    }
}

/// Scan a directory tree for assets of the given kind.
///
/// Results are sorted by relative path so batch runs are deterministic.
/// Hidden entries (dot-prefixed files and directories) are skipped.
///
/// # Pure Function
///
/// This function only reads the filesystem and returns data
/// It does not modify any state
pub fn scan_assets(root: &Path, kind: AssetKind) -> Vec<SourceAsset> {
    let mut results = Vec::new();
    if root.exists() {
        scan_recursive(&mut results, root, root, kind);
    }
    results.sort_by(|a, b| a.rel.cmp(&b.rel));
    results
}

/// Recursive helper for scanning assets
fn scan_recursive(results: &mut Vec<SourceAsset>, dir: &Path, root: &Path, kind: AssetKind) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if is_hidden(&path) {
            continue;
        }

        if path.is_dir() {
            scan_recursive(results, &path, root, kind);
        } else if AssetKind::from_path(&path) == Some(kind) {
            let rel = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
            results.push(SourceAsset {
                source: path,
                rel,
                kind,
            });
        }
    }
}

/// Check whether a path's file name starts with a dot.
fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}
