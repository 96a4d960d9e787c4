//! Placeholder Generator: low-fidelity stand-ins for the built image tree.
//!
//! Three passes produce a drop-in replica of the build output with raster
//! photography swapped for lightweight placeholders:
//!
//! 1. [`copy_dist_files`] - copy the built output, excluding `images/`
//! 2. [`generate_placeholders`] - one labeled canvas per raster image
//! 3. [`copy_svg_files`] - vectors from `dist/images` copied verbatim
//!
//! Each pass isolates per-file failures and reports them all at the end.

pub mod canvas;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::asset::{AssetKind, scan_assets};
use crate::codec::raster;
use crate::config::PlaceholderConfig;
use crate::report::{AssetError, BatchReport};
use crate::{debug, log};

use canvas::{PlaceholderStyle, render_placeholder};

/// Dimensions assumed when an image cannot be probed.
const DEFAULT_DIMENSIONS: (u32, u32) = (800, 600);

/// Copy the built output tree into the placeholder tree, skipping the
/// top-level `images/` segment (placeholders replace it).
pub fn copy_dist_files(dist: &Path, dest: &Path) -> BatchReport {
    let mut report = BatchReport::new();

    let mut files = Vec::new();
    collect_files(&mut files, dist, dist, Some(Path::new("images")));
    files.sort();

    for rel in files {
        let src_file = dist.join(&rel);
        let dest_file = dest.join(&rel);
        match copy_file(&src_file, &dest_file) {
            Ok(()) => {
                debug!("placeholder"; "copied {}", rel.display());
                report.ok();
            }
            Err(err) => report.fail(AssetError::copy(src_file, err)),
        }
    }

    report
}

/// Generate one placeholder per raster image under `images`, mirrored into
/// `dest_images` with the extension changed to `.webp`.
///
/// Dimension probe failures fall back to 800x600 rather than failing the
/// file; only render/encode failures are recorded.
pub fn generate_placeholders(
    images: &Path,
    dest_images: &Path,
    cfg: &PlaceholderConfig,
    fontdb: &Arc<usvg::fontdb::Database>,
) -> BatchReport {
    let mut report = BatchReport::new();
    let style = PlaceholderStyle {
        background: cfg.background.clone(),
        foreground: cfg.foreground.clone(),
    };

    let assets = scan_assets(images, AssetKind::Raster);
    log!("placeholder"; "found {} image(s) to process", assets.len());

    for asset in &assets {
        let (width, height) = match raster::probe_dimensions(&asset.source) {
            Ok(dims) => dims,
            Err(err) => {
                debug!("placeholder"; "probe failed for {}, using {}x{}: {err}",
                    asset.rel.display(), DEFAULT_DIMENSIONS.0, DEFAULT_DIMENSIONS.1);
                DEFAULT_DIMENSIONS
            }
        };

        let out_file = dest_images.join(asset.rel.with_extension("webp"));
        match write_placeholder(width, height, &style, cfg.quality, &out_file, fontdb) {
            Ok(()) => {
                debug!("placeholder"; "generated {}", out_file.display());
                report.ok();
            }
            Err(err) => report.fail(AssetError::encode(asset.source.clone(), err)),
        }
    }

    report
}

/// Copy vector files from the built output's `images/` subtree verbatim.
///
/// A missing `dist/images` directory is a warning, not a failure.
pub fn copy_svg_files(dist_images: &Path, dest_images: &Path) -> BatchReport {
    let mut report = BatchReport::new();

    if !dist_images.exists() {
        log!("placeholder"; "{} does not exist, skipping svg copy", dist_images.display());
        return report;
    }

    let vectors = scan_assets(dist_images, AssetKind::Vector);
    log!("placeholder"; "found {} svg file(s) to copy", vectors.len());

    for asset in &vectors {
        let dest_file = dest_images.join(&asset.rel);
        match copy_file(&asset.source, &dest_file) {
            Ok(()) => {
                debug!("placeholder"; "copied svg {}", asset.rel.display());
                report.ok();
            }
            Err(err) => report.fail(AssetError::copy(asset.source.clone(), err)),
        }
    }

    report
}

/// Render and encode a single placeholder canvas.
fn write_placeholder(
    width: u32,
    height: u32,
    style: &PlaceholderStyle,
    quality: u8,
    out_file: &Path,
    fontdb: &Arc<usvg::fontdb::Database>,
) -> anyhow::Result<()> {
    let img = render_placeholder(width, height, style, fontdb)?;
    if let Some(parent) = out_file.parent() {
        fs::create_dir_all(parent)?;
    }
    raster::write_webp(&img.into(), out_file, quality)
}

/// Copy a single file, creating parent directories.
fn copy_file(src: &Path, dest: &Path) -> std::io::Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(src, dest)?;
    Ok(())
}

/// Recursively collect relative file paths, skipping hidden entries and an
/// optional top-level directory.
fn collect_files(results: &mut Vec<PathBuf>, dir: &Path, root: &Path, skip_top: Option<&Path>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let name = entry.file_name();
        if name.to_str().is_some_and(|n| n.starts_with('.')) {
            continue;
        }

        let rel = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
        if path.is_dir() {
            if dir == root && skip_top == Some(rel.as_path()) {
                continue;
            }
            collect_files(results, &path, root, skip_top);
        } else {
            results.push(rel);
        }
    }
}
