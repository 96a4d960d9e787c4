//! Asset kind definitions.

use std::path::Path;

/// Raster formats the deriver consumes.
pub const RASTER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "tiff", "bmp", "webp"];

/// Vector formats (optimized and copied, never tiered).
pub const VECTOR_EXTENSIONS: &[&str] = &["svg"];

/// Video formats (preserved during destination cleaning, otherwise untouched).
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv"];

/// Kind of source asset, detected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Bitmap image - derived into density tiers.
    Raster,
    /// SVG - optimized and copied 1:1.
    Vector,
    /// Video - out of scope for derivation, preserved on clean.
    Video,
}

impl AssetKind {
    /// Detect the asset kind from a path's extension.
    ///
    /// Returns `None` for anything the pipelines don't recognize.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        if RASTER_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Raster)
        } else if VECTOR_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Vector)
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Video)
        } else {
            None
        }
    }
}
