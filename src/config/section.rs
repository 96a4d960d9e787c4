//! Configuration section definitions.
//!
//! # Example
//!
//! ```toml
//! [derive]
//! source = "src/images"       # Authored originals (consumed on success)
//! dest = "public/images"      # Derived variant output
//! quality = 85                # WebP/JPEG quality (1-100)
//! max_width = 1920            # Per-tier width cap
//! max_height = 1080           # Per-tier height cap
//! generate_fallback = false   # Also emit JPEG/PNG fallbacks
//! clean_dest = true           # Clear dest (except videos) before deriving
//! keep_originals = false      # Leave sources in place after export
//!
//! [placeholder]
//! images = "public/images"    # Image tree to mirror
//! dist = "dist"               # Built site output
//! dest = "placeholder"        # Placeholder replica output
//! quality = 90
//! background = "#b0b0b0"
//! foreground = "#000000"
//! ```

use std::path::PathBuf;

use serde::Deserialize;

/// `[derive]` section: density-tier variant derivation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeriveConfig {
    /// Directory of authored originals.
    pub source: PathBuf,

    /// Output directory for derived variants.
    pub dest: PathBuf,

    /// Encoding quality for WebP and JPEG output (1-100).
    pub quality: u8,

    /// Maximum output width; every tier is capped to fit.
    pub max_width: u32,

    /// Maximum output height; every tier is capped to fit.
    pub max_height: u32,

    /// Emit a JPEG (or PNG, per filename token) alongside each WebP tier.
    pub generate_fallback: bool,

    /// Clear the destination tree (videos excepted) before deriving.
    pub clean_dest: bool,

    /// Leave source files in place after a successful export.
    pub keep_originals: bool,
}

impl Default for DeriveConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("src/images"),
            dest: PathBuf::from("public/images"),
            quality: 85,
            max_width: 1920,
            max_height: 1080,
            generate_fallback: false,
            clean_dest: true,
            keep_originals: false,
        }
    }
}

/// `[placeholder]` section: placeholder replica generation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaceholderConfig {
    /// Image tree whose dimensions the placeholders mirror.
    pub images: PathBuf,

    /// Built site output to copy around the placeholders.
    pub dist: PathBuf,

    /// Output directory for the placeholder replica.
    pub dest: PathBuf,

    /// WebP encoding quality (1-100).
    pub quality: u8,

    /// Canvas fill color.
    pub background: String,

    /// Label text color.
    pub foreground: String,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            images: PathBuf::from("public/images"),
            dist: PathBuf::from("dist"),
            dest: PathBuf::from("placeholder"),
            quality: 90,
            background: "#b0b0b0".to_string(),
            foreground: "#000000".to_string(),
        }
    }
}
