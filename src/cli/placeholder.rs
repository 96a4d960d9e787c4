//! `placeholder` subcommand driver.

use std::fs;

use anyhow::{Context, Result};

use crate::codec::svg::load_fonts;
use crate::config::PipelineConfig;
use crate::log;
use crate::placeholder::{copy_dist_files, copy_svg_files, generate_placeholders};

/// Run the placeholder generation pipeline.
///
/// Rebuilds the replica from scratch: empties the destination, copies the
/// built output (minus `images/`), writes one placeholder per raster image
/// and copies vectors verbatim. Exits non-zero if any file failed.
pub fn run(config: &PipelineConfig) -> Result<()> {
    let cfg = &config.placeholder;

    if cfg.dest.exists() {
        fs::remove_dir_all(&cfg.dest)
            .with_context(|| format!("failed to clear {}", cfg.dest.display()))?;
    }
    fs::create_dir_all(&cfg.dest)
        .with_context(|| format!("failed to create {}", cfg.dest.display()))?;

    let fontdb = load_fonts();
    let dest_images = cfg.dest.join("images");

    let mut report = copy_dist_files(&cfg.dist, &cfg.dest);
    report.merge(generate_placeholders(&cfg.images, &dest_images, cfg, &fontdb));
    report.merge(copy_svg_files(&cfg.dist.join("images"), &dest_images));

    log!("placeholder"; "wrote {} file(s) into {}", report.processed(), cfg.dest.display());

    report.into_result()
}
