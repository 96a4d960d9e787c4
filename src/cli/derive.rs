//! `derive` subcommand driver.

use anyhow::Result;

use crate::asset::{AssetKind, scan_assets};
use crate::config::PipelineConfig;
use crate::log;
use crate::logger::ProgressLine;
use crate::report::BatchReport;
use crate::variant::{clean_dest_except_videos, export_raster, export_vector};

/// Run the variant derivation pipeline.
///
/// Scans the source tree for raster and vector assets, derives every tier
/// into the destination, and exits non-zero if any file failed. Failures
/// are isolated: one broken image never stops the batch.
pub fn run(config: &PipelineConfig) -> Result<()> {
    let cfg = &config.derive;

    if !cfg.source.exists() {
        log!("derive"; "source directory {} does not exist, nothing to do", cfg.source.display());
        return Ok(());
    }

    if cfg.clean_dest {
        clean_dest_except_videos(&cfg.dest)?;
    }

    let rasters = scan_assets(&cfg.source, AssetKind::Raster);
    let vectors = scan_assets(&cfg.source, AssetKind::Vector);
    log!("derive"; "found {} raster and {} vector file(s)", rasters.len(), vectors.len());

    let progress = ProgressLine::new("derive", &[("raster", rasters.len()), ("svg", vectors.len())]);
    let mut report = BatchReport::new();

    for asset in &rasters {
        match export_raster(asset, &cfg.dest, cfg) {
            Ok(()) => report.ok(),
            Err(err) => report.fail(err),
        }
        progress.inc("raster");
    }

    for asset in &vectors {
        match export_vector(asset, &cfg.dest) {
            Ok(()) => report.ok(),
            Err(err) => report.fail(err),
        }
        progress.inc("svg");
    }

    progress.finish();
    log!("derive"; "derived {} file(s) into {}", report.processed(), cfg.dest.display());

    report.into_result()
}
