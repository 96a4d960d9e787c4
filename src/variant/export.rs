//! Variant export (side effects: encoding, writing, source removal).

use std::fs;
use std::path::Path;

use crate::asset::{AssetKind, SourceAsset, parse_variant_name};
use crate::codec::raster;
use crate::codec::svg::{OptimizeOptions, optimize_svg};
use crate::config::DeriveConfig;
use crate::debug;
use crate::report::AssetError;

use super::plan::plan_exports;

/// Derive every density tier for one raster source.
///
/// Writes all planned `.webp` tiers (plus fallbacks when enabled) under the
/// mirrored destination path, then removes the original. The removal happens
/// strictly after every derivative has been written: a failure anywhere
/// returns early and leaves the source untouched.
pub fn export_raster(
    asset: &SourceAsset,
    dest_root: &Path,
    cfg: &DeriveConfig,
) -> Result<(), AssetError> {
    use image::GenericImageView;

    let img = raster::decode(&asset.source)
        .map_err(|e| AssetError::probe(asset.source.clone(), e))?;
    let (width, height) = img.dimensions();

    let name = parse_variant_name(asset.stem());
    let plan = plan_exports(&name, width, height, cfg.max_width, cfg.max_height);

    let dest_dir = dest_root.join(asset.rel_dir());
    fs::create_dir_all(&dest_dir).map_err(|e| AssetError::encode(dest_dir.clone(), e))?;

    for tier in &plan.tiers {
        let resized = raster::resize_to(&img, tier.width, tier.height);

        let webp_path = dest_dir.join(format!("{}{}.webp", name.base, tier.tier.suffix()));
        raster::write_webp(&resized, &webp_path, cfg.quality)
            .map_err(|e| AssetError::encode(webp_path.clone(), e))?;
        debug!("derive"; "exported {} ({}x{})", webp_path.display(), tier.width, tier.height);

        if cfg.generate_fallback {
            let fallback_path = dest_dir.join(format!(
                "{}{}.{}",
                name.base,
                tier.tier.suffix(),
                name.fallback.extension()
            ));
            raster::write_fallback(&resized, &fallback_path, name.fallback, cfg.quality)
                .map_err(|e| AssetError::encode(fallback_path.clone(), e))?;
            debug!("derive"; "exported {}", fallback_path.display());
        }
    }

    if !cfg.keep_originals {
        fs::remove_file(&asset.source)
            .map_err(|e| AssetError::copy(asset.source.clone(), e))?;
        debug!("derive"; "removed original {}", asset.source.display());
    }

    Ok(())
}

/// Optimize one SVG source and write it to the mirrored destination path.
///
/// Vectors bypass density tiers entirely: one optimized copy, no removal.
pub fn export_vector(asset: &SourceAsset, dest_root: &Path) -> Result<(), AssetError> {
    let content =
        fs::read(&asset.source).map_err(|e| AssetError::copy(asset.source.clone(), e))?;
    let optimized = optimize_svg(&content, &OptimizeOptions::default())
        .map_err(|e| AssetError::encode(asset.source.clone(), e))?;

    let dest = dest_root.join(&asset.rel);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| AssetError::copy(parent.to_path_buf(), e))?;
    }
    fs::write(&dest, optimized).map_err(|e| AssetError::copy(dest.clone(), e))?;
    debug!("derive"; "optimized svg {}", dest.display());

    Ok(())
}

/// Remove everything in the destination tree except video files.
///
/// Emptied directories are removed as well. A missing destination is fine.
pub fn clean_dest_except_videos(dir: &Path) -> std::io::Result<()> {
    if !dir.exists() {
        return Ok(());
    }

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            clean_dest_except_videos(&path)?;
            if fs::read_dir(&path)?.next().is_none() {
                fs::remove_dir(&path)?;
                debug!("derive"; "removed empty directory {}", path.display());
            }
        } else if AssetKind::from_path(&path) == Some(AssetKind::Video) {
            debug!("derive"; "preserved video {}", path.display());
        } else {
            fs::remove_file(&path)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::scan_assets;
    use image::{GenericImageView, ImageFormat, Rgba, RgbaImage};
    use tempfile::TempDir;

    fn write_png(path: &Path, width: u32, height: u32) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        RgbaImage::from_pixel(width, height, Rgba([64, 128, 32, 255]))
            .save_with_format(path, ImageFormat::Png)
            .unwrap();
    }

    fn test_config() -> DeriveConfig {
        DeriveConfig::default()
    }

    fn raster_asset(root: &Path, rel: &str) -> SourceAsset {
        let assets = scan_assets(root, AssetKind::Raster);
        assets
            .into_iter()
            .find(|a| a.rel == Path::new(rel))
            .expect("asset not found")
    }

    #[test]
    fn test_export_plain_raster_three_tiers() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        write_png(&src.join("logo.png"), 900, 600);

        let asset = raster_asset(&src, "logo.png");
        export_raster(&asset, &dest, &test_config()).unwrap();

        for (suffix, w, h) in [("@1x", 300, 200), ("@2x", 600, 400), ("@3x", 900, 600)] {
            let path = dest.join(format!("logo{suffix}.webp"));
            let img = image::open(&path).unwrap();
            assert_eq!(img.dimensions(), (w, h), "wrong size for {suffix}");
        }
        // Original removed only after all tiers were written
        assert!(!src.join("logo.png").exists());
    }

    #[test]
    fn test_export_hd_raster_two_tiers() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        write_png(&src.join("hero-HD.png"), 1200, 900);

        let asset = raster_asset(&src, "hero-HD.png");
        export_raster(&asset, &dest, &test_config()).unwrap();

        assert_eq!(
            image::open(dest.join("hero@1x.webp")).unwrap().dimensions(),
            (800, 600)
        );
        assert_eq!(
            image::open(dest.join("hero@2x.webp")).unwrap().dimensions(),
            (1200, 900)
        );
        assert!(!dest.join("hero@3x.webp").exists());
    }

    #[test]
    fn test_export_mirrors_subdirectories() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        write_png(&src.join("gallery/2024/trip.png"), 90, 90);

        let asset = raster_asset(&src, "gallery/2024/trip.png");
        export_raster(&asset, &dest, &test_config()).unwrap();

        assert!(dest.join("gallery/2024/trip@1x.webp").exists());
        assert!(dest.join("gallery/2024/trip@3x.webp").exists());
    }

    #[test]
    fn test_fpng_fallback_uses_png() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        write_png(&src.join("icon-FPNG.png"), 200, 200);

        let mut cfg = test_config();
        cfg.generate_fallback = true;

        let asset = raster_asset(&src, "icon-FPNG.png");
        export_raster(&asset, &dest, &cfg).unwrap();

        assert!(dest.join("icon@3x.webp").exists());
        assert!(dest.join("icon@3x.png").exists());
        assert!(!dest.join("icon@3x.jpg").exists());
    }

    #[test]
    fn test_jpeg_fallback_by_default() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        write_png(&src.join("photo.png"), 60, 60);

        let mut cfg = test_config();
        cfg.generate_fallback = true;

        let asset = raster_asset(&src, "photo.png");
        export_raster(&asset, &dest, &cfg).unwrap();

        assert!(dest.join("photo@1x.jpg").exists());
        assert!(dest.join("photo@2x.jpg").exists());
        assert!(dest.join("photo@3x.jpg").exists());
        assert!(!dest.join("photo@3x.png").exists());
    }

    #[test]
    fn test_keep_originals() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        write_png(&src.join("kept.png"), 30, 30);

        let mut cfg = test_config();
        cfg.keep_originals = true;

        let asset = raster_asset(&src, "kept.png");
        export_raster(&asset, &dest, &cfg).unwrap();

        assert!(src.join("kept.png").exists());
        assert!(dest.join("kept@3x.webp").exists());
    }

    #[test]
    fn test_decode_failure_preserves_original() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("broken.png"), b"definitely not a png").unwrap();

        let asset = raster_asset(&src, "broken.png");
        let err = export_raster(&asset, &dest, &test_config()).unwrap_err();

        assert!(matches!(err, AssetError::Probe(..)));
        // The original must survive a failed derivation
        assert!(src.join("broken.png").exists());
    }

    #[test]
    fn test_export_vector_optimizes_copy() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        fs::create_dir_all(src.join("icons")).unwrap();
        fs::write(
            src.join("icons/mark.svg"),
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"10\" height=\"10\">\n  <rect width=\"10\" height=\"10\" fill=\"#000\"/>\n</svg>",
        )
        .unwrap();

        let assets = scan_assets(&src, AssetKind::Vector);
        export_vector(&assets[0], &dest).unwrap();

        let out = fs::read_to_string(dest.join("icons/mark.svg")).unwrap();
        assert!(out.contains("<svg"));
        // Source vector is never removed
        assert!(src.join("icons/mark.svg").exists());
    }

    #[test]
    fn test_clean_dest_preserves_videos() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("dest");
        fs::create_dir_all(dest.join("clips")).unwrap();
        fs::create_dir_all(dest.join("old")).unwrap();
        fs::write(dest.join("stale@1x.webp"), "x").unwrap();
        fs::write(dest.join("clips/intro.mp4"), "video bytes").unwrap();
        fs::write(dest.join("old/stale.svg"), "<svg/>").unwrap();

        clean_dest_except_videos(&dest).unwrap();

        assert!(dest.join("clips/intro.mp4").exists());
        assert!(!dest.join("stale@1x.webp").exists());
        // Emptied directories are removed
        assert!(!dest.join("old").exists());
        assert!(dest.join("clips").exists());
    }

    #[test]
    fn test_clean_missing_dest_is_ok() {
        let dir = TempDir::new().unwrap();
        clean_dest_except_videos(&dir.path().join("nope")).unwrap();
    }
}
