//! Raster decode/encode helpers shared by both pipelines.
//!
//! WebP output goes through the `webp` crate because the `image` crate only
//! encodes lossless WebP; decode and the fallback formats stay on `image`.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};

use crate::asset::FallbackFormat;

/// Decode a raster file into memory.
pub fn decode(path: &Path) -> Result<DynamicImage> {
    image::open(path).with_context(|| format!("failed to decode {}", path.display()))
}

/// Read pixel dimensions without decoding the full image.
pub fn probe_dimensions(path: &Path) -> Result<(u32, u32)> {
    image::image_dimensions(path)
        .with_context(|| format!("failed to read dimensions of {}", path.display()))
}

/// Resize to exact target dimensions (no-op when already matching).
///
/// Callers compute aspect-preserving targets; this only performs the scale.
pub fn resize_to(img: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    if img.dimensions() == (width, height) {
        img.clone()
    } else {
        img.resize_exact(width, height, FilterType::Lanczos3)
    }
}

/// Encode as lossy WebP at the given quality and write to `path`.
pub fn write_webp(img: &DynamicImage, path: &Path, quality: u8) -> Result<()> {
    let rgba = img.to_rgba8();
    let encoder = webp::Encoder::from_rgba(rgba.as_raw(), rgba.width(), rgba.height());
    let data = encoder.encode(f32::from(quality));
    std::fs::write(path, &*data)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Write a fallback raster file in the requested format.
pub fn write_fallback(
    img: &DynamicImage,
    path: &Path,
    format: FallbackFormat,
    quality: u8,
) -> Result<()> {
    match format {
        FallbackFormat::Jpeg => write_jpeg(img, path, quality),
        FallbackFormat::Png => write_png(img, path),
    }
}

/// Encode as JPEG at the given quality.
fn write_jpeg(img: &DynamicImage, path: &Path, quality: u8) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut encoder = JpegEncoder::new_with_quality(BufWriter::new(file), quality);
    encoder
        .encode_image(&img.to_rgb8())
        .with_context(|| format!("failed to encode {}", path.display()))?;
    Ok(())
}

/// Encode as PNG (lossless, no quality knob).
fn write_png(img: &DynamicImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("failed to encode {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    fn solid_image(width: u32, height: u32) -> DynamicImage {
        RgbaImage::from_pixel(width, height, Rgba([120, 30, 200, 255])).into()
    }

    #[test]
    fn test_webp_round_trip_dimensions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.webp");

        write_webp(&solid_image(32, 16), &path, 85).unwrap();

        let decoded = decode(&path).unwrap();
        assert_eq!(decoded.dimensions(), (32, 16));
    }

    #[test]
    fn test_fallback_jpeg_and_png() {
        let dir = TempDir::new().unwrap();
        let img = solid_image(8, 8);

        let jpg = dir.path().join("out.jpg");
        write_fallback(&img, &jpg, FallbackFormat::Jpeg, 85).unwrap();
        assert_eq!(decode(&jpg).unwrap().dimensions(), (8, 8));

        let png = dir.path().join("out.png");
        write_fallback(&img, &png, FallbackFormat::Png, 85).unwrap();
        assert_eq!(decode(&png).unwrap().dimensions(), (8, 8));
    }

    #[test]
    fn test_resize_to_noop_keeps_dimensions() {
        let img = solid_image(10, 20);
        let same = resize_to(&img, 10, 20);
        assert_eq!(same.dimensions(), (10, 20));

        let smaller = resize_to(&img, 5, 10);
        assert_eq!(smaller.dimensions(), (5, 10));
    }

    #[test]
    fn test_probe_dimensions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("probe.png");
        solid_image(24, 12)
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        assert_eq!(probe_dimensions(&path).unwrap(), (24, 12));
    }

    #[test]
    fn test_decode_garbage_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.png");
        std::fs::write(&path, b"not an image").unwrap();

        assert!(decode(&path).is_err());
        assert!(probe_dimensions(&path).is_err());
    }
}
