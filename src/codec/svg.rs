//! SVG optimization and rasterization using usvg/resvg.

use std::sync::Arc;

use anyhow::{Context, Result};
use image::RgbaImage;

/// Options for SVG optimization
#[derive(Debug, Clone)]
pub struct OptimizeOptions {
    /// DPI for rendering calculations.
    pub dpi: f32,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self { dpi: 96.0 }
    }
}

/// Optimize SVG using usvg
///
/// Parses the document and re-serializes it without indentation, which
/// normalizes the markup and drops editor metadata
pub fn optimize_svg(content: &[u8], options: &OptimizeOptions) -> Result<Vec<u8>> {
    let usvg_options = usvg::Options {
        dpi: options.dpi,
        ..Default::default()
    };

    let tree = usvg::Tree::from_data(content, &usvg_options).context("Failed to parse SVG")?;

    let write_options = usvg::WriteOptions {
        indent: usvg::Indent::None,
        ..Default::default()
    };

    Ok(tree.to_string(&write_options).into_bytes())
}

/// Load system fonts once per run.
///
/// Text elements render with whatever the host provides; on a machine with
/// no fonts the text nodes are simply dropped by usvg.
pub fn load_fonts() -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    Arc::new(db)
}

/// Render SVG markup to an RGBA image at its declared size.
pub fn render_markup(svg: &str, fontdb: &Arc<usvg::fontdb::Database>) -> Result<RgbaImage> {
    let options = usvg::Options {
        fontdb: Arc::clone(fontdb),
        ..Default::default()
    };

    let tree = usvg::Tree::from_data(svg.as_bytes(), &options).context("Failed to parse SVG")?;
    let size = tree.size().to_int_size();

    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .context("SVG has zero-sized canvas")?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    let mut out = RgbaImage::new(size.width(), size.height());
    for (px, out_px) in pixmap.pixels().iter().zip(out.pixels_mut()) {
        let c = px.demultiply();
        *out_px = image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    Ok(out)
}
