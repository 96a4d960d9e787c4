//! Placeholder canvas synthesis.
//!
//! A placeholder is a flat-color rectangle with a centered `WIDTHxHEIGHT`
//! label, rendered from synthesized SVG markup. Markup generation is pure;
//! rasterization goes through the codec layer.

use std::sync::Arc;

use anyhow::Result;
use image::RgbaImage;

use crate::codec::svg::render_markup;

/// Colors for the synthesized canvas.
#[derive(Debug, Clone)]
pub struct PlaceholderStyle {
    /// Canvas fill color.
    pub background: String,
    /// Label text color.
    pub foreground: String,
}

impl Default for PlaceholderStyle {
    fn default() -> Self {
        // Light gray background & black text
        Self {
            background: "#b0b0b0".to_string(),
            foreground: "#000000".to_string(),
        }
    }
}

/// Label text for a canvas of the given size.
pub fn label(width: u32, height: u32) -> String {
    format!("{width}x{height}")
}

/// Label font size: a fifth of the shorter dimension, rounded.
pub fn font_size(width: u32, height: u32) -> u32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let size = (f64::from(width.min(height)) / 5.0).round() as u32;
    size.max(1)
}

/// Synthesize the SVG markup for one placeholder (pure).
pub fn placeholder_markup(width: u32, height: u32, style: &PlaceholderStyle) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}">
  <rect width="100%" height="100%" fill="{bg}"/>
  <text x="50%" y="50%" font-size="{font_size}" dominant-baseline="middle" text-anchor="middle" fill="{fg}" font-family="sans-serif">{label}</text>
</svg>"#,
        bg = style.background,
        font_size = font_size(width, height),
        fg = style.foreground,
        label = label(width, height),
    )
}

/// Render a placeholder canvas to pixels.
pub fn render_placeholder(
    width: u32,
    height: u32,
    style: &PlaceholderStyle,
    fontdb: &Arc<usvg::fontdb::Database>,
) -> Result<RgbaImage> {
    render_markup(&placeholder_markup(width, height, style), fontdb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::svg::load_fonts;

    #[test]
    fn test_label_format() {
        assert_eq!(label(1200, 800), "1200x800");
        assert_eq!(label(1, 1), "1x1");
    }

    #[test]
    fn test_font_size_is_fifth_of_shorter_side() {
        assert_eq!(font_size(1200, 800), 160);
        assert_eq!(font_size(800, 1200), 160);
        assert_eq!(font_size(799, 1200), 160); // 159.8 rounds up
        assert_eq!(font_size(797, 1200), 159); // 159.4 rounds down
        assert_eq!(font_size(2, 2), 1);
    }

    #[test]
    fn test_markup_contents() {
        let markup = placeholder_markup(1200, 800, &PlaceholderStyle::default());
        assert!(markup.contains(r#"width="1200""#));
        assert!(markup.contains(r#"height="800""#));
        assert!(markup.contains(">1200x800<"));
        assert!(markup.contains(r#"font-size="160""#));
        assert!(markup.contains(r##"fill="#b0b0b0""##));
        assert!(markup.contains(r##"fill="#000000""##));
    }

    #[test]
    fn test_markup_custom_style() {
        let style = PlaceholderStyle {
            background: "#102030".to_string(),
            foreground: "#ffffff".to_string(),
        };
        let markup = placeholder_markup(10, 10, &style);
        assert!(markup.contains(r##"fill="#102030""##));
        assert!(markup.contains(r##"fill="#ffffff""##));
    }

    #[test]
    fn test_render_matches_source_dimensions() {
        let fontdb = load_fonts();
        let img = render_placeholder(64, 48, &PlaceholderStyle::default(), &fontdb).unwrap();
        assert_eq!(img.dimensions(), (64, 48));
        // Corners are plain background
        assert_eq!(*img.get_pixel(0, 0), image::Rgba([176, 176, 176, 255]));
    }

    #[test]
    fn test_render_is_dimensionally_deterministic() {
        let fontdb = load_fonts();
        let style = PlaceholderStyle::default();
        let first = render_placeholder(32, 24, &style, &fontdb).unwrap();
        let second = render_placeholder(32, 24, &style, &fontdb).unwrap();
        assert_eq!(first.dimensions(), second.dimensions());
        assert_eq!(
            placeholder_markup(32, 24, &style),
            placeholder_markup(32, 24, &style)
        );
    }
}
