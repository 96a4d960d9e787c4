//! Filename-convention parsing for density tiers.
//!
//! Source images opt into sizing rules through trailing filename tokens:
//!
//! - `photo.png` - authored at `@3x`, exports `@1x` (1/3) and `@2x` (2/3)
//! - `photo-HD.png` - authored at `@2x`, exports `@1x` (2/3)
//! - `icon-FPNG.png` - fallback raster output uses PNG instead of JPEG
//!
//! Tokens may stack in any order (`a-FPNG-HD` and `a-HD-FPNG` are
//! equivalent); both are stripped from the emitted base name.

/// Suffix marking an asset as authored at 2x density.
const HD_SUFFIX: &str = "-HD";

/// Suffix forcing PNG as the fallback raster format.
const FPNG_SUFFIX: &str = "-FPNG";

/// A named resolution multiplier for high-DPI display support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DensityTier {
    X1,
    X2,
    X3,
}

impl DensityTier {
    /// Filename suffix for this tier.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::X1 => "@1x",
            Self::X2 => "@2x",
            Self::X3 => "@3x",
        }
    }
}

/// Format used for non-WebP fallback outputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FallbackFormat {
    /// Lossy photographic format (default).
    #[default]
    Jpeg,
    /// Lossless indexed format, selected by the `-FPNG` token.
    Png,
}

impl FallbackFormat {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
        }
    }
}

/// Parsed naming convention for one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantName {
    /// Logical base name with all convention tokens stripped.
    pub base: String,
    /// Tier matching the authored pixel resolution.
    pub native_tier: DensityTier,
    /// Fallback raster format for this asset.
    pub fallback: FallbackFormat,
}

/// Parse a file stem's trailing convention tokens.
///
/// Pure function of the stem: repeatedly strips trailing `-HD` / `-FPNG`
/// tokens until neither remains. A strip that would leave an empty base is
/// not applied, so a file literally named `-HD.png` keeps its name.
pub fn parse_variant_name(stem: &str) -> VariantName {
    let mut base = stem;
    let mut hd = false;
    let mut fpng = false;

    loop {
        if let Some(rest) = base.strip_suffix(HD_SUFFIX)
            && !rest.is_empty()
        {
            hd = true;
            base = rest;
            continue;
        }
        if let Some(rest) = base.strip_suffix(FPNG_SUFFIX)
            && !rest.is_empty()
        {
            fpng = true;
            base = rest;
            continue;
        }
        break;
    }

    VariantName {
        base: base.to_string(),
        native_tier: if hd { DensityTier::X2 } else { DensityTier::X3 },
        fallback: if fpng {
            FallbackFormat::Png
        } else {
            FallbackFormat::Jpeg
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_is_3x() {
        let name = parse_variant_name("logo");
        assert_eq!(name.base, "logo");
        assert_eq!(name.native_tier, DensityTier::X3);
        assert_eq!(name.fallback, FallbackFormat::Jpeg);
    }

    #[test]
    fn test_hd_suffix_is_2x() {
        let name = parse_variant_name("hero-HD");
        assert_eq!(name.base, "hero");
        assert_eq!(name.native_tier, DensityTier::X2);
        assert_eq!(name.fallback, FallbackFormat::Jpeg);
    }

    #[test]
    fn test_fpng_suffix_forces_png() {
        let name = parse_variant_name("icon-FPNG");
        assert_eq!(name.base, "icon");
        assert_eq!(name.native_tier, DensityTier::X3);
        assert_eq!(name.fallback, FallbackFormat::Png);
    }

    #[test]
    fn test_stacked_tokens_either_order() {
        for stem in ["banner-FPNG-HD", "banner-HD-FPNG"] {
            let name = parse_variant_name(stem);
            assert_eq!(name.base, "banner", "failed for {stem}");
            assert_eq!(name.native_tier, DensityTier::X2);
            assert_eq!(name.fallback, FallbackFormat::Png);
        }
    }

    #[test]
    fn test_tokens_only_strip_at_end() {
        // Tokens in the middle of the name are not convention markers
        let name = parse_variant_name("my-HD-photo");
        assert_eq!(name.base, "my-HD-photo");
        assert_eq!(name.native_tier, DensityTier::X3);
    }

    #[test]
    fn test_empty_base_is_not_stripped() {
        let name = parse_variant_name("-HD");
        assert_eq!(name.base, "-HD");
        assert_eq!(name.native_tier, DensityTier::X3);

        let name = parse_variant_name("-FPNG");
        assert_eq!(name.base, "-FPNG");
        assert_eq!(name.fallback, FallbackFormat::Jpeg);
    }

    #[test]
    fn test_case_sensitive_tokens() {
        // Lowercase variants are ordinary name content
        let name = parse_variant_name("photo-hd");
        assert_eq!(name.base, "photo-hd");
        assert_eq!(name.native_tier, DensityTier::X3);
    }

    #[test]
    fn test_tier_suffixes() {
        assert_eq!(DensityTier::X1.suffix(), "@1x");
        assert_eq!(DensityTier::X2.suffix(), "@2x");
        assert_eq!(DensityTier::X3.suffix(), "@3x");
    }

    #[test]
    fn test_fallback_extensions() {
        assert_eq!(FallbackFormat::Jpeg.extension(), "jpg");
        assert_eq!(FallbackFormat::Png.extension(), "png");
    }
}
