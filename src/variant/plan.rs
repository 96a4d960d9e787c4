//! Tier planning (pure, no side effects).
//!
//! Given a parsed [`VariantName`] and the authored pixel size, computes the
//! exact output dimensions for every density tier. All filesystem and codec
//! work happens in [`super::export`]; this module is plain arithmetic so the
//! sizing rules are testable with varied caps.

use crate::asset::{DensityTier, VariantName};

/// One planned output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierPlan {
    pub tier: DensityTier,
    pub width: u32,
    pub height: u32,
}

/// Full export plan for one source raster.
///
/// Tiers are ordered smallest first; the native tier is always last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPlan {
    pub tiers: Vec<TierPlan>,
}

/// Compute the export plan for an asset.
///
/// Scaled tiers are derived as a fraction of the authored size, then every
/// tier (native included) is independently capped to the max box with
/// fit-inside scaling: aspect-preserving, shrink-only, never upscaling.
pub fn plan_exports(
    name: &VariantName,
    width: u32,
    height: u32,
    max_width: u32,
    max_height: u32,
) -> ExportPlan {
    let fractions: &[(DensityTier, u32, u32)] = match name.native_tier {
        // Authored at @2x: only @1x is derived, at 2/3 of native
        DensityTier::X2 => &[(DensityTier::X1, 2, 3)],
        // Authored at @3x: @1x at 1/3 and @2x at 2/3
        _ => &[(DensityTier::X1, 1, 3), (DensityTier::X2, 2, 3)],
    };

    let mut tiers = Vec::with_capacity(fractions.len() + 1);
    for &(tier, num, den) in fractions {
        let (w, h) = fit_within(scale_round(width, num, den), scale_round(height, num, den),
            max_width, max_height);
        tiers.push(TierPlan { tier, width: w, height: h });
    }

    let (w, h) = fit_within(width, height, max_width, max_height);
    tiers.push(TierPlan {
        tier: name.native_tier,
        width: w,
        height: h,
    });

    ExportPlan { tiers }
}

/// Shrink dimensions to fit inside a bounding box, preserving aspect ratio.
///
/// Dimensions already inside the box are returned unchanged (never upscales).
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width.max(1), height.max(1));
    }

    let scale = f64::min(
        f64::from(max_width) / f64::from(width),
        f64::from(max_height) / f64::from(height),
    );
    (
        scale_f64(width, scale).max(1),
        scale_f64(height, scale).max(1),
    )
}

/// Round `value * num / den` to the nearest integer, at least 1.
fn scale_round(value: u32, num: u32, den: u32) -> u32 {
    scale_f64(value, f64::from(num) / f64::from(den)).max(1)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Bounded by u32 inputs
fn scale_f64(value: u32, scale: f64) -> u32 {
    (f64::from(value) * scale).round() as u32
}
