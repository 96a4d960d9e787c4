//! Source asset classification, scanning and naming conventions.

mod kind;
mod naming;
mod scan;

pub use kind::{AssetKind, RASTER_EXTENSIONS, VECTOR_EXTENSIONS, VIDEO_EXTENSIONS};
pub use naming::{DensityTier, FallbackFormat, VariantName, parse_variant_name};
pub use scan::{SourceAsset, scan_assets};
