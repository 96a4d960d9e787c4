//! Variant Deriver: density-tier derivation for raster sources.
//!
//! Split the way the asset module is: [`plan`] is pure sizing arithmetic,
//! [`export`] performs the filesystem and codec side effects.

pub mod export;
pub mod plan;

pub use export::{clean_dest_except_videos, export_raster, export_vector};
pub use plan::{ExportPlan, TierPlan, fit_within, plan_exports};
