//! Thin wrappers over the image codec stack.

pub mod raster;
pub mod svg;
